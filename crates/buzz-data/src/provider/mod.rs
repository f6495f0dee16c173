//! 커뮤니티 데이터 Provider 모듈.
//!
//! 원격 커뮤니티 서비스에서 데이터를 가져오는 Provider를 정의합니다.
//!
//! ## StockTwits
//! - `StockTwitsClient`: StockTwits 공개 API 클라이언트
//! - 트렌딩 심볼, 심볼별 최근 게시글, 심볼별 센티먼트
//!
//! 수집기는 `CommunitySource` trait만 알고 있으므로 다른 커뮤니티
//! 소스를 추가하거나 테스트 더블로 교체할 수 있습니다.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use buzz_core::TrendingSymbol;

use crate::error::Result;

pub mod stocktwits;

pub use stocktwits::StockTwitsClient;

/// 심볼 스트림의 게시글 한 건 (wire 타입).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPost {
    /// 게시글 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 본문
    #[serde(default)]
    pub body: String,
    /// 작성 시각 (제공자 형식 그대로)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// 심볼 센티먼트 응답 (불투명 전달).
///
/// 순위 파이프라인은 사용하지 않지만 같은 API 표면의 일부입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolSentiment {
    /// 티커 코드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// 제공자 센티먼트 데이터 (그대로 전달)
    #[serde(flatten)]
    pub data: HashMap<String, Value>,
}

/// 커뮤니티 데이터 소스 trait.
#[async_trait]
pub trait CommunitySource: Send + Sync {
    /// 소스 이름.
    fn name(&self) -> &str;

    /// 가장 많이 언급된 심볼을 최대 `limit`개 조회합니다.
    ///
    /// 원격 호출 성공 + 데이터 없음은 빈 목록이며 에러가 아닙니다.
    async fn get_trending_symbols(&self, limit: usize) -> Result<Vec<TrendingSymbol>>;

    /// 특정 심볼의 최근 게시글을 최대 `limit`개 조회합니다.
    async fn get_recent_posts(&self, symbol: &str, limit: usize) -> Result<Vec<CommunityPost>>;

    /// 특정 심볼의 센티먼트 데이터를 조회합니다.
    async fn get_symbol_sentiment(&self, symbol: &str) -> Result<SymbolSentiment>;
}
