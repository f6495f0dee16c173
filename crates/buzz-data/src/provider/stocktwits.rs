//! StockTwits 공개 API 클라이언트.
//!
//! StockTwits 커뮤니티에서 트렌딩 심볼과 심볼별 게시글을 수집합니다.
//!
//! # 지원 데이터
//!
//! - 가장 많이 언급된 심볼 (`/symbols/trending`)
//! - 트렌딩 피드 (`/trending/symbols`)
//! - 심볼별 최근 게시글 (`/symbols/{symbol}/messages`)
//! - 심볼별 센티먼트 (`/symbols/{symbol}/sentiment`)
//!
//! # 사용 예시
//! ```rust,ignore
//! let client = StockTwitsClient::new();
//! let trending = client.get_trending_symbols(20).await?;
//! let posts = client.get_recent_posts("AAPL", 10).await?;
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use buzz_core::TrendingSymbol;

use crate::error::{CommunityError, Result};
use crate::provider::{CommunityPost, CommunitySource, SymbolSentiment};

/// StockTwits API Base URL.
const DEFAULT_BASE_URL: &str = "https://api.stocktwits.com/api/v3";

/// 기본 요청 타임아웃.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// StockTwits API 클라이언트.
#[derive(Debug, Clone)]
pub struct StockTwitsClient {
    client: reqwest::Client,
    base_url: String,
}

/// 심볼 목록 응답 래퍼.
#[derive(Debug, Deserialize)]
struct SymbolsResponse {
    #[serde(default)]
    symbols: Option<Vec<TrendingSymbol>>,
}

/// 게시글 목록 응답 래퍼.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    messages: Option<Vec<CommunityPost>>,
}

impl StockTwitsClient {
    /// 기본 타임아웃으로 클라이언트를 생성합니다.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// 커스텀 타임아웃으로 클라이언트를 생성합니다.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("HTTP 클라이언트 생성 실패");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Base URL을 교체합니다 (테스트용 mock 서버 지정).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 트렌딩 피드를 조회합니다 (개수 파라미터 없는 엔드포인트).
    pub async fn get_trending_feed(&self) -> Result<Vec<TrendingSymbol>> {
        let response: SymbolsResponse = self.get_json("/trending/symbols", &[]).await?;
        Ok(response.symbols.unwrap_or_default())
    }

    /// API 요청 실행.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(url = %url, "StockTwits API 요청");

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CommunityError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CommunityError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(CommunityError::from)
    }
}

impl Default for StockTwitsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommunitySource for StockTwitsClient {
    fn name(&self) -> &str {
        "stocktwits"
    }

    async fn get_trending_symbols(&self, limit: usize) -> Result<Vec<TrendingSymbol>> {
        let response: SymbolsResponse = self
            .get_json("/symbols/trending", &[("limit", limit.to_string())])
            .await?;

        Ok(response.symbols.unwrap_or_default())
    }

    async fn get_recent_posts(&self, symbol: &str, limit: usize) -> Result<Vec<CommunityPost>> {
        let path = format!("/symbols/{}/messages", symbol);
        let response: MessagesResponse = self
            .get_json(&path, &[("limit", limit.to_string())])
            .await?;

        Ok(response.messages.unwrap_or_default())
    }

    async fn get_symbol_sentiment(&self, symbol: &str) -> Result<SymbolSentiment> {
        let path = format!("/symbols/{}/sentiment", symbol);
        self.get_json(&path, &[]).await
    }
}
