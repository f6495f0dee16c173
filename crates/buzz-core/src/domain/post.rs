//! 게시글 레코드 및 수집 결과 타입.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::symbol::TrendingSymbol;

/// 수집된 커뮤니티 게시글 한 건.
///
/// `timestamp`는 제공자가 내려준 문자열을 그대로 보존합니다 (파싱하지 않음).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// 게시글이 속한 심볼 스트림의 티커
    pub symbol: String,
    /// 게시글 본문
    pub message: String,
    /// 작성 시각 (제공자 형식 그대로)
    pub timestamp: String,
}

impl PostRecord {
    /// 새 게시글 레코드를 생성합니다.
    pub fn new(
        symbol: impl Into<String>,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// 수집 실행 한 번의 결과.
///
/// 수집 루프가 점진적으로 채우며, 실행이 끝난 뒤에는 변경되지 않습니다.
/// 데이터 없음은 빈 시퀀스로 표현됩니다 (null 센티널 없음).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResult {
    /// 이번 실행에서 처리한 트렌딩 심볼
    pub symbols: Vec<TrendingSymbol>,
    /// 심볼 처리 순서대로 평탄화된 게시글
    pub messages: Vec<PostRecord>,
    /// 수집 시각
    pub collected_at: DateTime<Utc>,
}

impl CollectionResult {
    /// 수집 결과를 생성합니다.
    pub fn new(symbols: Vec<TrendingSymbol>, messages: Vec<PostRecord>) -> Self {
        Self {
            symbols,
            messages,
            collected_at: Utc::now(),
        }
    }

    /// 빈 수집 결과를 생성합니다.
    ///
    /// 트렌딩 심볼 조회가 실패했거나 심볼이 없을 때 반환되는 형태입니다.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// 심볼과 게시글이 모두 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.messages.is_empty()
    }

    /// 게시글 본문 목록을 반환합니다 (분석 단계 입력).
    pub fn message_bodies(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = CollectionResult::empty();
        assert!(result.is_empty());
        assert!(result.message_bodies().is_empty());
    }

    #[test]
    fn test_message_bodies_preserve_order() {
        let result = CollectionResult::new(
            vec![TrendingSymbol::new("AAPL")],
            vec![
                PostRecord::new("AAPL", "first", "2026-01-01T00:00:00Z"),
                PostRecord::new("AAPL", "second", "2026-01-01T00:01:00Z"),
            ],
        );

        assert_eq!(result.message_bodies(), vec!["first", "second"]);
    }
}
