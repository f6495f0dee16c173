//! 트렌딩 심볼 타입 정의.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// 커뮤니티에서 자주 언급되는 것으로 보고된 트렌딩 심볼.
///
/// 파이프라인은 `symbol` 필드만 소비합니다. 제공자가 내려주는 나머지
/// 메타데이터는 `extra`에 그대로 보존되어 하위 소비자에게 전달됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingSymbol {
    /// 티커 코드 (예: AAPL)
    pub symbol: String,
    /// 종목명 (예: Apple Inc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 워치리스트 등록 수
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchlist_count: Option<i64>,
    /// 제공자 메타데이터 (불투명 전달)
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl TrendingSymbol {
    /// 티커 코드만으로 새 트렌딩 심볼을 생성합니다.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            title: None,
            watchlist_count: None,
            extra: HashMap::new(),
        }
    }

    /// 종목명을 설정합니다.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl fmt::Display for TrendingSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_symbol_builder() {
        let symbol = TrendingSymbol::new("AAPL").with_title("Apple Inc.");
        assert_eq!(symbol.symbol, "AAPL");
        assert_eq!(symbol.title.as_deref(), Some("Apple Inc."));
        assert_eq!(symbol.to_string(), "AAPL");
    }

    #[test]
    fn test_metadata_passthrough() {
        // 알려지지 않은 필드는 extra에 보존됨
        let json = r#"{"symbol":"TSLA","title":"Tesla Inc.","watchlist_count":42,"exchange":"NASDAQ"}"#;
        let symbol: TrendingSymbol = serde_json::from_str(json).unwrap();

        assert_eq!(symbol.symbol, "TSLA");
        assert_eq!(symbol.watchlist_count, Some(42));
        assert_eq!(
            symbol.extra.get("exchange").and_then(|v| v.as_str()),
            Some("NASDAQ")
        );
    }
}
