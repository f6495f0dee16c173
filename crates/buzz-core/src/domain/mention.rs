//! 언급 집계 결과 타입.
//!
//! 분석 단계가 산출하는 심볼별 언급 횟수와 코퍼스 요약 통계를 정의합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 한 코퍼스에서 집계된 심볼별 언급 횟수.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionRecord {
    /// 심볼
    pub symbol: String,
    /// 언급 횟수 (1 이상)
    pub count: usize,
}

impl MentionRecord {
    /// 새 언급 레코드를 생성합니다.
    pub fn new(symbol: impl Into<String>, count: usize) -> Self {
        Self {
            symbol: symbol.into(),
            count,
        }
    }
}

impl fmt::Display for MentionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.count)
    }
}

/// 코퍼스 전체의 언급 요약 통계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionStatistics {
    /// 총 언급 수
    pub total_mentions: usize,
    /// 고유 심볼 수
    pub unique_symbols: usize,
    /// 텍스트당 평균 언급 수 (빈 코퍼스는 0.0)
    pub average_mentions_per_text: f64,
    /// 가장 많이 언급된 상위 5개 심볼
    pub most_common: Vec<MentionRecord>,
}

impl Default for MentionStatistics {
    fn default() -> Self {
        Self {
            total_mentions: 0,
            unique_symbols: 0,
            average_mentions_per_text: 0.0,
            most_common: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_statistics_zeroed() {
        let stats = MentionStatistics::default();
        assert_eq!(stats.total_mentions, 0);
        assert_eq!(stats.unique_symbols, 0);
        assert_eq!(stats.average_mentions_per_text, 0.0);
        assert!(stats.most_common.is_empty());
    }

    #[test]
    fn test_mention_record_display() {
        let record = MentionRecord::new("AAPL", 3);
        assert_eq!(record.to_string(), "AAPL (3)");
    }
}
