//! 언급 순위 산출 모듈.

use crate::CollectorConfig;

use buzz_analyzer::{MentionAggregator, SymbolExtractor};
use buzz_core::{CollectionResult, MentionRecord, MentionStatistics};

/// 수집 결과의 게시글에서 심볼 언급 순위와 통계 산출
pub fn rank_mentions(
    result: &CollectionResult,
    config: &CollectorConfig,
) -> (Vec<MentionRecord>, MentionStatistics) {
    let extractor = SymbolExtractor::new(
        config.analyze.min_symbol_length,
        config.analyze.max_symbol_length,
    );
    let aggregator = MentionAggregator::new(extractor);

    let texts = result.message_bodies();
    let ranked = aggregator.analyze_mentions(&texts, config.analyze.top_n);
    let statistics = aggregator.statistics(&texts);

    (ranked, statistics)
}

/// 순위와 통계를 로그로 출력
pub fn log_ranking(ranked: &[MentionRecord], statistics: &MentionStatistics) {
    for (idx, record) in ranked.iter().enumerate() {
        tracing::info!(
            rank = idx + 1,
            symbol = %record.symbol,
            count = record.count,
            "언급 순위"
        );
    }

    tracing::info!(
        total_mentions = statistics.total_mentions,
        unique_symbols = statistics.unique_symbols,
        average_mentions_per_text =
            format!("{:.2}", statistics.average_mentions_per_text),
        "언급 통계"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use buzz_core::{PostRecord, TrendingSymbol};

    #[test]
    fn test_rank_mentions_over_collection() {
        let config = CollectorConfig::default();
        let result = CollectionResult::new(
            vec![TrendingSymbol::new("AAPL"), TrendingSymbol::new("MSFT")],
            vec![
                PostRecord::new("AAPL", "AAPL to the moon, also MSFT", ""),
                PostRecord::new("AAPL", "AAPL again", ""),
                PostRecord::new("MSFT", "MSFT looking flat", ""),
            ],
        );

        let (ranked, statistics) = rank_mentions(&result, &config);

        assert_eq!(ranked[0], MentionRecord::new("AAPL", 2));
        assert_eq!(ranked[1], MentionRecord::new("MSFT", 2));
        assert_eq!(statistics.total_mentions, 4);
        assert_eq!(statistics.unique_symbols, 2);
    }

    #[test]
    fn test_rank_mentions_empty_collection() {
        let config = CollectorConfig::default();
        let result = CollectionResult::empty();

        let (ranked, statistics) = rank_mentions(&result, &config);

        assert!(ranked.is_empty());
        assert_eq!(statistics, MentionStatistics::default());
    }
}
