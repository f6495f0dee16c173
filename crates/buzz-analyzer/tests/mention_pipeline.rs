//! 추출 → 집계 파이프라인 통합 테스트.

use buzz_analyzer::{MentionAggregator, SymbolExtractor};
use buzz_core::MentionRecord;

#[test]
fn test_pipeline_over_realistic_posts() {
    let aggregator = MentionAggregator::new(SymbolExtractor::new(1, 4));

    let posts = [
        "Trading SPY today, keeping eyes on DIA and QQQ for market direction",
        "NAIL stock looking strong this week, DX and BHE also moving",
        "$AAPL $MSFT $GOOGL these mega caps driving overall sentiment",
        "Bearish on QQQ this week, watching SPY support",
        "Market rotation: DIA outperforming, tech weakness with SPY and QQQ",
    ];

    let ranked = aggregator.analyze_mentions(&posts, 3);

    // SPY와 QQQ가 3회로 동률, SPY가 먼저 등장
    assert_eq!(ranked[0], MentionRecord::new("SPY", 3));
    assert_eq!(ranked[1], MentionRecord::new("QQQ", 3));
    assert_eq!(ranked[2], MentionRecord::new("DIA", 2));

    let stats = aggregator.statistics(&posts);
    assert_eq!(stats.unique_symbols, 8);
    assert_eq!(stats.most_common.len(), 5);

    // 언급 총합 불변식: 순위 전체의 count 합 == 총 언급 수
    let full = aggregator.analyze_mentions(&posts, usize::MAX);
    let count_sum: usize = full.iter().map(|r| r.count).sum();
    assert_eq!(count_sum, stats.total_mentions);
}

#[test]
fn test_statistics_average_with_symbol_free_texts() {
    let aggregator = MentionAggregator::new(SymbolExtractor::new(1, 4));

    // 심볼이 없는 텍스트도 평균의 분모에는 포함됨
    let posts = ["AAPL AAPL", "nothing here", "MSFT", "still nothing"];
    let stats = aggregator.statistics(&posts);

    assert_eq!(stats.total_mentions, 3);
    assert_eq!(stats.average_mentions_per_text, 0.75);
}
