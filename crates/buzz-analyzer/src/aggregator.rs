//! 언급 빈도 집계.
//!
//! 여러 텍스트에 추출기를 적용해 심볼별 언급 횟수를 세고,
//! 빈도 내림차순 순위와 요약 통계를 산출합니다.

use std::collections::HashMap;

use buzz_core::{MentionRecord, MentionStatistics};

use crate::extractor::SymbolExtractor;

/// 언급 집계기.
///
/// 순수 함수형으로 동작하며 호출 간 상태를 유지하지 않습니다.
/// 같은 입력에 대해 항상 같은 결과를 반환합니다.
#[derive(Debug, Clone, Default)]
pub struct MentionAggregator {
    extractor: SymbolExtractor,
}

impl MentionAggregator {
    /// 주어진 추출기로 집계기를 생성합니다.
    pub fn new(extractor: SymbolExtractor) -> Self {
        Self { extractor }
    }

    /// 여러 텍스트에서 심볼 언급을 분석하여 상위 `top_n`개를 반환합니다.
    ///
    /// 순위는 언급 횟수 내림차순이며, 동률은 코퍼스 전체에서 먼저
    /// 등장한 심볼이 앞에 옵니다.
    pub fn analyze_mentions<T: AsRef<str>>(&self, texts: &[T], top_n: usize) -> Vec<MentionRecord> {
        let occurrences = self.collect_occurrences(texts);

        tracing::debug!(
            texts = texts.len(),
            occurrences = occurrences.len(),
            top_n,
            "언급 분석"
        );

        let mut ranked = rank_occurrences(&occurrences);
        ranked.truncate(top_n);
        ranked
    }

    /// 코퍼스의 언급 요약 통계를 계산합니다.
    ///
    /// 빈 코퍼스는 0으로 채워진 통계를 반환합니다 (에러 아님).
    pub fn statistics<T: AsRef<str>>(&self, texts: &[T]) -> MentionStatistics {
        let occurrences = self.collect_occurrences(texts);
        let ranked = rank_occurrences(&occurrences);

        let unique_symbols = ranked.len();
        let total_mentions = occurrences.len();
        let average_mentions_per_text = if texts.is_empty() {
            0.0
        } else {
            total_mentions as f64 / texts.len() as f64
        };

        let mut most_common = ranked;
        most_common.truncate(5);

        MentionStatistics {
            total_mentions,
            unique_symbols,
            average_mentions_per_text,
            most_common,
        }
    }

    /// 텍스트 순서를 보존하며 전체 언급 시퀀스를 수집합니다.
    fn collect_occurrences<T: AsRef<str>>(&self, texts: &[T]) -> Vec<String> {
        let mut occurrences = Vec::new();
        for text in texts {
            occurrences.extend(self.extractor.extract(text.as_ref()));
        }
        occurrences
    }
}

/// 언급 시퀀스를 빈도 내림차순으로 정렬합니다.
///
/// 동률 기준: 연결된 코퍼스에서의 첫 등장 순서 (결정적).
fn rank_occurrences(occurrences: &[String]) -> Vec<MentionRecord> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (index, symbol) in occurrences.iter().enumerate() {
        let entry = counts.entry(symbol.as_str()).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(symbol, (count, first_seen))| (symbol, count, first_seen))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(symbol, count, _)| MentionRecord::new(symbol, count))
        .collect()
}
