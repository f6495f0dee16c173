//! 수집 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 수집 작업 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionStats {
    /// 처리한 심볼 수
    pub total: usize,
    /// 게시글 수집에 성공한 심볼 수
    pub success: usize,
    /// 에러가 발생한 심볼 수
    pub errors: usize,
    /// 게시글이 없었던 심볼 수 (조회 성공, 데이터 없음)
    pub empty: usize,
    /// 수집된 총 게시글 수
    pub total_posts: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CollectionStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            errors = self.errors,
            empty = self.empty,
            total_posts = self.total_posts,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let stats = CollectionStats {
            total: 4,
            success: 3,
            ..Default::default()
        };
        assert_eq!(stats.success_rate(), 75.0);
    }

    #[test]
    fn test_success_rate_empty() {
        let stats = CollectionStats::new();
        assert_eq!(stats.success_rate(), 0.0);
    }
}
