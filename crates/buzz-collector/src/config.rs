//! 환경변수 기반 설정 모듈.

use crate::Result;
use std::time::Duration;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 수집 설정
    pub collect: CollectConfig,
    /// 분석 설정
    pub analyze: AnalyzeConfig,
    /// 데몬 모드 설정
    pub daemon: DaemonConfig,
}

/// 커뮤니티 데이터 수집 설정
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// 수집할 트렌딩 심볼 수
    pub num_symbols: usize,
    /// 심볼당 최대 게시글 수
    pub posts_per_symbol: usize,
    /// API 요청 간 딜레이 (밀리초)
    pub request_delay_ms: u64,
    /// API 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
}

/// 언급 분석 설정
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// 순위에 포함할 상위 심볼 수
    pub top_n: usize,
    /// 최소 심볼 길이
    pub min_symbol_length: usize,
    /// 최대 심볼 길이
    pub max_symbol_length: usize,
}

/// 데몬 모드 설정
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// 워크플로우 실행 주기 (분 단위)
    pub interval_minutes: u64,
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            collect: CollectConfig {
                num_symbols: env_var_parse("COLLECT_NUM_SYMBOLS", 20),
                posts_per_symbol: env_var_parse("COLLECT_POSTS_PER_SYMBOL", 10),
                request_delay_ms: env_var_parse("COLLECT_REQUEST_DELAY_MS", 500),
                request_timeout_secs: env_var_parse("COLLECT_REQUEST_TIMEOUT_SECS", 10),
            },
            analyze: AnalyzeConfig {
                top_n: env_var_parse("ANALYZE_TOP_N", 10),
                min_symbol_length: env_var_parse("ANALYZE_MIN_SYMBOL_LENGTH", 1),
                max_symbol_length: env_var_parse("ANALYZE_MAX_SYMBOL_LENGTH", 4),
            },
            daemon: DaemonConfig {
                interval_minutes: env_var_parse("DAEMON_INTERVAL_MINUTES", 60),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// 설정 값 검증
    fn validate(&self) -> Result<()> {
        if self.analyze.min_symbol_length < 1 {
            return Err(crate::error::CollectorError::Config(
                "ANALYZE_MIN_SYMBOL_LENGTH는 1 이상이어야 합니다".to_string(),
            ));
        }
        if self.analyze.max_symbol_length < self.analyze.min_symbol_length {
            return Err(crate::error::CollectorError::Config(
                "ANALYZE_MAX_SYMBOL_LENGTH는 최소 길이 이상이어야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            collect: CollectConfig {
                num_symbols: 20,
                posts_per_symbol: 10,
                request_delay_ms: 500,
                request_timeout_secs: 10,
            },
            analyze: AnalyzeConfig {
                top_n: 10,
                min_symbol_length: 1,
                max_symbol_length: 4,
            },
            daemon: DaemonConfig {
                interval_minutes: 60,
            },
        }
    }
}

impl CollectConfig {
    /// API 요청 간 딜레이를 Duration으로 반환
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// API 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl DaemonConfig {
    /// 워크플로우 실행 주기를 Duration으로 반환
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes * 60)
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = CollectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.collect.request_delay(), Duration::from_millis(500));
        assert_eq!(config.daemon.interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_invalid_length_range_rejected() {
        let mut config = CollectorConfig::default();
        config.analyze.min_symbol_length = 0;
        assert!(config.validate().is_err());

        let mut config = CollectorConfig::default();
        config.analyze.min_symbol_length = 5;
        config.analyze.max_symbol_length = 4;
        assert!(config.validate().is_err());
    }
}
