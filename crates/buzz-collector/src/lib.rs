//! Standalone community data collector for BuzzTrack.
//!
//! 이 crate는 커뮤니티 버즈 데이터를 수집/분석하는 바이너리를 제공합니다:
//! - 트렌딩 심볼 조회
//! - 심볼별 최근 게시글 수집 (요청 간 딜레이 적용)
//! - 수집된 게시글의 심볼 언급 순위 산출

pub mod config;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use stats::CollectionStats;
