//! 데이터 수집/분석 모듈.

pub mod community_collect;
pub mod mention_rank;

pub use community_collect::collect_community_data;
pub use mention_rank::{log_ranking, rank_mentions};
