//! 버즈 트래커의 에러 타입.

use thiserror::Error;

/// 핵심 버즈 트래커 에러.
#[derive(Debug, Error)]
pub enum BuzzError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 원격 커뮤니티 API 에러
    #[error("원격 API 에러: {0}")]
    Remote(String),

    /// 데이터 에러
    #[error("데이터 에러: {0}")]
    Data(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 버즈 트래커 작업을 위한 Result 타입.
pub type BuzzResult<T> = Result<T, BuzzError>;

impl BuzzError {
    /// 재시도 가능한 에러인지 확인합니다.
    ///
    /// 원격 API 에러는 일시적일 수 있으므로 재시도 가능으로 분류합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BuzzError::Remote(_))
    }
}

impl From<serde_json::Error> for BuzzError {
    fn from(err: serde_json::Error) -> Self {
        BuzzError::Serialization(err.to_string())
    }
}
