//! 커뮤니티 API 에러 타입.
//!
//! 모든 변형은 호출자 입장에서 "원격 데이터 없음"으로 동일하게
//! 복구됩니다. 변형 구분은 진단용이며 제어 흐름에는 쓰이지 않습니다.

use thiserror::Error;

/// 커뮤니티 API 관련 에러.
#[derive(Debug, Error)]
pub enum CommunityError {
    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 요청 한도 초과
    #[error("Rate limit exceeded")]
    RateLimited,

    /// 비정상 응답 상태
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// 응답 본문 파싱 에러
    #[error("Parse error: {0}")]
    Parse(String),

    /// 알 수 없는 에러
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// 커뮤니티 API 작업을 위한 Result 타입.
pub type Result<T> = std::result::Result<T, CommunityError>;

impl CommunityError {
    /// 재시도 가능한 에러인지 확인.
    pub fn is_retryable(&self) -> bool {
        match self {
            CommunityError::Timeout(_)
            | CommunityError::Network(_)
            | CommunityError::RateLimited => true,
            CommunityError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for CommunityError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CommunityError::Timeout(err.to_string())
        } else if err.is_connect() {
            CommunityError::Network(err.to_string())
        } else if err.is_decode() {
            CommunityError::Parse(err.to_string())
        } else {
            CommunityError::Unknown(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CommunityError {
    fn from(err: serde_json::Error) -> Self {
        CommunityError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(CommunityError::Timeout("10s".to_string()).is_retryable());
        assert!(CommunityError::RateLimited.is_retryable());
        assert!(CommunityError::Status {
            status: 503,
            body: String::new()
        }
        .is_retryable());

        assert!(!CommunityError::Status {
            status: 404,
            body: String::new()
        }
        .is_retryable());
        assert!(!CommunityError::Parse("bad json".to_string()).is_retryable());
    }
}
