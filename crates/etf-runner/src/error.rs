//! 에러 타입 정의.

use etf_data::DataError;
use thiserror::Error;

/// Runner 에러 타입
#[derive(Debug, Error)]
pub enum RunnerError {
    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),

    /// 데이터 소스 또는 파싱 에러
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, RunnerError>;
