//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 시트를 가져오지 못함 (네트워크, 타임아웃, 비정상 응답, 잘못된 CSV)
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// 데이터 블록 시작 행을 찾을 수 없음
    #[error("Data not found: {0}")]
    DataNotFound(String),
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DataError::SourceUnavailable(format!("request timed out: {}", err))
        } else {
            DataError::SourceUnavailable(err.to_string())
        }
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::SourceUnavailable(format!("malformed CSV: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
