//! 시트 데이터 수집 및 파싱.
//!
//! 이 crate는 다음을 제공합니다:
//! - 공개 스프레드시트 CSV를 가져오는 데이터 소스
//! - 원본 테이블에서 업데이트 시각과 ETF 데이터 블록을 찾는 파서

pub mod error;
pub mod provider;
pub mod table;

pub use error::{DataError, Result};
pub use provider::{SheetSource, TableSource, DEFAULT_SHEET_URL};
pub use table::{extract_metadata, extract_records, RawTable, DATA_BLOCK_PREFIX, LAST_UPDATE_LABEL};
