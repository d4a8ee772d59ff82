//! 데이터 Provider 모듈.
//!
//! 시세 테이블을 가져오는 소스를 정의합니다.
//!
//! ## 공개 스프레드시트
//! - `SheetSource`: Google Sheets gviz CSV 내보내기 URL에서 테이블 조회
//! - 재시도 없이 작업당 한 번 호출하며, 같은 테이블을 메타데이터와 데이터 블록 추출에 함께 사용

pub mod sheet;

pub use sheet::{SheetSource, DEFAULT_SHEET_URL};

use async_trait::async_trait;

use crate::error::Result;
use crate::table::RawTable;

/// 원본 테이블을 제공하는 소스.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// 테이블 전체를 한 번 가져옵니다.
    async fn fetch_table(&self) -> Result<RawTable>;

    /// 로그용 소스 이름.
    fn name(&self) -> &str;
}
