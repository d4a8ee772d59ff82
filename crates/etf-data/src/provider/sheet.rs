//! 공개 스프레드시트 CSV 소스.
//!
//! Google Sheets의 `gviz/tq?tqx=out:csv` 내보내기 엔드포인트를 GET으로 호출해
//! 헤더 없는 CSV를 [`RawTable`]로 변환합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use etf_data::{SheetSource, TableSource, DEFAULT_SHEET_URL};
//! use std::time::Duration;
//!
//! let source = SheetSource::new(DEFAULT_SHEET_URL, Duration::from_secs(30))?;
//! let table = source.fetch_table().await?;
//! ```

use async_trait::async_trait;
use std::time::Duration;

use super::TableSource;
use crate::error::{DataError, Result};
use crate::table::RawTable;

/// ETF SIP 전략 시트의 CSV 내보내기 URL.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/\
1KPbQBEdz5mJlB9prdFNn7_6_5F8gA4uN3DvAXUvAeII/gviz/tq?tqx=out:csv&sheet=ETF_Sip_Strategy";

/// 공개 스프레드시트 소스.
#[derive(Clone)]
pub struct SheetSource {
    client: reqwest::Client,
    url: String,
}

impl SheetSource {
    /// 새 시트 소스를 생성합니다.
    ///
    /// # Arguments
    /// * `url` - CSV 내보내기 URL
    /// * `timeout` - 요청 전체 타임아웃
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::SourceUnavailable(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl TableSource for SheetSource {
    async fn fetch_table(&self) -> Result<RawTable> {
        tracing::debug!(url = %self.url, "시트 조회 요청");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::SourceUnavailable(format!(
                "HTTP {} from sheet endpoint",
                status
            )));
        }

        let body = response.text().await?;
        let table = RawTable::from_csv(&body)?;

        if table.is_empty() {
            tracing::warn!(url = %self.url, "시트 응답이 비어 있습니다");
        } else {
            tracing::info!(rows = table.len(), "시트 조회 완료");
        }
        Ok(table)
    }

    fn name(&self) -> &str {
        "google-sheet"
    }
}
