//! 원본 시트 테이블과 파서.
//!
//! 시트 CSV는 헤더 행이 없고 행마다 열 수가 다를 수 있습니다.
//! 업데이트 시각 행(`last update`)과 ETF 데이터 블록(`NSE:`로 시작하는 첫 행부터)이
//! 같은 테이블 안에 섞여 있습니다.
//!
//! ## CSV 예시
//!
//! ```csv
//! ETF SIP Strategy,,,,,,
//! Last Update,2024-01-01 15:30,,,,,
//! ,,,,,,
//! NSE:NIFTYBEES,Nifty 50,250.10,220.00,30.10,13.68,1
//! NSE:GOLDBEES,Gold,60.25,50.00,10.25,20.50,2
//! ```

use etf_core::{CandidateRow, UNKNOWN_UPDATE};

use crate::error::{DataError, Result};

/// 업데이트 시각 행의 첫 셀 라벨 (대소문자 무시, 앞뒤 공백 무시).
pub const LAST_UPDATE_LABEL: &str = "last update";

/// 데이터 블록 시작 행의 첫 셀 접두사.
pub const DATA_BLOCK_PREFIX: &str = "NSE:";

/// 데이터 소스가 반환한 그대로의 테이블.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// 헤더 없는 CSV 텍스트를 파싱합니다.
    ///
    /// 따옴표 필드를 처리하며 셀 값은 다듬지 않고 그대로 보관합니다.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 행의 첫 셀 (없으면 빈 문자열).
fn first_cell(row: &[String]) -> &str {
    row.first().map(String::as_str).unwrap_or("")
}

/// 업데이트 시각 값을 찾습니다.
///
/// 첫 셀이 `last update`인 첫 행의 두 번째 셀을 그대로 반환합니다.
/// 해당 행이 없거나 두 번째 셀이 없으면 `"Unknown"`입니다.
pub fn extract_metadata(table: &RawTable) -> String {
    table
        .rows()
        .iter()
        .find(|row| first_cell(row).trim().to_lowercase() == LAST_UPDATE_LABEL)
        .and_then(|row| row.get(1).cloned())
        .unwrap_or_else(|| UNKNOWN_UPDATE.to_string())
}

/// ETF 데이터 블록을 후보 행으로 추출합니다.
///
/// 첫 셀이 `NSE:`로 시작하는 첫 행부터 테이블 끝까지를 7열로 맞춰 반환합니다.
/// 시작 행이 없으면 [`DataError::DataNotFound`]입니다.
pub fn extract_records(table: &RawTable) -> Result<Vec<CandidateRow>> {
    let start = table
        .rows()
        .iter()
        .position(|row| first_cell(row).starts_with(DATA_BLOCK_PREFIX))
        .ok_or_else(|| {
            DataError::DataNotFound(format!(
                "no row starting with '{}' in {} rows",
                DATA_BLOCK_PREFIX,
                table.len()
            ))
        })?;

    let candidates: Vec<CandidateRow> = table.rows()[start..]
        .iter()
        .map(|row| CandidateRow::from_cells(row.iter().cloned()))
        .collect();

    tracing::debug!(start_row = start, count = candidates.len(), "데이터 블록 추출");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_from_csv_quoted_and_ragged() {
        let text = "\"Last Update\",\"2024-01-01, 15:30\"\n\
                    NSE:ABC,\"Asset, A\",100.50,90,10.5,11.67,1\n\
                    only-one\n";
        let parsed = RawTable::from_csv(text).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.rows()[0], vec!["Last Update", "2024-01-01, 15:30"]);
        assert_eq!(parsed.rows()[1][1], "Asset, A");
        assert_eq!(parsed.rows()[2], vec!["only-one"]);
    }

    #[test]
    fn test_extract_metadata() {
        let t = table(&[
            &["ETF Sheet"],
            &["  LAST Update  ", "2024-01-01"],
            &["last update", "later"],
        ]);
        assert_eq!(extract_metadata(&t), "2024-01-01");
    }

    #[test]
    fn test_extract_metadata_missing() {
        assert_eq!(extract_metadata(&table(&[&["foo", "bar"], &[]])), "Unknown");
        assert_eq!(extract_metadata(&RawTable::default()), "Unknown");
        assert_eq!(extract_metadata(&table(&[&["Last Update"]])), "Unknown");
    }

    #[test]
    fn test_extract_records_from_marker() {
        let t = table(&[
            &["Last Update", "2024-01-01"],
            &["Symbol", "Asset", "CMP"],
            &["NSE:ABC", "Asset A", "100.50", "90.00", "10.50", "11.67", "1", "x"],
            &["NSE:DEF", "Asset D", "50"],
            &["", "", ""],
        ]);

        let rows = extract_records(&t).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].symbol, "NSE:ABC");
        assert_eq!(rows[0].rank, "1");
        assert_eq!(rows[1].pct, "");
        assert_eq!(rows[2].symbol, "");
    }

    #[test]
    fn test_extract_records_prefix_is_case_sensitive() {
        let t = table(&[&["nse:abc", "x"], &[" NSE:ABC", "y"]]);
        assert!(matches!(extract_records(&t), Err(DataError::DataNotFound(_))));
    }

    #[test]
    fn test_extract_records_empty_table() {
        assert!(matches!(
            extract_records(&RawTable::default()),
            Err(DataError::DataNotFound(_))
        ));
    }
}
