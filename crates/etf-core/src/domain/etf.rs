//! ETF 시세 행 및 랭킹 결과 타입.

use rust_decimal::Decimal;

use crate::types::{parse_decimal, Percentage, Price};

/// 데이터 블록의 고정 열 개수.
pub const RECORD_COLUMNS: usize = 7;

/// 시트 데이터 블록에서 위치 기반으로 라벨링한 후보 행.
///
/// 아직 검증되지 않은 원본 문자열을 그대로 보관합니다.
/// 열 순서: 심볼, 자산명, 현재가, 52주 저가, 저가 대비 차이, 저가 대비 %, 순위.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRow {
    pub symbol: String,
    pub asset: String,
    pub current_price: String,
    pub week_low: String,
    pub diff: String,
    pub pct: String,
    pub rank: String,
}

impl CandidateRow {
    /// 셀 목록에서 후보 행을 만듭니다.
    ///
    /// 7열보다 길면 잘라내고, 짧으면 빈 문자열로 채웁니다.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = cells.into_iter().map(Into::<String>::into);
        let mut next = || iter.next().unwrap_or_default();

        Self {
            symbol: next(),
            asset: next(),
            current_price: next(),
            week_low: next(),
            diff: next(),
            pct: next(),
            rank: next(),
        }
    }

    /// 현재가와 저가 대비 %를 숫자로 변환해 레코드를 만듭니다.
    ///
    /// 둘 중 하나라도 변환에 실패하면 `None`입니다.
    pub fn to_record(&self) -> Option<EtfRecord> {
        let current_price = parse_decimal(&self.current_price)?;
        let pct_from_low = parse_decimal(&self.pct)?;

        Some(EtfRecord {
            symbol: self.symbol.clone(),
            asset_name: self.asset.clone(),
            current_price,
            week_low: parse_decimal(&self.week_low),
            diff_from_low: parse_decimal(&self.diff),
            pct_from_low,
            rank: self.rank.clone(),
        })
    }
}

/// 검증을 통과한 ETF 레코드.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtfRecord {
    /// 거래소 접두사 포함 심볼 (예: `NSE:NIFTYBEES`)
    pub symbol: String,
    /// 자산명
    pub asset_name: String,
    /// 현재가
    pub current_price: Price,
    /// 52주 저가 (시트 값이 숫자가 아니면 `None`)
    pub week_low: Option<Price>,
    /// 52주 저가 대비 차이 (시트 값이 숫자가 아니면 `None`)
    pub diff_from_low: Option<Decimal>,
    /// 52주 저가 대비 상승률 (%)
    pub pct_from_low: Percentage,
    /// 시트의 순위 열 (재계산하지 않음)
    pub rank: String,
}

/// 저가 대비 %가 낮은 순으로 정렬된 상위 N개 레코드.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedList {
    /// 정렬된 레코드 (길이 ≤ top N)
    pub records: Vec<EtfRecord>,
    /// 랭킹에 입력된 후보 행 수
    pub candidate_count: usize,
    /// 숫자 변환을 통과한 행 수
    pub valid_count: usize,
}

impl RankedList {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 변환 실패로 제외된 행 수.
    pub fn dropped_count(&self) -> usize {
        self.candidate_count.saturating_sub(self.valid_count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EtfRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cells_pads_short_rows() {
        let row = CandidateRow::from_cells(["NSE:ABC", "Asset A", "100.50"]);
        assert_eq!(row.symbol, "NSE:ABC");
        assert_eq!(row.current_price, "100.50");
        assert_eq!(row.week_low, "");
        assert_eq!(row.rank, "");
    }

    #[test]
    fn test_from_cells_truncates_long_rows() {
        let row = CandidateRow::from_cells([
            "NSE:ABC", "Asset A", "100.50", "90.00", "10.50", "11.67", "1", "extra", "more",
        ]);
        assert_eq!(row.pct, "11.67");
        assert_eq!(row.rank, "1");
    }

    #[test]
    fn test_to_record() {
        let row = CandidateRow::from_cells([
            "NSE:ABC", "Asset A", "100.50", "90.00", "10.50", "11.67", "1",
        ]);
        let record = row.to_record().unwrap();
        assert_eq!(record.current_price, dec!(100.50));
        assert_eq!(record.week_low, Some(dec!(90.00)));
        assert_eq!(record.diff_from_low, Some(dec!(10.50)));
        assert_eq!(record.pct_from_low, dec!(11.67));
        assert_eq!(record.rank, "1");
    }

    #[test]
    fn test_to_record_keeps_non_numeric_low() {
        let row = CandidateRow::from_cells([
            "NSE:ABC", "Asset A", "100.50", "-", "", "11.67", "",
        ]);
        let record = row.to_record().unwrap();
        assert_eq!(record.week_low, None);
        assert_eq!(record.diff_from_low, None);
    }

    #[test]
    fn test_dropped_count_never_underflows() {
        let list = RankedList {
            records: Vec::new(),
            candidate_count: 1,
            valid_count: 3,
        };
        assert_eq!(list.dropped_count(), 0);

        let list = RankedList {
            candidate_count: 5,
            valid_count: 2,
            ..Default::default()
        };
        assert_eq!(list.dropped_count(), 3);
    }

    #[test]
    fn test_to_record_requires_price_and_pct() {
        let no_price = CandidateRow::from_cells(["NSE:A", "A", "", "1", "1", "5.0", "1"]);
        assert!(no_price.to_record().is_none());

        let bad_pct = CandidateRow::from_cells(["NSE:A", "A", "10", "1", "1", "n/a", "1"]);
        assert!(bad_pct.to_record().is_none());
    }
}
