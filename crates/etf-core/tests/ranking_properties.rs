//! 랭킹 속성 테스트
//!
//! 임의의 후보 행 집합에 대해 길이, 정렬, 부분집합 속성을 검증합니다.

use etf_core::{parse_decimal, rank_candidates, CandidateRow};
use proptest::prelude::*;

/// 숫자 또는 시트에서 흔히 보이는 비숫자 셀
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (-5000i64..50000).prop_map(|v| format!("{}.{:02}", v / 100, (v % 100).abs())),
        1 => Just(String::new()),
        1 => Just("N/A".to_string()),
        1 => Just("#DIV/0!".to_string()),
    ]
}

fn candidates() -> impl Strategy<Value = Vec<CandidateRow>> {
    prop::collection::vec((cell(), cell()), 0..40).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (price, pct))| {
                CandidateRow::from_cells([
                    format!("NSE:E{i}"),
                    format!("Asset {i}"),
                    price,
                    "1".to_string(),
                    "1".to_string(),
                    pct,
                    i.to_string(),
                ])
            })
            .collect()
    })
}

fn is_valid(row: &CandidateRow) -> bool {
    parse_decimal(&row.current_price).is_some() && parse_decimal(&row.pct).is_some()
}

proptest! {
    #[test]
    fn ranked_length_is_min_of_top_n_and_valid_rows(rows in candidates(), top_n in 0usize..20) {
        let valid = rows.iter().filter(|r| is_valid(r)).count();
        let ranked = rank_candidates(&rows, top_n);

        prop_assert_eq!(ranked.len(), top_n.min(valid));
        prop_assert_eq!(ranked.valid_count, valid);
    }

    #[test]
    fn ranked_is_sorted_and_stable(rows in candidates()) {
        let ranked = rank_candidates(&rows, rows.len());
        let position = |symbol: &str| rows.iter().position(|r| r.symbol == symbol).unwrap();

        for pair in ranked.records.windows(2) {
            prop_assert!(pair[0].pct_from_low <= pair[1].pct_from_low);
            if pair[0].pct_from_low == pair[1].pct_from_low {
                prop_assert!(position(&pair[0].symbol) < position(&pair[1].symbol));
            }
        }
    }

    #[test]
    fn ranked_rows_come_from_valid_input(rows in candidates(), top_n in 0usize..20) {
        let ranked = rank_candidates(&rows, top_n);

        for record in ranked.iter() {
            let source = rows.iter().find(|r| r.symbol == record.symbol).unwrap();
            prop_assert!(is_valid(source));
            prop_assert_eq!(Some(record.pct_from_low), parse_decimal(&source.pct));
        }
    }
}

#[test]
fn test_top_five_closest_to_low() {
    let pcts = ["11.67", "14.2", "17.5", "19.0", "21.3", "24.8", "27.1", "30.0"];
    let rows: Vec<_> = pcts
        .iter()
        .enumerate()
        .rev()
        .map(|(i, pct)| {
            CandidateRow::from_cells([
                format!("NSE:E{i}"),
                format!("Asset {i}"),
                "100.50".to_string(),
                "90.00".to_string(),
                "10.50".to_string(),
                pct.to_string(),
                (i + 1).to_string(),
            ])
        })
        .collect();

    let ranked = rank_candidates(&rows, 5);

    assert_eq!(ranked.len(), 5);
    let got: Vec<_> = ranked.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(got, vec!["NSE:E0", "NSE:E1", "NSE:E2", "NSE:E3", "NSE:E4"]);
    assert_eq!(ranked.records[0].pct_from_low.to_string(), "11.67");
}
