//! 52주 저가 근접도 랭킹.

use super::etf::{CandidateRow, RankedList};

/// 기본 상위 종목 수.
pub const DEFAULT_TOP_N: usize = 10;

/// 후보 행을 검증·정렬하여 상위 `top_n`개를 반환합니다.
///
/// - 현재가 또는 저가 대비 %가 숫자가 아닌 행은 조용히 제외됩니다.
/// - 저가 대비 % 오름차순으로 정렬하며, 같은 값은 원래 행 순서를 유지합니다.
/// - 결과 길이는 `min(top_n, 유효 행 수)`이고, 빈 결과도 정상입니다.
pub fn rank_candidates(candidates: &[CandidateRow], top_n: usize) -> RankedList {
    let mut records: Vec<_> = candidates.iter().filter_map(CandidateRow::to_record).collect();
    let valid_count = records.len();

    // sort_by는 안정 정렬
    records.sort_by(|a, b| a.pct_from_low.cmp(&b.pct_from_low));
    records.truncate(top_n);

    tracing::debug!(
        candidates = candidates.len(),
        valid = valid_count,
        ranked = records.len(),
        "랭킹 완료"
    );

    RankedList {
        records,
        candidate_count: candidates.len(),
        valid_count,
    }
}
