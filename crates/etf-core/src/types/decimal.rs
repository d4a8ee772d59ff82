//! 시세 값을 위한 Decimal 유틸리티.
//!
//! 시트 셀 문자열을 숫자로 변환하고, 두 렌더링이 동일한 규칙으로
//! 숫자를 출력하도록 고정 소수점 포맷을 제공합니다.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 퍼센트 타입 (11.67 = 11.67%).
pub type Percentage = Decimal;

/// 리포트에 표시되는 소수점 자릿수.
pub const DISPLAY_DECIMALS: u32 = 2;

/// 셀 문자열을 Decimal로 변환합니다.
///
/// 앞뒤 공백은 무시하며, 일반 표기와 지수 표기(`1.5e2`)를 모두 허용합니다.
/// 빈 문자열이나 숫자가 아닌 값은 `None`을 반환합니다.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// 지정된 자릿수로 반올림합니다 (0.5는 0에서 먼 쪽으로).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// 표시용 고정 소수점 문자열 (예: `100.5` → `"100.50"`).
pub fn to_fixed(value: Decimal) -> String {
    format!(
        "{:.prec$}",
        round_half_up(value, DISPLAY_DECIMALS),
        prec = DISPLAY_DECIMALS as usize
    )
}
