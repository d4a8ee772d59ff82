//! 랭킹 결과 렌더링.
//!
//! 같은 결과를 두 가지 형태로 출력합니다:
//! - **터미널**: 테두리가 있는 고정폭 블록
//! - **메시지**: 메신저 전송용 평문 텍스트
//!
//! 두 렌더링 모두 [`to_fixed`]로 숫자를 포맷하므로 값 표기가 항상 일치합니다.
//! 부수효과가 없는 순수 함수이며, 실행 시각은 호출자가 넘겨줍니다.

use chrono::NaiveDateTime;
use std::fmt::Write;

use crate::domain::RankedList;
use crate::types::to_fixed;

/// 가격 앞에 붙는 통화 기호.
pub const CURRENCY_SYMBOL: &str = "₹";

/// 시트에 업데이트 시각이 없을 때 표시하는 값.
pub const UNKNOWN_UPDATE: &str = "Unknown";

const BORDER_WIDTH: usize = 65;
const SYMBOL_WIDTH: usize = 18;
const RUN_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// 리포트 헤더에 들어가는 정보.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    /// 시트의 "last update" 값
    pub last_update: String,
    /// 작업 실행 시각 (벽시계 기준)
    pub run_time: NaiveDateTime,
    /// 설정된 상위 종목 수
    pub top_n: usize,
}

impl ReportHeader {
    pub fn new(last_update: impl Into<String>, run_time: NaiveDateTime, top_n: usize) -> Self {
        Self {
            last_update: last_update.into(),
            run_time,
            top_n,
        }
    }

    fn title(&self) -> String {
        format!("📊 ETF BUY LIST (Rank 1–{})", self.top_n)
    }
}

/// 터미널 출력용 블록을 만듭니다.
pub fn render_terminal(ranked: &RankedList, header: &ReportHeader) -> String {
    let border = "=".repeat(BORDER_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{border}");
    let _ = writeln!(out, "{} | 52W Low Strategy", header.title());
    let _ = writeln!(out, "🕒 Last Update: {}", header.last_update);
    let _ = writeln!(
        out,
        "⏱ Run Time: {}",
        header.run_time.format(RUN_TIME_FORMAT)
    );
    let _ = writeln!(out, "{border}");

    for (i, record) in ranked.iter().enumerate() {
        let symbol: String = record.symbol.chars().take(SYMBOL_WIDTH).collect();
        let _ = writeln!(
            out,
            "{:>2}. {:<width$} CMP: {}{:>8} | From 52W Low: {:>6}%",
            i + 1,
            symbol,
            CURRENCY_SYMBOL,
            to_fixed(record.current_price),
            to_fixed(record.pct_from_low),
            width = SYMBOL_WIDTH,
        );
    }

    let _ = writeln!(out, "{border}");
    out
}

/// 메신저 전송용 평문 메시지를 만듭니다.
pub fn render_message(ranked: &RankedList, header: &ReportHeader) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", header.title());
    let _ = writeln!(out, "🕒 Last Update: {}", header.last_update);
    let _ = writeln!(out);

    for (i, record) in ranked.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, record.symbol);
        let _ = writeln!(out, "CMP: {}{}", CURRENCY_SYMBOL, to_fixed(record.current_price));
        let _ = writeln!(out, "From 52W Low: {}%", to_fixed(record.pct_from_low));
        let _ = writeln!(out);
    }

    out
}
