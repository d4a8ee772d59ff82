//! 작업 실행 요약 구조체.

use etf_notification::DeliveryOutcome;
use std::time::Duration;

/// 한 번의 작업 실행 요약
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// 시트에서 읽은 전체 행 수
    pub table_rows: usize,
    /// 데이터 블록 후보 행 수
    pub candidate_rows: usize,
    /// 숫자 변환을 통과한 행 수
    pub valid_rows: usize,
    /// 리포트에 포함된 행 수
    pub ranked_rows: usize,
    /// 시트의 업데이트 시각
    pub last_update: String,
    /// 알림 전송 결과
    pub delivery: DeliveryOutcome,
    /// 소요 시간
    pub elapsed: Duration,
}

impl RunSummary {
    /// 요약 로그 출력
    pub fn log_summary(&self) {
        tracing::info!(
            table_rows = self.table_rows,
            candidates = self.candidate_rows,
            valid = self.valid_rows,
            ranked = self.ranked_rows,
            last_update = %self.last_update,
            delivery = %self.delivery,
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "작업 완료"
        );
    }
}
