//! 스크리너 작업 본문.
//!
//! 요일 확인 → 시트 조회 → 파싱 → 랭킹 → 렌더링 → 터미널 출력 → 알림 전송.
//! 파이프라인 에러는 여기서 잡아 로그로 남기고 [`JobOutcome::Failed`]로 반환하므로
//! 스케줄러 루프는 작업 실패로 멈추지 않습니다.

use chrono::NaiveDateTime;
use std::io::Write;
use std::time::Instant;

use etf_core::{rank_candidates, render_message, render_terminal, ReportHeader};
use etf_data::{extract_metadata, extract_records, TableSource};
use etf_notification::NotificationSender;

use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};
use crate::scheduler::weekday_index;
use crate::summary::RunSummary;

/// 작업 실행 결과
#[derive(Debug)]
pub enum JobOutcome {
    /// 건너뛸 요일이라 아무 것도 하지 않음
    Skipped { weekday: u32 },
    /// 정상 완료
    Completed(RunSummary),
    /// 조회 또는 파싱 실패
    Failed(RunnerError),
}

impl JobOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// 작업을 한 번 실행합니다.
///
/// # Arguments
/// * `now` - 스케줄 시계 기준 현재 시각 (요일 판단과 리포트 실행 시각에 사용)
/// * `force` - `true`이면 건너뛸 요일이어도 실행
/// * `out` - 터미널 렌더링을 쓸 대상 (보통 stdout)
pub async fn run_job<W: Write>(
    config: &RunnerConfig,
    source: &dyn TableSource,
    notifier: &dyn NotificationSender,
    now: NaiveDateTime,
    force: bool,
    out: &mut W,
) -> JobOutcome {
    let weekday = weekday_index(now);
    if !force && config.schedule.skips(weekday) {
        tracing::info!(weekday, "⛔ Skipped Today");
        return JobOutcome::Skipped { weekday };
    }

    match execute(config, source, notifier, now, out).await {
        Ok(summary) => {
            summary.log_summary();
            JobOutcome::Completed(summary)
        }
        Err(e) => {
            tracing::error!(source = source.name(), error = %e, "❌ Job failed");
            if let Err(io_err) = writeln!(out, "❌ Job failed: {}", e) {
                tracing::warn!(error = %io_err, "터미널 출력 실패");
            }
            JobOutcome::Failed(e)
        }
    }
}

async fn execute<W: Write>(
    config: &RunnerConfig,
    source: &dyn TableSource,
    notifier: &dyn NotificationSender,
    now: NaiveDateTime,
    out: &mut W,
) -> Result<RunSummary> {
    let start = Instant::now();

    // 한 번 조회한 테이블로 메타데이터와 데이터 블록을 함께 추출
    let table = source.fetch_table().await?;
    let candidates = extract_records(&table)?;
    let last_update = extract_metadata(&table);

    let ranked = rank_candidates(&candidates, config.top_n);
    if ranked.is_empty() {
        tracing::warn!(
            candidates = ranked.candidate_count,
            "유효한 ETF 행이 없습니다, 빈 리포트를 출력합니다"
        );
    }

    let header = ReportHeader::new(last_update.clone(), now, config.top_n);

    let terminal = render_terminal(&ranked, &header);
    if let Err(e) = out.write_all(terminal.as_bytes()).and_then(|_| out.flush()) {
        tracing::warn!(error = %e, "터미널 출력 실패");
    }

    let delivery = notifier.deliver(&render_message(&ranked, &header)).await;

    Ok(RunSummary {
        table_rows: table.len(),
        candidate_rows: ranked.candidate_count,
        valid_rows: ranked.valid_count,
        ranked_rows: ranked.len(),
        last_update,
        delivery,
        elapsed: start.elapsed(),
    })
}
