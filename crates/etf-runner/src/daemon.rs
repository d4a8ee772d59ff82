//! 데몬 모드 폴링 루프.

use chrono::NaiveDateTime;
use std::future::Future;
use std::io::Write;
use std::time::Duration;

use etf_data::TableSource;
use etf_notification::NotificationSender;

use crate::config::RunnerConfig;
use crate::job::run_job;
use crate::scheduler::Scheduler;

/// 스케줄 확인 주기.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// 종료 신호가 올 때까지 예약된 시각마다 작업을 실행합니다.
///
/// 설정된 스케줄 시계를 쓰고 터미널 렌더링은 stdout으로 출력합니다.
pub async fn run_scheduler<F>(
    config: &RunnerConfig,
    source: &dyn TableSource,
    notifier: &dyn NotificationSender,
    shutdown: F,
) where
    F: Future<Output = ()>,
{
    let clock = config.schedule.clock();
    let mut stdout = std::io::stdout();
    run_scheduler_with_clock(config, source, notifier, || clock.now(), &mut stdout, shutdown).await;
}

/// 시계와 출력 대상을 지정해 스케줄 루프를 실행합니다.
///
/// 작업은 루프 안에서 직접 await하므로 동시에 두 작업이 실행되지 않습니다.
/// 시작 시점에는 실행하지 않고, 한 틱에 여러 트리거가 도래하면 트리거마다
/// 한 번씩 실행합니다. 작업 실패는 루프를 멈추지 않습니다.
pub async fn run_scheduler_with_clock<C, W, F>(
    config: &RunnerConfig,
    source: &dyn TableSource,
    notifier: &dyn NotificationSender,
    now: C,
    out: &mut W,
    shutdown: F,
) where
    C: Fn() -> NaiveDateTime,
    W: Write,
    F: Future<Output = ()>,
{
    let mut scheduler = Scheduler::new(&config.schedule.run_times, now());

    if let Some(next) = scheduler.next_run() {
        tracing::info!(next_run = %next, "=== 데몬 모드 시작 ===");
    }

    let mut interval = tokio::time::interval(POLL_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("종료 신호 수신, 데몬 종료 중...");
                break;
            }
            _ = interval.tick() => {
                let tick = now();
                let due = scheduler.take_due(tick);

                for trigger in &due {
                    tracing::info!(trigger = %trigger.format("%H:%M"), "=== 예약 작업 실행 ===");
                    run_job(config, source, notifier, tick, false, out).await;
                }

                if !due.is_empty() {
                    if let Some(next) = scheduler.next_run() {
                        tracing::info!(next_run = %next, "=== 다음 실행 예약 ===");
                    }
                }
            }
        }
    }
}
