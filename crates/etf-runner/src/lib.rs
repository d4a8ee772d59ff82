//! 예약 실행형 ETF 52주 저점 스크리너.
//!
//! 이 crate는 스케줄러 바이너리와 그 구성 요소를 제공합니다:
//! - 환경변수 기반 설정 (실행 시각, 건너뛸 요일, 상위 N개, 텔레그램 자격증명)
//! - 매일 지정 시각에 작업을 실행하는 폴링 스케줄러
//! - 조회 → 파싱 → 랭킹 → 렌더링 → 출력/전송 작업 본문

pub mod config;
pub mod daemon;
pub mod error;
pub mod job;
pub mod scheduler;
pub mod summary;

pub use config::{RunnerConfig, ScheduleConfig, SheetConfig};
pub use daemon::{run_scheduler, run_scheduler_with_clock};
pub use error::{Result, RunnerError};
pub use job::{run_job, JobOutcome};
pub use scheduler::{DailyTrigger, ScheduleClock, Scheduler};
pub use summary::RunSummary;
