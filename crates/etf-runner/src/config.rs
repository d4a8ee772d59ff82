//! 환경변수 기반 설정 모듈.
//!
//! 시작 시 한 번 읽어 불변 [`RunnerConfig`]로 만들고, 이후에는 참조로만 전달합니다.

use chrono::NaiveTime;
use chrono_tz::Tz;
use std::time::Duration;

use etf_core::DEFAULT_TOP_N;
use etf_data::DEFAULT_SHEET_URL;
use etf_notification::TelegramConfig;

use crate::error::{Result, RunnerError};
use crate::scheduler::ScheduleClock;

/// 기본 실행 시각 (24시간 형식).
pub const DEFAULT_RUN_TIMES: &str = "10:00,14:55";

/// 기본 건너뛸 요일 (월=0 … 일=6, 토/일).
pub const DEFAULT_SKIP_WEEKDAYS: &str = "5,6";

/// Runner 전체 설정
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// 시트 조회 설정
    pub sheet: SheetConfig,
    /// 스케줄 설정
    pub schedule: ScheduleConfig,
    /// 리포트에 포함할 상위 종목 수
    pub top_n: usize,
    /// 텔레그램 봇 토큰 (비어 있으면 전송 비활성화)
    pub telegram_bot_token: String,
    /// 텔레그램 채팅 ID (비어 있으면 전송 비활성화)
    pub telegram_chat_id: String,
}

/// 시트 조회 설정
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// CSV 내보내기 URL
    pub url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

/// 스케줄 설정
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// 매일 실행할 시각 (정렬, 중복 제거)
    pub run_times: Vec<NaiveTime>,
    /// 작업을 건너뛸 요일 (월=0 … 일=6, 정렬, 중복 제거)
    pub skip_weekdays: Vec<u32>,
    /// 시각/요일 판단 기준 시간대 (`None`이면 시스템 로컬)
    pub timezone: Option<Tz>,
}

impl RunnerConfig {
    /// 환경변수에서 설정 로드
    ///
    /// `.env` 파일은 호출 전에 `dotenvy`로 읽어 두어야 합니다.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 조회 함수로 설정 로드
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let top_n = parse_number::<usize>("TOP_N", lookup("TOP_N"), DEFAULT_TOP_N)?;
        if top_n == 0 {
            return Err(RunnerError::Config("TOP_N은 1 이상이어야 합니다".to_string()));
        }

        let timeout_secs = parse_number::<u64>("SHEET_TIMEOUT_SECS", lookup("SHEET_TIMEOUT_SECS"), 30)?;
        if timeout_secs == 0 {
            return Err(RunnerError::Config(
                "SHEET_TIMEOUT_SECS는 1 이상이어야 합니다".to_string(),
            ));
        }

        let timezone = match lookup("SCHEDULE_TIMEZONE").filter(|v| !v.trim().is_empty()) {
            Some(name) => Some(name.trim().parse::<Tz>().map_err(|_| {
                RunnerError::Config(format!("알 수 없는 시간대: SCHEDULE_TIMEZONE={}", name))
            })?),
            None => None,
        };

        Ok(Self {
            sheet: SheetConfig {
                url: get("SHEET_URL", DEFAULT_SHEET_URL),
                timeout_secs,
            },
            schedule: ScheduleConfig {
                run_times: parse_run_times(&get("RUN_TIMES", DEFAULT_RUN_TIMES))?,
                skip_weekdays: parse_skip_weekdays(&get("SKIP_WEEKDAYS", DEFAULT_SKIP_WEEKDAYS))?,
                timezone,
            },
            top_n,
            telegram_bot_token: get("TELEGRAM_BOT_TOKEN", ""),
            telegram_chat_id: get("TELEGRAM_CHAT_ID", ""),
        })
    }

    /// 텔레그램 전송 설정
    pub fn telegram_config(&self) -> TelegramConfig {
        TelegramConfig::new(self.telegram_bot_token.clone(), self.telegram_chat_id.clone())
    }

    /// 시작 배너 로그 출력
    pub fn log_banner(&self) {
        let times: Vec<String> = self
            .schedule
            .run_times
            .iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect();

        tracing::info!("🚀 ETF Auto Runner Started");
        tracing::info!(
            run_times = ?times,
            skip_weekdays = ?self.schedule.skip_weekdays,
            timezone = %self.schedule.clock(),
            top_n = self.top_n,
            telegram = self.telegram_config().has_credentials(),
            "⏰ 스케줄 설정"
        );
    }
}

impl SheetConfig {
    /// 요청 타임아웃을 Duration으로 반환
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ScheduleConfig {
    /// 해당 요일(월=0 … 일=6)을 건너뛰는지 확인
    pub fn skips(&self, weekday: u32) -> bool {
        self.skip_weekdays.contains(&weekday)
    }

    /// 스케줄 판단에 쓰는 시계
    pub fn clock(&self) -> ScheduleClock {
        match self.timezone {
            Some(tz) => ScheduleClock::Zone(tz),
            None => ScheduleClock::Local,
        }
    }
}

/// 숫자 환경변수 파싱 (없으면 기본값, 잘못된 값은 에러)
fn parse_number<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        Some(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map_err(|_| RunnerError::Config(format!("숫자가 아닌 값: {}={}", key, v))),
        _ => Ok(default),
    }
}

/// 쉼표로 구분된 `HH:MM` 목록 파싱
pub fn parse_run_times(raw: &str) -> Result<Vec<NaiveTime>> {
    let mut times = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            NaiveTime::parse_from_str(s, "%H:%M")
                .map_err(|_| RunnerError::Config(format!("잘못된 실행 시각 (HH:MM): {}", s)))
        })
        .collect::<Result<Vec<_>>>()?;

    if times.is_empty() {
        return Err(RunnerError::Config("RUN_TIMES가 비어 있습니다".to_string()));
    }

    times.sort();
    times.dedup();
    Ok(times)
}

/// 쉼표로 구분된 요일 번호 목록 파싱 (빈 문자열은 건너뛸 요일 없음)
pub fn parse_skip_weekdays(raw: &str) -> Result<Vec<u32>> {
    let mut days = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<u32>() {
            Ok(d) if d <= 6 => Ok(d),
            _ => Err(RunnerError::Config(format!(
                "잘못된 요일 번호 (0=월 … 6=일): {}",
                s
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    days.sort_unstable();
    days.dedup();
    Ok(days)
}
