//! 매일 지정 시각 트리거.
//!
//! 각 트리거는 다음 실행 시각(벽시계 기준)을 들고 있고, 폴링 틱마다
//! `next_run <= now`인 트리거가 실행 대상이 됩니다. 실행 후에는 `now` 이후의
//! 첫 발생 시각으로 다시 예약하므로, 프로세스가 멈춰 있던 동안 놓친
//! 트리거는 하루마다가 아니라 한 번만 실행됩니다.

use chrono::{Datelike, Duration, Local, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// 스케줄 판단에 쓰는 벽시계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleClock {
    /// 시스템 로컬 시간
    Local,
    /// 지정 시간대
    Zone(Tz),
}

impl ScheduleClock {
    /// 현재 벽시계 시각
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::Local => Local::now().naive_local(),
            Self::Zone(tz) => Utc::now().with_timezone(tz).naive_local(),
        }
    }
}

impl std::fmt::Display for ScheduleClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Zone(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// 요일 번호 (월=0 … 일=6).
pub fn weekday_index(at: NaiveDateTime) -> u32 {
    at.weekday().num_days_from_monday()
}

/// `now` 이후(초과) 처음으로 `time`이 되는 시각.
fn next_occurrence_after(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date().and_time(time);
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

/// 매일 반복되는 단일 실행 시각.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTrigger {
    time: NaiveTime,
    next_run: NaiveDateTime,
}

impl DailyTrigger {
    /// 등록 시점 기준으로 첫 실행을 예약합니다 (오늘 지났으면 내일).
    pub fn new(time: NaiveTime, now: NaiveDateTime) -> Self {
        Self {
            time,
            next_run: next_occurrence_after(time, now),
        }
    }

    pub fn next_run(&self) -> NaiveDateTime {
        self.next_run
    }

    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.next_run <= now
    }

    fn reschedule(&mut self, now: NaiveDateTime) {
        self.next_run = next_occurrence_after(self.time, now);
    }
}

/// 등록된 트리거 집합.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    triggers: Vec<DailyTrigger>,
}

impl Scheduler {
    pub fn new(times: &[NaiveTime], now: NaiveDateTime) -> Self {
        Self {
            triggers: times.iter().map(|&t| DailyTrigger::new(t, now)).collect(),
        }
    }

    /// 실행 대상 트리거를 꺼내고 다음 실행을 예약합니다.
    ///
    /// 반환값이 비어 있지 않으면 호출자는 작업을 한 번 실행합니다.
    pub fn take_due(&mut self, now: NaiveDateTime) -> Vec<NaiveTime> {
        let mut due = Vec::new();
        for trigger in self.triggers.iter_mut().filter(|t| t.is_due(now)) {
            due.push(trigger.time);
            trigger.reschedule(now);
        }
        due
    }

    /// 가장 이른 다음 실행 시각.
    pub fn next_run(&self) -> Option<NaiveDateTime> {
        self.triggers.iter().map(DailyTrigger::next_run).min()
    }
}
