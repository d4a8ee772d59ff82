//! 통합 테스트 공용 가짜 구현.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use etf_data::{DataError, RawTable, TableSource};
use etf_notification::{NotificationError, NotificationResult, NotificationSender};
use etf_runner::RunnerConfig;

pub enum Response {
    Table(RawTable),
    Unavailable,
}

pub struct FakeSource {
    response: Response,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn table(rows: Vec<Vec<&str>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(str::to_string).collect())
            .collect();
        Self {
            response: Response::Table(RawTable::new(rows)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            response: Response::Unavailable,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TableSource for FakeSource {
    async fn fetch_table(&self) -> etf_data::Result<RawTable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Response::Table(table) => Ok(table.clone()),
            Response::Unavailable => Err(DataError::SourceUnavailable(
                "HTTP 503 Service Unavailable".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub struct FakeNotifier {
    enabled: bool,
    fail: bool,
    sent: Mutex<Vec<String>>,
}

impl FakeNotifier {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            enabled: true,
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for FakeNotifier {
    async fn send(&self, message: &str) -> NotificationResult<()> {
        self.sent.lock().unwrap().push(message.to_string());
        if self.fail {
            Err(NotificationError::SendFailed("HTTP 500: boom".to_string()))
        } else {
            Ok(())
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub fn config(vars: &[(&str, &str)]) -> RunnerConfig {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RunnerConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
}
