//! 텔레그램 알림 서비스.
//!
//! Telegram Bot API의 `sendMessage`로 스크리너 리포트를 평문으로 전송합니다.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::types::{NotificationError, NotificationResult, NotificationSender};

/// Telegram Bot API 기본 URL.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// 전송 요청 타임아웃.
pub const TELEGRAM_TIMEOUT: Duration = Duration::from_secs(10);

/// 429 응답에 재시도 시간이 없을 때 사용하는 값 (초).
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// 텔레그램 알림 전송 설정.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// @BotFather에서 받은 봇 토큰
    pub bot_token: String,
    /// 메시지를 보낼 채팅 ID
    pub chat_id: String,
    /// API 기본 URL
    pub api_base: String,
    /// 요청 타임아웃
    pub timeout: Duration,
}

impl TelegramConfig {
    /// 새 텔레그램 설정을 생성합니다.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base: TELEGRAM_API_BASE.to_string(),
            timeout: TELEGRAM_TIMEOUT,
        }
    }

    /// API 기본 URL을 바꿉니다.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// 토큰과 채팅 ID가 모두 있는지 확인합니다.
    pub fn has_credentials(&self) -> bool {
        !self.bot_token.trim().is_empty() && !self.chat_id.trim().is_empty()
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

/// 에러 응답 본문 (`{"ok":false,"parameters":{"retry_after":N}}`).
#[derive(Debug, Deserialize)]
struct TelegramErrorBody {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Option<TelegramErrorParameters>,
}

#[derive(Debug, Deserialize)]
struct TelegramErrorParameters {
    #[serde(default)]
    retry_after: Option<u64>,
}

/// 텔레그램 알림 전송기.
pub struct TelegramSender {
    config: TelegramConfig,
    client: reqwest::Client,
}

impl TelegramSender {
    /// 새 텔레그램 전송기를 생성합니다.
    pub fn new(config: TelegramConfig) -> NotificationResult<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// 텔레그램에 원시 메시지를 전송합니다.
    async fn send_message(&self, text: &str) -> NotificationResult<()> {
        let params = serde_json::json!({
            "chat_id": self.config.chat_id,
            "text": text,
        });

        debug!(chat_id = %self.config.chat_id, "Sending Telegram message");

        let response = self
            .client
            .post(self.config.send_message_url())
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: Option<TelegramErrorBody> = serde_json::from_str(&body).ok();

        if status.as_u16() == 429 {
            let retry_after = parsed
                .and_then(|b| b.parameters)
                .and_then(|p| p.retry_after)
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            warn!(retry_after, "Telegram rate limited");
            return Err(NotificationError::RateLimited(retry_after));
        }

        let detail = parsed.and_then(|b| b.description).unwrap_or(body);
        error!("Failed to send Telegram message: {} - {}", status, detail);
        Err(NotificationError::SendFailed(format!(
            "HTTP {}: {}",
            status.as_u16(),
            detail
        )))
    }
}

#[async_trait]
impl NotificationSender for TelegramSender {
    async fn send(&self, message: &str) -> NotificationResult<()> {
        if !self.is_enabled() {
            return Err(NotificationError::Disabled);
        }
        self.send_message(message).await
    }

    fn is_enabled(&self) -> bool {
        self.config.has_credentials()
    }

    fn name(&self) -> &str {
        "telegram"
    }
}
