//! 알림 타입 및 trait 정의.

use async_trait::async_trait;
use tracing::{info, warn};

/// 알림 작업용 Result 타입.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// 알림 에러.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("알림 비활성화: 토큰 또는 채팅 ID 없음")]
    Disabled,

    #[error("알림 전송 실패: {0}")]
    SendFailed(String),

    #[error("요청 한도 초과: {0}초 후 재시도")]
    RateLimited(u64),

    #[error("네트워크 에러: {0}")]
    Network(#[from] reqwest::Error),
}

/// 한 번의 전송 시도 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// 전송 성공
    Sent,
    /// 자격증명이 없어 전송하지 않음 (에러 아님)
    Disabled,
    /// 전송 실패 (원인 메시지)
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

impl std::fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => write!(f, "sent"),
            Self::Disabled => write!(f, "disabled"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// 알림 전송기 trait.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// 평문 메시지를 전송합니다.
    async fn send(&self, message: &str) -> NotificationResult<()>;

    /// 전송기가 활성화되어 있는지 확인합니다.
    fn is_enabled(&self) -> bool;

    /// 전송기 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 메시지를 전송하고 결과를 보고합니다. 실패해도 에러를 반환하지 않습니다.
    async fn deliver(&self, message: &str) -> DeliveryOutcome {
        if !self.is_enabled() {
            warn!(sender = self.name(), "⚠️ 알림 비활성화: 토큰 또는 채팅 ID 없음, 전송 건너뜀");
            return DeliveryOutcome::Disabled;
        }

        match self.send(message).await {
            Ok(()) => {
                info!(sender = self.name(), "✅ 알림 전송 완료");
                DeliveryOutcome::Sent
            }
            Err(NotificationError::Disabled) => DeliveryOutcome::Disabled,
            Err(e) => {
                warn!(sender = self.name(), error = %e, "❌ 알림 전송 실패");
                DeliveryOutcome::Failed(e.to_string())
            }
        }
    }
}
