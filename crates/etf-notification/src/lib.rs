//! # ETF Notification
//!
//! 스크리너 리포트 전송 서비스.
//!
//! 지원 채널:
//! - Telegram (Bot API `sendMessage`)
//!
//! 전송 실패는 호출자에게 전파되지 않고 [`DeliveryOutcome`]으로 보고됩니다.

pub mod telegram;
pub mod types;

pub use telegram::*;
pub use types::*;
