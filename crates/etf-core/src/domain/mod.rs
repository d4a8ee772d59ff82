//! 스크리너 도메인 모델.

mod etf;
mod ranking;

pub use etf::*;
pub use ranking::*;
