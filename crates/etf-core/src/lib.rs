//! # ETF Core
//!
//! ETF 52주 저점 스크리너의 핵심 도메인 모델과 순수 로직을 제공합니다.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 시트에서 읽은 후보 행과 검증된 ETF 레코드 타입
//! - 52주 저점 대비 괴리율 기준 랭킹
//! - 터미널/메신저용 리포트 렌더링
//! - 로깅 인프라

pub mod domain;
pub mod logging;
pub mod report;
pub mod types;

pub use domain::*;
pub use logging::*;
pub use report::*;
pub use types::*;
