//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 도구에서도 IPR 식을 재사용할 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod ipr;
pub mod quantity;
pub mod ui_cli;
pub mod units;
