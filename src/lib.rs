//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면/서버에서도 재사용한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod purity;
pub mod ui_cli;
pub mod units;
