//! 베이퍼 챔버 해석 로직을 라이브러리로 분리하여 CLI 외의 도구에서도 쓸 수 있게 한다.

pub mod app;
pub mod chamber;
pub mod config;
pub mod fluid;
pub mod mesh_db;
pub mod report;
pub mod ui_cli;
pub mod units;
