//! 계산 로직을 라이브러리로 분리하여 HTTP 서버와 CLI가 같은 파이프라인을 쓰게 한다.

pub mod app;
pub mod calc;
pub mod config;
pub mod error;
pub mod form;
pub mod fuel;
pub mod grid;
pub mod labs;
pub mod reliability;
pub mod solar;
pub mod web;
