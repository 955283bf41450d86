//! CLI commands for admit

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod settings;
pub mod year;
