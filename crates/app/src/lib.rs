//! Process entry support for the `stockroom` binary: configuration and
//! sample catalog seeding.

pub mod config;
pub mod sample;

pub use config::{AppConfig, ConfigError};
