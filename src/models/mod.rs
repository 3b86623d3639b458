pub mod config;

pub use config::{AppConfig, ConfigOverrides, CONFIG_ENV, DEFAULT_LIMIT};
