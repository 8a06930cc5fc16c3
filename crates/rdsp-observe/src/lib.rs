//! Logging setup for the RDS panel.
//!
//! Configuration is read from the process environment once, then a global
//! `tracing` subscriber is installed. Everything else in the workspace only
//! uses the `tracing` macros.

mod config;
mod error;
mod format;
mod install;
mod timer;

pub use config::{ENV_LOG_COLOR, ENV_LOG_FORMAT, ENV_LOG_LEVEL, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use install::init_logger;
pub use timer::UtcRfc3339;
