use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log format: {0} (expected: text|json)")]
    InvalidFormat(String),

    #[error("invalid log level filter: {0}")]
    InvalidLevel(String),

    #[error("invalid boolean for {var}: {value}")]
    InvalidFlag { var: &'static str, value: String },

    #[error("logger already initialized")]
    AlreadyInitialized,
}

pub type LoggerResult<T> = Result<T, LoggerError>;
