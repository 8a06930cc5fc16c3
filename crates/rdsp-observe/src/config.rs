use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::{
    error::{LoggerError, LoggerResult},
    format::LoggerFormat,
};

/// Filter expression, e.g. `info` or `rdsp_api=debug,info`.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// `text` or `json`.
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
/// `true`/`false`; colors still require stdout to be a terminal.
pub const ENV_LOG_COLOR: &str = "LOG_COLOR";

const DEFAULT_LEVEL: &str = "info";

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// `EnvFilter` directive string.
    pub level: String,
    /// Whether to include module targets in each line.
    pub with_targets: bool,
    /// Whether to use ANSI colors for text output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: DEFAULT_LEVEL.to_string(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Reads `LOG_LEVEL`, `LOG_FORMAT` and `LOG_COLOR` from the process environment.
    pub fn from_env() -> LoggerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset or blank variables keep their defaults; malformed ones are errors
    /// so that a typo in deployment fails loudly at startup.
    pub fn from_lookup<F>(lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(level) = get(ENV_LOG_LEVEL) {
            EnvFilter::try_new(&level).map_err(|_| LoggerError::InvalidLevel(level.clone()))?;
            cfg.level = level;
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        if let Some(color) = get(ENV_LOG_COLOR) {
            cfg.use_color = parse_flag(ENV_LOG_COLOR, &color)?;
        }
        Ok(cfg)
    }

    /// Builds the `EnvFilter` for this configuration.
    pub fn env_filter(&self) -> LoggerResult<EnvFilter> {
        EnvFilter::try_new(&self.level).map_err(|_| LoggerError::InvalidLevel(self.level.clone()))
    }

    /// Colors are used only when enabled and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

fn parse_flag(var: &'static str, value: &str) -> LoggerResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
