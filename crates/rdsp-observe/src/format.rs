use std::{fmt, str::FromStr};

use crate::error::LoggerError;

/// Output format of the panel logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggerFormat {
    /// Human-readable lines, colored on a terminal.
    #[default]
    Text,
    /// One JSON object per event, for log collectors.
    Json,
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoggerFormat::Text => "text",
            LoggerFormat::Json => "json",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        for input in ["text", "TEXT", " Text "] {
            assert_eq!(input.parse::<LoggerFormat>().unwrap(), LoggerFormat::Text);
        }
        assert_eq!("JsOn".parse::<LoggerFormat>().unwrap(), LoggerFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        for input in ["", "xml", "journald", "text-json"] {
            let err = input.parse::<LoggerFormat>().unwrap_err();
            assert!(
                matches!(err, LoggerError::InvalidFormat(_)),
                "expected InvalidFormat for {input:?}"
            );
        }
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(LoggerFormat::Text.to_string(), "text");
        assert_eq!(LoggerFormat::Json.to_string(), "json");
    }
}
