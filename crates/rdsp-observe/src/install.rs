use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
    format::LoggerFormat,
    timer::UtcRfc3339,
};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a global subscriber is
/// already set.
///
/// # Examples
/// ```no_run
/// use rdsp_observe::{LoggerConfig, init_logger};
///
/// let cfg = LoggerConfig::from_env().expect("valid logging env");
/// init_logger(&cfg).expect("logger installed once");
/// tracing::info!("ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    let filter = cfg.env_filter()?;

    match cfg.format {
        LoggerFormat::Text => {
            let layer = fmt::layer()
                .with_ansi(cfg.should_use_color())
                .with_target(cfg.with_targets)
                .with_timer(UtcRfc3339);
            init_subscriber(tracing_subscriber::registry().with(filter).with(layer))
        }
        LoggerFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(cfg.with_targets)
                .with_timer(UtcRfc3339);
            init_subscriber(tracing_subscriber::registry().with(filter).with(layer))
        }
    }
}

fn init_subscriber<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}
