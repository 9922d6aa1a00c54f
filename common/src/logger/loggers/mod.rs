// Copyright (c) 2025 The Botho Foundation

//! Subscriber initialization.
//!
//! Environment:
//! - `RUST_LOG` or `DD_LOG`: filter directives (default: `info`)
//! - `DD_LOG_JSON=1`: JSON lines instead of the human-readable format
//! - `DD_LOG_STDERR=1`: write to stderr instead of stdout

use std::{
    env,
    io::{self, IsTerminal},
    string::String,
    sync::Once,
};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

/// Output options for the global subscriber.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LogConfig {
    /// Filter directives, as accepted by `EnvFilter`.
    pub filter: Option<String>,
    /// Emit JSON lines.
    pub json: bool,
    /// Write to stderr.
    pub stderr: bool,
}

impl LogConfig {
    /// Read options from the process environment.
    pub fn from_env() -> Self {
        let filter = env::var("RUST_LOG")
            .or_else(|_| env::var("DD_LOG"))
            .ok();
        Self {
            filter,
            json: env_flag("DD_LOG_JSON"),
            stderr: env_flag("DD_LOG_STDERR"),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let directives = self.filter.as_deref().unwrap_or("info");
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| v == "1").unwrap_or(false)
}

/// Install the global subscriber. Only the first call in a process has any
/// effect; a subscriber installed elsewhere is left in place.
pub fn init_logging(config: &LogConfig) {
    INIT.call_once(|| {
        let filter = config.env_filter();

        let result = if config.json {
            let layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::CLOSE);

            if config.stderr {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.with_writer(io::stderr))
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.with_writer(io::stdout))
                    .try_init()
            }
        } else {
            let layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            if config.stderr {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.with_ansi(io::stderr().is_terminal()).with_writer(io::stderr))
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.with_ansi(io::stdout().is_terminal()).with_writer(io::stdout))
                    .try_init()
            }
        };

        // Already set by the embedding application.
        let _ = result;
    });
}

/// Configure logging from the environment.
pub fn create_root_logger() {
    init_logging(&LogConfig::from_env());
}

/// Configure logging for a test or bench. Output goes to stderr unless
/// `DD_LOG_STDERR` says otherwise.
pub fn create_test_logger(test_name: &str) {
    let mut config = LogConfig::from_env();
    if env::var("DD_LOG_STDERR").is_err() {
        config.stderr = true;
    }
    init_logging(&config);
    tracing::debug!(test = test_name, "test logger ready");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_root_logger() {
        create_root_logger();
        // Second call is a no-op.
        create_root_logger();
    }

    #[test]
    fn test_create_test_logger() {
        create_test_logger("test_create_test_logger");
    }

    #[test]
    fn default_filter_is_info() {
        assert_eq!(LogConfig::default().env_filter().to_string(), "info");
    }
}
