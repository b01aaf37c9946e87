//! Diagnostic logging for the simulator. Reports go to stdout; tracing
//! events go to stderr so piping a report never mixes in log lines.

use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("APP_LOG_LEVEL '{value}' is not a valid auction-sim log filter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("could not install the auction-sim log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` takes precedence; otherwise the configured level applies.
fn log_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
        value: config.log_level.clone(),
        source,
    })
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_level_names_the_offending_value() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TelemetryConfig {
            log_level: "auction_sim=loud".to_string(),
        };
        match log_filter(&config) {
            Err(err @ TelemetryError::EnvFilter { .. }) => {
                assert!(err.to_string().contains("'auction_sim=loud'"));
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("expected filter error, got {other:?}"),
        }
    }

    #[test]
    fn directive_level_is_accepted() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TelemetryConfig {
            log_level: "auction_sim=debug,warn".to_string(),
        };
        assert!(log_filter(&config).is_ok());
    }
}
