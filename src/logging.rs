//! src/logging.rs
//!
//! Installeert een globale `tracing`-subscriber voor de CLI. Diagnostiek gaat
//! naar `stderr`, zodat het resultaat op `stdout` parseerbaar blijft. Het niveau
//! komt uit `RUST_LOG` (standaard `info`); `MIS_LOG_FORMAT=json` schakelt over
//! op JSON-regels.

use std::env;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FORMAT_ENV: &str = "MIS_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        name: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat { provided: String },
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installeert de subscriber. Faalt als het formaat onbekend is of als er al
/// een globale subscriber is.
pub fn init_logging() -> Result<(), LoggingError> {
    let use_json = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => false,
        Err(err @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source: err,
            })
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = if use_json {
        fmt_layer.json().with_current_span(true).boxed()
    } else {
        fmt_layer.boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

/// `human` → `false`, `json` → `true` (hoofdletters en witruimte genegeerd).
pub fn parse_log_format(raw: &str) -> Result<bool, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(false),
        "json" => Ok(true),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
