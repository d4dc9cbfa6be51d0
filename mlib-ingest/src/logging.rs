//! Log dispatcher construction
//!
//! There is no process-global subscriber. Binaries build a [`Dispatch`] from
//! the resolved [`LoggingConfig`] and hand it to the pipeline, which runs
//! inside it; the log file handle lives as long as the dispatcher.

use mlib_common::config::{load_config, LoggingConfig, TomlConfig};
use mlib_common::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Build a dispatcher for `config`
///
/// `RUST_LOG` takes precedence over the configured level. With a log file
/// configured, output is appended to it without ANSI colours; otherwise it
/// goes to stderr.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Dispatch> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            Error::Config(format!("Invalid log level '{}': {}", config.level, e))
        })?,
    };

    let dispatch = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            Dispatch::new(subscriber)
        }
        None => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            Dispatch::new(subscriber)
        }
    };

    Ok(dispatch)
}

/// Stderr dispatcher at info level, used before the config file is read
pub fn bootstrap_dispatch() -> Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(std::io::stderr)
        .finish();
    Dispatch::new(subscriber)
}

/// Load the config file, logging a failure through `dispatch`
///
/// Used by the binaries before their own dispatcher can be built.
pub fn load_config_logged(dispatch: &Dispatch, explicit: Option<&Path>) -> Result<TomlConfig> {
    tracing::dispatcher::with_default(dispatch, || {
        load_config(explicit).map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })
    })
}
