//! Tracing setup for host applications.
//!
//! The engine only emits `tracing` events. Binaries embedding it can call
//! [`init_tracing`] to get a subscriber configured from [`Config`].

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Build the log filter: `RUST_LOG` wins, otherwise `config.log_filter`.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Install a global `fmt` subscriber.
///
/// Fails instead of panicking when a subscriber is already installed, so a
/// host with its own tracing setup can ignore the error.
pub fn init_tracing(config: &Config) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    let result = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    tracing::debug!(
        filter = %config.log_filter,
        json = config.log_json,
        "Tracing initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_without_panicking() {
        let config = Config::default();
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
