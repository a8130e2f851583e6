//! Engine Configuration
//!
//! Loads logging configuration from environment variables. The policy itself
//! is compiled in and has no runtime knobs.

use anyhow::{Context, Result};
use std::env;

/// Default `EnvFilter` directive when neither `RUST_LOG` nor `ACCESS_LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "access_engine=info";

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `EnvFilter` directive (e.g., "`access_engine=debug`")
    pub log_filter: String,

    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.into(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ACCESS_LOG_FILTER`: log filter directive (default: "`access_engine=info`")
    /// - `ACCESS_LOG_JSON`: `true`/`false`, JSON log output (default: false)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(val) = env::var("ACCESS_LOG_FILTER") {
            let val = val.trim();
            if !val.is_empty() {
                config.log_filter = val.to_string();
            }
        }
        if let Ok(val) = env::var("ACCESS_LOG_JSON") {
            config.log_json = val
                .trim()
                .parse::<bool>()
                .with_context(|| format!("ACCESS_LOG_JSON must be true or false, got {val:?}"))?;
        }

        Ok(config)
    }
}
