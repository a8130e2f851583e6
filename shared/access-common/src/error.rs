//! Contract Error Types

use thiserror::Error;

/// Errors raised while hydrating contract types from loosely typed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A role name outside the closed role set.
    #[error("Unknown project role: {0}")]
    UnknownRole(String),
}

/// Result alias for contract parsing.
pub type Result<T> = std::result::Result<T, Error>;
