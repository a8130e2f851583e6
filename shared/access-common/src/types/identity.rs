//! Identity Types

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Stable user identifier as issued by the authentication layer.
pub type UserId = SmolStr;

/// A resolved caller identity.
///
/// Credentials are verified upstream; by the time an identity reaches the
/// engine only its stable id matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// User ID.
    pub id: UserId,
}

impl Identity {
    /// Creates an identity for the given user id.
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }
}
