//! Project Access Common Library
//!
//! Data contracts owned by the caller and storage layers: identities,
//! membership rosters and project records. The engine only reads them.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
