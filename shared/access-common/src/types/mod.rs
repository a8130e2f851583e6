//! Shared contract types.

pub mod identity;
pub mod membership;
pub mod project;
pub mod role;

pub use identity::{Identity, UserId};
pub use membership::ProjectMembership;
pub use project::{Project, PublicMetrics};
pub use role::ProjectRole;
