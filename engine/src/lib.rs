//! Project Access Engine
//!
//! Decides what a user may view, edit or manage in a project, given the
//! project's membership roster. Three parts:
//! - Role catalog: static rank and permission set per role
//! - Access evaluator: capability and minimum-role queries
//! - Public projection: redacted project view for non-members
//!
//! Every query is synchronous and side-effect free.

pub mod access;
pub mod config;
pub mod observability;
pub mod permissions;
pub mod projection;

pub use access::{evaluate_access, meets_minimum_role, AccessDecision};
pub use permissions::{AccessError, ProjectPermissions};
pub use projection::{project_public_view, PublicProjectView};
