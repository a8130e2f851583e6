//! Permission system types and utilities.
//!
//! Two layers:
//! - Role catalog: static rank and permission set per role
//! - Resolution: a caller's role and custom grants from the project roster

pub mod catalog;
pub mod helpers;
pub mod project;
pub mod resolver;

pub use catalog::{outranks_or_equals, permissions_of, rank_of};
pub use helpers::{
    get_member_access_context, require_minimum_role, require_project_permission,
    MemberAccessContext,
};
pub use project::ProjectPermissions;
pub use resolver::{
    compute_project_permissions, effective_permissions, find_membership, resolve_role,
    AccessError,
};
