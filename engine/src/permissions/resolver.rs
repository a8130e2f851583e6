//! Permission resolution logic.
//!
//! Computes a caller's role and effective permissions from a project's
//! membership roster.

use access_common::{Identity, ProjectMembership, ProjectRole};
use thiserror::Error;

use super::catalog::permissions_of;
use super::project::ProjectPermissions;

/// Find the caller's membership record.
///
/// Returns `None` for anonymous callers and for users absent from the
/// roster. When a user appears more than once the first record wins.
pub fn find_membership<'a>(
    identity: Option<&Identity>,
    members: &'a [ProjectMembership],
) -> Option<&'a ProjectMembership> {
    let identity = identity?;
    members.iter().find(|m| m.user_id == identity.id)
}

/// Resolve the caller's role, falling back to [`ProjectRole::None`].
pub fn resolve_role(identity: Option<&Identity>, members: &[ProjectMembership]) -> ProjectRole {
    find_membership(identity, members).map_or(ProjectRole::None, |m| m.role)
}

/// Compute effective permissions for a role plus custom grants.
///
/// Custom grants are purely additive: nothing here can remove a permission
/// the role already carries.
pub const fn compute_project_permissions(
    role: ProjectRole,
    custom: ProjectPermissions,
) -> ProjectPermissions {
    permissions_of(role).union(custom)
}

/// Effective permissions of a single membership record.
pub fn effective_permissions(membership: &ProjectMembership) -> ProjectPermissions {
    compute_project_permissions(
        membership.role,
        ProjectPermissions::from_tags(&membership.custom_permissions),
    )
}

/// Reasons a guard helper refuses access.
///
/// Only produced by the `require_*` helpers, for callers that want a
/// `Result` at their boundary. The core queries never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No identity was supplied.
    #[error("Authentication required")]
    Unauthenticated,

    /// The caller is not on the project's roster.
    #[error("User is not a member of this project")]
    NotProjectMember,

    /// The caller lacks a required permission.
    #[error("Missing permission: {}", .0.tags().join(", "))]
    MissingPermission(ProjectPermissions),

    /// The caller's role ranks below the required role.
    #[error("Requires role {required} or higher (current role: {actual})")]
    InsufficientRole {
        required: ProjectRole,
        actual: ProjectRole,
    },
}
