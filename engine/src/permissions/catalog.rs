//! Role catalog.
//!
//! Static rank and permission set for every [`ProjectRole`]. Rank orders
//! roles for coarse gating only; it says nothing about capabilities. A board
//! member outranks an investor, yet their permission sets are disjoint, so a
//! capability question must always go through [`permissions_of`].

use access_common::ProjectRole;

use super::project::ProjectPermissions;

/// Permissions granted by a role.
///
/// # Examples
///
/// ```
/// use access_common::ProjectRole;
/// use access_engine::permissions::permissions_of;
/// use access_engine::ProjectPermissions;
///
/// assert!(permissions_of(ProjectRole::Founder).has(ProjectPermissions::MANAGE_FUNDS));
/// assert!(permissions_of(ProjectRole::None).is_empty());
/// ```
#[must_use]
pub const fn permissions_of(role: ProjectRole) -> ProjectPermissions {
    match role {
        ProjectRole::Founder => ProjectPermissions::FOUNDER_DEFAULT,
        ProjectRole::Cofounder => ProjectPermissions::COFOUNDER_DEFAULT,
        ProjectRole::BoardMember => ProjectPermissions::BOARD_MEMBER_DEFAULT,
        ProjectRole::Investor => ProjectPermissions::INVESTOR_DEFAULT,
        ProjectRole::TeamMember => ProjectPermissions::TEAM_MEMBER_DEFAULT,
        ProjectRole::None => ProjectPermissions::empty(),
    }
}

/// Hierarchy rank of a role (higher = more privileged).
#[must_use]
pub const fn rank_of(role: ProjectRole) -> u8 {
    match role {
        ProjectRole::Founder => 100,
        ProjectRole::Cofounder => 80,
        ProjectRole::BoardMember => 60,
        ProjectRole::Investor => 40,
        ProjectRole::TeamMember => 20,
        ProjectRole::None => 0,
    }
}

/// Whether `role` is at least as privileged as `required`.
#[must_use]
pub const fn outranks_or_equals(role: ProjectRole, required: ProjectRole) -> bool {
    rank_of(role) >= rank_of(required)
}
