//! Permission helper functions for callers.
//!
//! Resolve a caller once and run several checks against the result, or
//! resolve and check in a single call with the `require_*` helpers.

use access_common::{Identity, ProjectMembership, ProjectRole, UserId};

use super::catalog::{outranks_or_equals, permissions_of};
use super::project::ProjectPermissions;
use super::resolver::{compute_project_permissions, find_membership, AccessError};
use crate::access::AccessDecision;

/// Pre-computed access context for a caller in one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAccessContext {
    /// The caller's user ID, `None` for anonymous callers.
    pub user_id: Option<UserId>,

    /// Resolved role ([`ProjectRole::None`] for anonymous callers and non-members).
    pub role: ProjectRole,

    /// Permissions granted by the role alone.
    pub role_permissions: ProjectPermissions,

    /// Recognized custom permissions from the membership record.
    pub custom_permissions: ProjectPermissions,

    /// Union of role and custom permissions.
    pub computed_permissions: ProjectPermissions,

    /// Whether the caller holds a real membership. A roster record with role
    /// `none` does not count.
    pub is_member: bool,
}

impl MemberAccessContext {
    /// Check if the caller has the specified permission(s).
    #[must_use]
    pub const fn has_permission(&self, permission: ProjectPermissions) -> bool {
        self.computed_permissions.has(permission)
    }

    /// Require that the caller has the specified permission(s).
    pub fn require_permission(&self, permission: ProjectPermissions) -> Result<(), AccessError> {
        if self.has_permission(permission) {
            return Ok(());
        }
        if self.user_id.is_none() {
            return Err(AccessError::Unauthenticated);
        }
        if !self.is_member {
            return Err(AccessError::NotProjectMember);
        }
        Err(AccessError::MissingPermission(
            permission.difference(self.computed_permissions),
        ))
    }

    /// Whether the caller's role ranks at least as high as `required`.
    #[must_use]
    pub const fn meets_minimum_role(&self, required: ProjectRole) -> bool {
        outranks_or_equals(self.role, required)
    }

    /// Require that the caller's role ranks at least as high as `required`.
    pub fn require_minimum_role(&self, required: ProjectRole) -> Result<(), AccessError> {
        if self.meets_minimum_role(required) {
            return Ok(());
        }
        if self.user_id.is_none() {
            return Err(AccessError::Unauthenticated);
        }
        if !self.is_member {
            return Err(AccessError::NotProjectMember);
        }
        Err(AccessError::InsufficientRole {
            required,
            actual: self.role,
        })
    }

    /// Coarse capability flags for this context.
    #[must_use]
    pub const fn decision(&self) -> AccessDecision {
        let perms = self.computed_permissions;
        AccessDecision {
            can_view: perms.has(ProjectPermissions::VIEW_ALL),
            can_edit: perms.has(ProjectPermissions::EDIT_ALL),
            can_manage_team: perms.has(ProjectPermissions::MANAGE_TEAM),
            can_manage_funds: perms.has(ProjectPermissions::MANAGE_FUNDS),
            can_vote: perms.has(ProjectPermissions::VOTE_ALL),
            role: self.role,
        }
    }
}

/// Resolve the access context for a caller.
///
/// Never fails: anonymous callers and non-members get an empty context with
/// role [`ProjectRole::None`].
///
/// # Example
///
/// ```
/// use access_common::{Identity, ProjectMembership, ProjectRole};
/// use access_engine::permissions::get_member_access_context;
/// use access_engine::ProjectPermissions;
///
/// let members = vec![ProjectMembership::new("u1", ProjectRole::Investor)];
/// let ctx = get_member_access_context(Some(&Identity::new("u1")), &members);
/// assert!(ctx.has_permission(ProjectPermissions::VIEW_METRICS));
/// assert!(!ctx.has_permission(ProjectPermissions::VIEW_ALL));
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(user_id = identity.map(|i| i.id.as_str())))]
pub fn get_member_access_context(
    identity: Option<&Identity>,
    members: &[ProjectMembership],
) -> MemberAccessContext {
    let user_id = identity.map(|i| i.id.clone());

    let Some(membership) = find_membership(identity, members) else {
        return MemberAccessContext {
            user_id,
            role: ProjectRole::None,
            role_permissions: permissions_of(ProjectRole::None),
            custom_permissions: ProjectPermissions::empty(),
            computed_permissions: permissions_of(ProjectRole::None),
            is_member: false,
        };
    };

    let role_permissions = permissions_of(membership.role);
    let custom_permissions = ProjectPermissions::from_tags(&membership.custom_permissions);

    MemberAccessContext {
        user_id,
        role: membership.role,
        role_permissions,
        custom_permissions,
        computed_permissions: compute_project_permissions(membership.role, custom_permissions),
        is_member: membership.role.is_member(),
    }
}

/// Resolve the caller and require a specific permission.
///
/// # Example
///
/// ```ignore
/// // In an API handler:
/// let ctx = require_project_permission(Some(&identity), &members, ProjectPermissions::MANAGE_TEAM)
///     .map_err(|e| (StatusCode::FORBIDDEN, e.to_string()))?;
/// ```
pub fn require_project_permission(
    identity: Option<&Identity>,
    members: &[ProjectMembership],
    required_permission: ProjectPermissions,
) -> Result<MemberAccessContext, AccessError> {
    let ctx = get_member_access_context(identity, members);
    ctx.require_permission(required_permission)?;
    Ok(ctx)
}

/// Resolve the caller and require a minimum role.
pub fn require_minimum_role(
    identity: Option<&Identity>,
    members: &[ProjectMembership],
    required_role: ProjectRole,
) -> Result<MemberAccessContext, AccessError> {
    let ctx = get_member_access_context(identity, members);
    ctx.require_minimum_role(required_role)?;
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::resolver::effective_permissions;

    fn roster() -> Vec<ProjectMembership> {
        vec![
            ProjectMembership::new("founder", ProjectRole::Founder),
            ProjectMembership::new("investor", ProjectRole::Investor),
            ProjectMembership::new("dev", ProjectRole::TeamMember)
                .with_custom_permissions(["edit:all", "unknown:tag"]),
        ]
    }

    #[test]
    fn test_member_access_context_has_permission() {
        let ctx = get_member_access_context(Some(&Identity::new("dev")), &roster());

        assert!(ctx.is_member);
        assert_eq!(ctx.role, ProjectRole::TeamMember);
        assert_eq!(ctx.role_permissions, ProjectPermissions::TEAM_MEMBER_DEFAULT);
        assert_eq!(ctx.custom_permissions, ProjectPermissions::EDIT_ALL);
        assert!(ctx.has_permission(ProjectPermissions::EDIT_ALL));
        assert!(ctx.has_permission(ProjectPermissions::VIEW_TASKS));
        assert!(!ctx.has_permission(ProjectPermissions::MANAGE_TEAM));
    }

    #[test]
    fn test_anonymous_context_is_empty() {
        let ctx = get_member_access_context(None, &roster());

        assert_eq!(ctx.user_id, None);
        assert_eq!(ctx.role, ProjectRole::None);
        assert!(!ctx.is_member);
        assert!(ctx.computed_permissions.is_empty());
    }

    #[test]
    fn test_require_permission_errors() {
        let members = roster();

        let anon = get_member_access_context(None, &members);
        assert_eq!(
            anon.require_permission(ProjectPermissions::VIEW_ALL),
            Err(AccessError::Unauthenticated)
        );

        let stranger = get_member_access_context(Some(&Identity::new("x")), &members);
        assert_eq!(
            stranger.require_permission(ProjectPermissions::VIEW_ALL),
            Err(AccessError::NotProjectMember)
        );

        let investor = get_member_access_context(Some(&Identity::new("investor")), &members);
        assert_eq!(
            investor.require_permission(
                ProjectPermissions::VIEW_ALL | ProjectPermissions::VIEW_METRICS
            ),
            Err(AccessError::MissingPermission(ProjectPermissions::VIEW_ALL))
        );
        assert!(investor
            .require_permission(ProjectPermissions::VIEW_METRICS)
            .is_ok());
    }

    #[test]
    fn test_require_empty_permission_always_passes() {
        let anon = get_member_access_context(None, &[]);
        assert!(anon.require_permission(ProjectPermissions::empty()).is_ok());
    }

    #[test]
    fn test_require_minimum_role() {
        let members = roster();

        let ctx = require_minimum_role(
            Some(&Identity::new("founder")),
            &members,
            ProjectRole::BoardMember,
        )
        .unwrap();
        assert_eq!(ctx.role, ProjectRole::Founder);

        let err = require_minimum_role(
            Some(&Identity::new("investor")),
            &members,
            ProjectRole::BoardMember,
        )
        .unwrap_err();
        assert_eq!(
            err,
            AccessError::InsufficientRole {
                required: ProjectRole::BoardMember,
                actual: ProjectRole::Investor,
            }
        );

        assert_eq!(
            require_minimum_role(None, &members, ProjectRole::TeamMember).unwrap_err(),
            AccessError::Unauthenticated
        );
        assert!(require_minimum_role(None, &members, ProjectRole::None).is_ok());
    }

    #[test]
    fn test_require_project_permission() {
        let members = roster();

        let ctx = require_project_permission(
            Some(&Identity::new("founder")),
            &members,
            ProjectPermissions::DELETE_PROJECT,
        )
        .unwrap();
        assert!(ctx.is_member);

        assert_eq!(
            require_project_permission(
                Some(&Identity::new("nobody")),
                &members,
                ProjectPermissions::VIEW_ALL,
            )
            .unwrap_err(),
            AccessError::NotProjectMember
        );
    }

    #[test]
    fn test_require_minimum_role_for_caller_missing_from_roster() {
        let err = require_minimum_role(
            Some(&Identity::new("nobody")),
            &roster(),
            ProjectRole::TeamMember,
        )
        .unwrap_err();
        assert_eq!(err, AccessError::NotProjectMember);
    }

    #[test]
    fn test_none_role_record_is_not_a_member() {
        let members: Vec<ProjectMembership> =
            serde_json::from_str(r#"[{"user_id":"u1","role":"none"}]"#).unwrap();
        let identity = Identity::new("u1");

        let ctx = get_member_access_context(Some(&identity), &members);
        assert!(!ctx.is_member);
        assert_eq!(ctx.role, ProjectRole::None);

        assert_eq!(
            ctx.require_permission(ProjectPermissions::VIEW_ALL),
            Err(AccessError::NotProjectMember)
        );
        assert_eq!(
            ctx.require_minimum_role(ProjectRole::TeamMember),
            Err(AccessError::NotProjectMember)
        );

        // Same answers as for a caller with no record at all.
        let absent = get_member_access_context(Some(&identity), &[]);
        assert_eq!(
            ctx.require_permission(ProjectPermissions::VIEW_ALL),
            absent.require_permission(ProjectPermissions::VIEW_ALL)
        );
        assert_eq!(
            ctx.require_minimum_role(ProjectRole::TeamMember),
            absent.require_minimum_role(ProjectRole::TeamMember)
        );
    }

    #[test]
    fn test_context_matches_effective_permissions() {
        let members = roster();
        for membership in &members {
            let identity = Identity::new(membership.user_id.clone());
            let ctx = get_member_access_context(Some(&identity), &members);
            assert_eq!(
                ctx.computed_permissions,
                effective_permissions(membership),
                "{}",
                membership.user_id
            );
        }
    }

    #[test]
    fn test_decision_uses_exact_capability_flags() {
        let members = vec![ProjectMembership::new("co", ProjectRole::Cofounder)];
        let decision = get_member_access_context(Some(&Identity::new("co")), &members).decision();

        assert!(decision.can_view);
        assert!(decision.can_edit);
        assert!(decision.can_manage_team);
        assert!(!decision.can_manage_funds);
        assert!(decision.can_vote);
        assert_eq!(decision.role, ProjectRole::Cofounder);
    }
}
