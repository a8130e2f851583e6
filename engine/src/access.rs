//! Access evaluation.
//!
//! Answers the coarse capability questions (view, edit, manage team, manage
//! funds, vote) and minimum-role route checks for one caller against one
//! project's roster. Both queries are total: anonymous callers, empty rosters
//! and unknown custom tags all fall through to the least privileged answer.
//!
//! Nothing is cached. Callers must pass a fresh roster whenever membership
//! may have changed.

use access_common::{Identity, ProjectMembership, ProjectRole};
use serde::{Deserialize, Serialize};

use crate::permissions::{get_member_access_context, outranks_or_equals, resolve_role};

/// Capability flags for one caller in one project.
///
/// Each flag requires the exact unqualified tag: `manage:funds:limited` does
/// not satisfy `can_manage_funds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessDecision {
    /// `view:all`
    pub can_view: bool,
    /// `edit:all`
    pub can_edit: bool,
    /// `manage:team`
    pub can_manage_team: bool,
    /// `manage:funds`
    pub can_manage_funds: bool,
    /// `vote:all`
    pub can_vote: bool,
    /// Resolved role of the caller.
    pub role: ProjectRole,
}

impl AccessDecision {
    /// Decision with every flag off and role `none`.
    #[must_use]
    pub const fn denied() -> Self {
        Self {
            can_view: false,
            can_edit: false,
            can_manage_team: false,
            can_manage_funds: false,
            can_vote: false,
            role: ProjectRole::None,
        }
    }

    /// Whether every capability flag is off.
    #[must_use]
    pub const fn is_denied(&self) -> bool {
        !(self.can_view
            || self.can_edit
            || self.can_manage_team
            || self.can_manage_funds
            || self.can_vote)
    }
}

impl Default for AccessDecision {
    fn default() -> Self {
        Self::denied()
    }
}

/// Evaluate a caller's capabilities in a project.
///
/// An absent identity is an anonymous caller and gets [`AccessDecision::denied`].
///
/// # Examples
///
/// ```
/// use access_common::{Identity, ProjectMembership, ProjectRole};
/// use access_engine::evaluate_access;
///
/// let members = vec![ProjectMembership::new("u1", ProjectRole::Founder)];
/// let decision = evaluate_access(Some(&Identity::new("u1")), &members);
/// assert!(decision.can_manage_funds);
///
/// let anonymous = evaluate_access(None, &members);
/// assert!(anonymous.is_denied());
/// ```
pub fn evaluate_access(
    identity: Option<&Identity>,
    members: &[ProjectMembership],
) -> AccessDecision {
    if identity.is_none() {
        tracing::trace!("Anonymous caller, denying access");
        return AccessDecision::denied();
    }

    let decision = get_member_access_context(identity, members).decision();

    tracing::debug!(
        user_id = identity.map(|i| i.id.as_str()),
        role = %decision.role,
        can_view = decision.can_view,
        can_edit = decision.can_edit,
        can_manage_team = decision.can_manage_team,
        can_manage_funds = decision.can_manage_funds,
        can_vote = decision.can_vote,
        "Evaluated project access"
    );

    decision
}

/// Check whether the caller's role ranks at least as high as `required_role`.
///
/// Anonymous callers and non-members resolve to [`ProjectRole::None`], so they
/// only pass when `required_role` is `None`.
pub fn meets_minimum_role(
    identity: Option<&Identity>,
    members: &[ProjectMembership],
    required_role: ProjectRole,
) -> bool {
    let role = resolve_role(identity, members);
    let allowed = outranks_or_equals(role, required_role);

    tracing::debug!(
        user_id = identity.map(|i| i.id.as_str()),
        %role,
        required = %required_role,
        allowed,
        "Checked minimum role"
    );

    allowed
}
