//! Project Membership Types

use serde::{Deserialize, Serialize};

use super::identity::UserId;
use super::role::ProjectRole;

/// One user's membership in one project.
///
/// Owned by the storage layer. Custom permissions are kept as raw tags:
/// the engine recognises the ones it knows and ignores the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMembership {
    /// Member's user ID.
    pub user_id: UserId,
    /// Member's role in the project.
    pub role: ProjectRole,
    /// Extra permission tags granted to this member on top of the role.
    #[serde(default)]
    pub custom_permissions: Vec<String>,
}

impl ProjectMembership {
    /// Creates a membership with no custom permissions.
    pub fn new(user_id: impl Into<UserId>, role: ProjectRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            custom_permissions: Vec::new(),
        }
    }

    /// Replaces the custom permission tags.
    #[must_use]
    pub fn with_custom_permissions<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_permissions = tags.into_iter().map(Into::into).collect();
        self
    }
}
