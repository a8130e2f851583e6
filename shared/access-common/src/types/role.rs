//! Project Roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Relationship a user holds with a project.
///
/// The set is closed: storage layers map their role column onto one of these
/// variants through [`FromStr`], and anything else is rejected at that
/// boundary. `None` is a first-class variant for users with no membership so
/// that it can be matched like any other role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectRole {
    /// Created the project; full control.
    Founder,
    /// Co-leads the project alongside the founder.
    Cofounder,
    /// Sits on the project's board.
    BoardMember,
    /// Has invested in the project.
    Investor,
    /// Contributes to the project's work.
    TeamMember,
    /// No membership in the project.
    #[default]
    None,
}

impl ProjectRole {
    /// Returns every role, most privileged first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Founder,
            Self::Cofounder,
            Self::BoardMember,
            Self::Investor,
            Self::TeamMember,
            Self::None,
        ]
    }

    /// Wire name of the role.
    ///
    /// ```
    /// use access_common::ProjectRole;
    ///
    /// assert_eq!(ProjectRole::BoardMember.as_str(), "board_member");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Founder => "founder",
            Self::Cofounder => "cofounder",
            Self::BoardMember => "board_member",
            Self::Investor => "investor",
            Self::TeamMember => "team_member",
            Self::None => "none",
        }
    }

    /// Whether this role represents an actual membership.
    #[must_use]
    pub const fn is_member(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}
