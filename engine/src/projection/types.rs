//! Types for the public project view.

use serde::{Deserialize, Serialize};

/// Redacted project view for callers who cannot view the full project.
///
/// Funding figures are `None` when the project keeps them private. They are
/// left out of the serialized form entirely so consumers can tell
/// "undisclosed" apart from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProjectView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_image: Option<String>,
    /// Funding target, present only for public-funding projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_goal: Option<i64>,
    /// Funding raised, present only for public-funding projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_funding: Option<i64>,
    pub milestones_completed: u32,
    pub total_milestones: u32,
    pub team_growth: i64,
    pub has_investment_opportunities: bool,
    pub has_open_roles: bool,
}

impl PublicProjectView {
    /// Whether funding figures are part of this view.
    #[must_use]
    pub const fn is_funding_disclosed(&self) -> bool {
        self.funding_goal.is_some()
    }
}
