//! Project Types

use serde::{Deserialize, Serialize};

/// Metrics a project has chosen to share with outside audiences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMetrics {
    /// Number of milestones reached.
    pub milestones_completed: Option<u32>,
    /// Number of milestones planned.
    pub total_milestones: Option<u32>,
    /// Change in team headcount.
    pub team_growth: Option<i64>,
}

/// Full project record as loaded by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_image: Option<String>,
    /// Funding target, in whole currency units.
    pub funding_goal: i64,
    /// Funding raised so far, in whole currency units.
    pub current_funding: i64,
    /// Whether funding figures may be shown to non-members.
    #[serde(default)]
    pub is_public_funding: bool,
    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
    /// Whether the project is currently open to investment.
    #[serde(default)]
    pub is_seeking_investment: bool,
    /// Whether the project has open positions.
    #[serde(default)]
    pub is_hiring: bool,
}
