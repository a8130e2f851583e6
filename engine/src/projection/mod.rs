//! Public project projection.
//!
//! Builds the view shown to callers who fail the `can_view` check. The
//! function does not look at any access decision; deciding when to use it is
//! up to the caller.

pub mod types;

use access_common::Project;

pub use types::PublicProjectView;

/// Project a full record onto its public view.
///
/// Identity and display fields are always copied. Funding figures are copied
/// only when `is_public_funding` is set. Milestone counts and team growth come
/// from the public metrics, with missing values shown as zero. Opportunity
/// flags are always shown.
pub fn project_public_view(project: &Project) -> PublicProjectView {
    let metrics = project.public_metrics.clone().unwrap_or_default();
    let (funding_goal, current_funding) = if project.is_public_funding {
        (Some(project.funding_goal), Some(project.current_funding))
    } else {
        (None, None)
    };

    PublicProjectView {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        cover_image: project.cover_image.clone(),
        funding_goal,
        current_funding,
        milestones_completed: metrics.milestones_completed.unwrap_or(0),
        total_milestones: metrics.total_milestones.unwrap_or(0),
        team_growth: metrics.team_growth.unwrap_or(0),
        has_investment_opportunities: project.is_seeking_investment,
        has_open_roles: project.is_hiring,
    }
}
