use crate::errors::AppError;
use crate::models::roadmap::{MilestoneStatus, Roadmap};

/// Parses `new_status` and returns a copy of `roadmap` with one milestone's status replaced.
///
/// Any status is reachable from any other; the input roadmap is never modified.
pub fn apply_milestone_status(
    roadmap: &Roadmap,
    phase_id: &str,
    milestone_id: &str,
    new_status: &str,
) -> Result<Roadmap, AppError> {
    let status: MilestoneStatus = new_status.parse()?;
    set_milestone_status(roadmap, phase_id, milestone_id, status)
}

/// Typed variant of [`apply_milestone_status`].
pub fn set_milestone_status(
    roadmap: &Roadmap,
    phase_id: &str,
    milestone_id: &str,
    status: MilestoneStatus,
) -> Result<Roadmap, AppError> {
    let phase_idx = roadmap
        .phases
        .iter()
        .position(|p| p.id == phase_id)
        .ok_or_else(|| AppError::NotFound(format!("Phase {phase_id} not found")))?;

    let milestone_idx = roadmap.phases[phase_idx]
        .milestones
        .iter()
        .position(|m| m.id == milestone_id)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Milestone {milestone_id} not found in phase {phase_id}"
            ))
        })?;

    let mut updated = roadmap.clone();
    updated.phases[phase_idx].milestones[milestone_idx].status = status;
    Ok(updated)
}
