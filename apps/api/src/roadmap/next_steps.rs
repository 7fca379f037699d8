use serde::{Deserialize, Serialize};

use crate::models::roadmap::{Milestone, MilestoneStatus, Phase, Roadmap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextStepKind {
    Continue,
    Start,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextStep {
    pub phase_id: String,
    pub phase: String,
    pub milestone: Milestone,
    #[serde(rename = "type")]
    pub kind: NextStepKind,
}

impl NextStep {
    fn new(phase: &Phase, milestone: &Milestone, kind: NextStepKind) -> Self {
        Self {
            phase_id: phase.id.clone(),
            phase: phase.name.clone(),
            milestone: milestone.clone(),
            kind,
        }
    }
}

fn first_with_status(roadmap: &Roadmap, status: MilestoneStatus) -> Option<(&Phase, &Milestone)> {
    roadmap.phases.iter().find_map(|phase| {
        phase
            .milestones
            .iter()
            .find(|m| m.status == status)
            .map(|m| (phase, m))
    })
}

/// A single focused recommendation: resume the first in-progress milestone
/// anywhere in the roadmap, else start the first not-started one. Empty when
/// nothing is left to do.
pub fn get_next_steps(roadmap: &Roadmap) -> Vec<NextStep> {
    if let Some((phase, milestone)) = first_with_status(roadmap, MilestoneStatus::InProgress) {
        return vec![NextStep::new(phase, milestone, NextStepKind::Continue)];
    }

    first_with_status(roadmap, MilestoneStatus::NotStarted)
        .map(|(phase, milestone)| NextStep::new(phase, milestone, NextStepKind::Start))
        .into_iter()
        .collect()
}
