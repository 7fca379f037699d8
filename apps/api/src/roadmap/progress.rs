use serde::{Deserialize, Serialize};

use crate::models::roadmap::{Milestone, MilestoneStatus, Phase, Roadmap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// round(completed / total × 100); 0 when there are no milestones.
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseProgress {
    pub phase_id: String,
    pub name: String,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapProgress {
    pub overall: Progress,
    pub phases: Vec<PhaseProgress>,
}

pub fn compute_progress<'a>(milestones: impl IntoIterator<Item = &'a Milestone>) -> Progress {
    let (completed, total) = milestones.into_iter().fold((0, 0), |(done, all), m| {
        let done = if m.status == MilestoneStatus::Completed {
            done + 1
        } else {
            done
        };
        (done, all + 1)
    });

    let percentage = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    Progress {
        completed,
        total,
        percentage,
    }
}

impl Phase {
    pub fn progress(&self) -> Progress {
        compute_progress(&self.milestones)
    }
}

impl Roadmap {
    pub fn progress(&self) -> Progress {
        compute_progress(self.milestones())
    }

    pub fn progress_report(&self) -> RoadmapProgress {
        RoadmapProgress {
            overall: self.progress(),
            phases: self
                .phases
                .iter()
                .map(|p| PhaseProgress {
                    phase_id: p.id.clone(),
                    name: p.name.clone(),
                    progress: p.progress(),
                })
                .collect(),
        }
    }
}
