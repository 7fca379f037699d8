use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::skill::SkillSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MilestoneStatus::NotStarted => "not_started",
            MilestoneStatus::InProgress => "in_progress",
            MilestoneStatus::Completed => "completed",
        }
    }

    /// Status the dashboard toggle moves to. Completed cycles back to in_progress.
    pub fn next_in_cycle(self) -> Self {
        match self {
            MilestoneStatus::NotStarted => MilestoneStatus::InProgress,
            MilestoneStatus::InProgress => MilestoneStatus::Completed,
            MilestoneStatus::Completed => MilestoneStatus::InProgress,
        }
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MilestoneStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(MilestoneStatus::NotStarted),
            "in_progress" => Ok(MilestoneStatus::InProgress),
            "completed" => Ok(MilestoneStatus::Completed),
            other => Err(AppError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub sponsor_tags: Vec<String>,
    #[serde(default)]
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub timeline: String,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    #[serde(default)]
    pub tracks: Vec<String>,
    pub phases: Vec<Phase>,
}

impl Roadmap {
    pub fn milestones(&self) -> impl Iterator<Item = &Milestone> {
        self.phases.iter().flat_map(|p| p.milestones.iter())
    }

    /// Checks the structural invariants every stored roadmap must hold:
    /// at least one phase, no empty phase, and roadmap-wide unique ids.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.phases.is_empty() {
            return Err(AppError::Validation(
                "roadmap must contain at least one phase".to_string(),
            ));
        }

        let mut phase_ids = HashSet::new();
        let mut milestone_ids = HashSet::new();
        for phase in &self.phases {
            if !phase_ids.insert(phase.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate phase id '{}'",
                    phase.id
                )));
            }
            if phase.milestones.is_empty() {
                return Err(AppError::Validation(format!(
                    "phase '{}' has no milestones",
                    phase.id
                )));
            }
            for milestone in &phase.milestones {
                if !milestone_ids.insert(milestone.id.as_str()) {
                    return Err(AppError::Validation(format!(
                        "duplicate milestone id '{}'",
                        milestone.id
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(id: &str) -> Milestone {
        Milestone {
            id: id.to_string(),
            name: format!("Milestone {id}"),
            description: String::new(),
            skills: SkillSet::new(),
            projects: vec![],
            resources: vec![],
            sponsor_tags: vec![],
            status: MilestoneStatus::NotStarted,
        }
    }

    fn phase(id: &str, milestones: Vec<Milestone>) -> Phase {
        Phase {
            id: id.to_string(),
            name: id.to_string(),
            timeline: "Semester 1".to_string(),
            milestones,
        }
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!(
            "in_progress".parse::<MilestoneStatus>().unwrap(),
            MilestoneStatus::InProgress
        );
        assert_eq!(MilestoneStatus::Completed.to_string(), "completed");
        assert!(matches!(
            "done".parse::<MilestoneStatus>(),
            Err(AppError::InvalidStatus(s)) if s == "done"
        ));
    }

    #[test]
    fn test_next_in_cycle() {
        use MilestoneStatus::*;
        assert_eq!(NotStarted.next_in_cycle(), InProgress);
        assert_eq!(InProgress.next_in_cycle(), Completed);
        assert_eq!(Completed.next_in_cycle(), InProgress);
    }

    #[test]
    fn test_validate_accepts_well_formed_roadmap() {
        let roadmap = Roadmap {
            tracks: vec!["swe".to_string()],
            phases: vec![
                phase("phase-1", vec![milestone("m1"), milestone("m2")]),
                phase("phase-2", vec![milestone("m3")]),
            ],
        };
        assert!(roadmap.validate().is_ok());
        assert_eq!(roadmap.milestones().count(), 3);
    }

    #[test]
    fn test_validate_rejects_ids_reused_across_phases() {
        let roadmap = Roadmap {
            tracks: vec![],
            phases: vec![
                phase("phase-1", vec![milestone("m1")]),
                phase("phase-2", vec![milestone("m1")]),
            ],
        };
        assert!(matches!(roadmap.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty_structures() {
        assert!(Roadmap::default().validate().is_err());
        let roadmap = Roadmap {
            tracks: vec![],
            phases: vec![phase("phase-1", vec![])],
        };
        assert!(roadmap.validate().is_err());
    }

    #[test]
    fn test_milestone_deserializes_sponsor_tags() {
        let m: Milestone = serde_json::from_str(
            r#"{"id": "milestone-1", "name": "Learn Git", "sponsorTags": ["Fidelity"], "status": "completed"}"#,
        )
        .unwrap();
        assert_eq!(m.sponsor_tags, vec!["Fidelity".to_string()]);
        assert_eq!(m.status, MilestoneStatus::Completed);
    }
}
