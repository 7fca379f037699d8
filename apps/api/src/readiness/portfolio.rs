use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::profile::{ExperienceLevel, StudentProfile};
use crate::models::roadmap::{Milestone, MilestoneStatus, Roadmap};
use crate::models::session::{CompletedProject, InterviewSession};
use crate::models::skill::SkillSet;
use crate::readiness::{calculate_readiness, effective_skills, readiness_label};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleReadiness {
    pub role_id: String,
    pub role_name: String,
    pub score: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummary {
    pub sessions: usize,
    pub questions_answered: usize,
    pub average_score: u32,
}

/// Shareable summary of skills, progress and readiness.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    pub major: String,
    pub experience_level: ExperienceLevel,
    pub skills: SkillSet,
    pub completed_milestones: Vec<Milestone>,
    pub roadmap_projects: Vec<String>,
    pub completed_projects: Vec<CompletedProject>,
    pub readiness: Vec<RoleReadiness>,
    pub interviews: InterviewSummary,
}

fn summarize_interviews(sessions: &[InterviewSession]) -> InterviewSummary {
    if sessions.is_empty() {
        return InterviewSummary::default();
    }
    let total: u32 = sessions.iter().map(|s| s.average_score).sum();
    InterviewSummary {
        sessions: sessions.len(),
        questions_answered: sessions.iter().map(|s| s.results.len()).sum(),
        average_score: (total as f64 / sessions.len() as f64).round() as u32,
    }
}

/// Target roles absent from the catalog are skipped rather than reported as errors.
pub fn build_portfolio(
    profile: &StudentProfile,
    roadmap: &Roadmap,
    catalog: &Catalog,
    sessions: &[InterviewSession],
    completed_projects: &[CompletedProject],
) -> Portfolio {
    let completed_milestones: Vec<Milestone> = roadmap
        .milestones()
        .filter(|m| m.status == MilestoneStatus::Completed)
        .cloned()
        .collect();

    let roadmap_projects = completed_milestones
        .iter()
        .flat_map(|m| m.projects.iter().cloned())
        .collect();

    let readiness = profile
        .distinct_target_roles()
        .into_iter()
        .filter_map(|role_id| {
            let role = catalog.get(role_id)?;
            let score = calculate_readiness(profile, roadmap, catalog, role_id).ok()?;
            Some(RoleReadiness {
                role_id: role.role_id.clone(),
                role_name: role.name.clone(),
                score,
                label: readiness_label(score),
            })
        })
        .collect();

    Portfolio {
        name: profile.name.clone(),
        major: profile.major.clone(),
        experience_level: profile.experience_level,
        skills: effective_skills(profile, roadmap),
        completed_milestones,
        roadmap_projects,
        completed_projects: completed_projects.to_vec(),
        readiness,
        interviews: summarize_interviews(sessions),
    }
}
