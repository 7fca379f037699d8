//! Readiness: how close the student is to a role once roadmap-earned skills count.
//!
//! Uses the same coverage formula as role matching; only the skill set differs
//! (current skills ∪ skills from completed milestones).

pub mod handlers;
pub mod portfolio;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::matching::scoring::coverage_score;
use crate::models::profile::StudentProfile;
use crate::models::roadmap::{MilestoneStatus, Roadmap};
use crate::models::skill::SkillSet;

/// Skills of every completed milestone, in roadmap order, de-duplicated.
pub fn completed_skills(roadmap: &Roadmap) -> SkillSet {
    roadmap
        .milestones()
        .filter(|m| m.status == MilestoneStatus::Completed)
        .flat_map(|m| m.skills.iter().cloned())
        .collect()
}

pub fn effective_skills(profile: &StudentProfile, roadmap: &Roadmap) -> SkillSet {
    profile.current_skills.union(&completed_skills(roadmap))
}

/// Readiness score (0 – 100) for `role_id`. Fails with `UnknownRole` if the
/// catalog has no such role.
pub fn calculate_readiness(
    profile: &StudentProfile,
    roadmap: &Roadmap,
    catalog: &Catalog,
    role_id: &str,
) -> Result<u8, AppError> {
    let role = catalog.require(role_id)?;
    Ok(coverage_score(
        &effective_skills(profile, roadmap),
        role,
        profile.experience_level,
    ))
}

pub fn readiness_label(score: u8) -> &'static str {
    match score {
        80.. => "Ready to apply!",
        60..=79 => "Making good progress",
        40..=59 => "Keep building skills",
        _ => "Just getting started",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoleProfile;
    use crate::models::profile::ExperienceLevel;
    use crate::models::roadmap::{Milestone, Phase};

    fn make_catalog() -> Catalog {
        Catalog::new(vec![RoleProfile {
            role_id: "backend".to_string(),
            name: "Backend Engineer".to_string(),
            summary: String::new(),
            required_skills: SkillSet::from_labels(&["Git", "SQL"]),
            preferred_skills: SkillSet::new(),
            related_interests: vec![],
        }])
        .unwrap()
    }

    fn make_profile(skills: &[&str]) -> StudentProfile {
        StudentProfile {
            id: "student-1".to_string(),
            name: "Ada".to_string(),
            major: String::new(),
            interests: vec![],
            current_skills: SkillSet::from_labels(skills),
            experience_level: ExperienceLevel::Intermediate,
            target_roles: vec!["backend".to_string()],
            graduation_timeline: None,
            constraints: None,
            resume_data: None,
        }
    }

    fn make_milestone(id: &str, skills: &[&str], status: MilestoneStatus) -> Milestone {
        Milestone {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            skills: SkillSet::from_labels(skills),
            projects: vec![],
            resources: vec![],
            sponsor_tags: vec![],
            status,
        }
    }

    fn make_roadmap(milestones: Vec<Milestone>) -> Roadmap {
        Roadmap {
            tracks: vec!["backend".to_string()],
            phases: vec![Phase {
                id: "phase-1".to_string(),
                name: "Foundation".to_string(),
                timeline: String::new(),
                milestones,
            }],
        }
    }

    #[test]
    fn test_completed_milestone_skills_count() {
        let roadmap = make_roadmap(vec![make_milestone(
            "m1",
            &["SQL"],
            MilestoneStatus::Completed,
        )]);
        let score =
            calculate_readiness(&make_profile(&["Git"]), &roadmap, &make_catalog(), "backend")
                .unwrap();
        assert_eq!(score, 100);
    }

    #[test]
    fn test_in_progress_milestone_skills_do_not_count() {
        let roadmap = make_roadmap(vec![make_milestone(
            "m1",
            &["SQL"],
            MilestoneStatus::InProgress,
        )]);
        let score =
            calculate_readiness(&make_profile(&["Git"]), &roadmap, &make_catalog(), "backend")
                .unwrap();
        // 70 × 0.5 + 30 (no preferred skills)
        assert_eq!(score, 65);
    }

    #[test]
    fn test_unknown_role() {
        let err = calculate_readiness(
            &make_profile(&[]),
            &make_roadmap(vec![]),
            &make_catalog(),
            "astronaut",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::UnknownRole(id) if id == "astronaut"));
    }

    #[test]
    fn test_completed_skills_dedupes_in_order() {
        let roadmap = make_roadmap(vec![
            make_milestone("m1", &["Git", "SQL"], MilestoneStatus::Completed),
            make_milestone("m2", &["Docker"], MilestoneStatus::NotStarted),
            make_milestone("m3", &["sql", "Linux"], MilestoneStatus::Completed),
        ]);
        assert_eq!(completed_skills(&roadmap).labels(), vec!["Git", "SQL", "Linux"]);
    }

    #[test]
    fn test_readiness_label_boundaries() {
        assert_eq!(readiness_label(80), "Ready to apply!");
        assert_eq!(readiness_label(79), "Making good progress");
        assert_eq!(readiness_label(60), "Making good progress");
        assert_eq!(readiness_label(40), "Keep building skills");
        assert_eq!(readiness_label(39), "Just getting started");
    }
}
