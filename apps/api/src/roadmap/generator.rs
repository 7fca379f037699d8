//! Roadmap generation: live AI roadmap when available, deterministic otherwise.
//!
//! The deterministic roadmap is three phases (foundation, specialization, career
//! prep). When the first target role is in the catalog and the student is missing
//! some of its required skills, a "close the gaps" milestone opens phase two.

use std::time::Duration;

use tracing::{info, warn};

use crate::ai::{call_with_fallback, CareerAi};
use crate::catalog::Catalog;
use crate::matching::scoring::score_role;
use crate::models::profile::StudentProfile;
use crate::models::roadmap::{Milestone, MilestoneStatus, Phase, Roadmap};
use crate::models::skill::SkillSet;

/// Asks the AI backend for a roadmap; any failure, timeout or invalid roadmap
/// yields the deterministic one instead.
pub async fn generate_roadmap(
    ai: &dyn CareerAi,
    profile: &StudentProfile,
    catalog: &Catalog,
    timeout: Duration,
) -> Roadmap {
    let generated = call_with_fallback(
        "roadmap generation",
        timeout,
        ai.generate_roadmap(profile, catalog),
    )
    .await;

    match generated {
        Some(roadmap) => match check_generated(&roadmap) {
            Ok(()) => {
                info!(
                    "Roadmap generated by {} backend: {} phases, {} milestones",
                    ai.backend(),
                    roadmap.phases.len(),
                    roadmap.milestones().count()
                );
                roadmap
            }
            Err(reason) => {
                warn!("Rejected generated roadmap ({reason}), using deterministic roadmap");
                deterministic_roadmap(profile, catalog)
            }
        },
        None => deterministic_roadmap(profile, catalog),
    }
}

fn check_generated(roadmap: &Roadmap) -> Result<(), String> {
    roadmap.validate().map_err(|e| e.to_string())?;
    if let Some(m) = roadmap
        .milestones()
        .find(|m| m.status != MilestoneStatus::NotStarted)
    {
        return Err(format!("milestone '{}' does not start as not_started", m.id));
    }
    Ok(())
}

struct MilestoneSeed {
    name: &'static str,
    description: &'static str,
    skills: &'static [&'static str],
    projects: &'static [&'static str],
    resources: &'static [&'static str],
    sponsors: &'static [&'static str],
}

struct PhaseSeed {
    name: &'static str,
    timeline: &'static str,
    milestones: &'static [MilestoneSeed],
}

const PHASES: &[PhaseSeed] = &[
    PhaseSeed {
        name: "Foundation Building",
        timeline: "Semester 1 (Current)",
        milestones: &[
            MilestoneSeed {
                name: "Master Core Programming",
                description: "Build strong fundamentals in data structures, algorithms, and problem-solving",
                skills: &["Data Structures", "Algorithms", "Problem Solving"],
                projects: &["LeetCode/HackerRank practice", "Build a personal portfolio website"],
                resources: &["freeCodeCamp", "CS50 by Harvard"],
                sponsors: &[],
            },
            MilestoneSeed {
                name: "Learn Version Control",
                description: "Master Git and GitHub for collaboration",
                skills: &["Git", "GitHub", "Collaboration"],
                projects: &["Create GitHub profile", "Contribute to open source"],
                resources: &["GitHub Learning Lab", "Git documentation"],
                sponsors: &[],
            },
        ],
    },
    PhaseSeed {
        name: "Skill Specialization",
        timeline: "Semester 2",
        milestones: &[
            MilestoneSeed {
                name: "Build Real Projects",
                description: "Create portfolio projects that demonstrate your skills",
                skills: &["Full-stack Development", "APIs", "Databases"],
                projects: &["Build a CRUD application", "Deploy to cloud platform"],
                resources: &["The Odin Project", "freeCodeCamp projects"],
                sponsors: &["Fidelity", "McDonald's"],
            },
            MilestoneSeed {
                name: "Get Certified",
                description: "Earn industry-recognized certifications",
                skills: &["Cloud Computing", "Professional Development"],
                projects: &["AWS Cloud Practitioner prep", "Complete online courses"],
                resources: &["AWS Training", "Coursera"],
                sponsors: &["Verizon", "Fidelity"],
            },
        ],
    },
    PhaseSeed {
        name: "Career Preparation",
        timeline: "Summer",
        milestones: &[
            MilestoneSeed {
                name: "Interview Prep",
                description: "Practice technical and behavioral interviews",
                skills: &["Technical Interviews", "Communication", "Problem Solving"],
                projects: &["Mock interviews", "100+ coding problems"],
                resources: &["Cracking the Coding Interview", "Pramp"],
                sponsors: &[],
            },
            MilestoneSeed {
                name: "Apply to Internships",
                description: "Target roles at sponsor companies and beyond",
                skills: &["Resume Building", "Networking", "Applications"],
                projects: &["Attend career fairs", "Network on LinkedIn"],
                resources: &["LaunchPad Opportunities", "LinkedIn"],
                sponsors: &["Fidelity", "PepsiCo", "Verizon", "McDonald's"],
            },
        ],
    },
];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn gap_milestone(profile: &StudentProfile, catalog: &Catalog) -> Option<Milestone> {
    let role_id = profile.distinct_target_roles().into_iter().next()?;
    let role = catalog.get(role_id)?;
    let gaps = score_role(profile, role).gap_skills;
    if gaps.is_empty() {
        return None;
    }

    Some(Milestone {
        id: String::new(),
        name: format!("Close Your {} Skill Gaps", role.name),
        description: format!(
            "Learn the {} required skills you don't have yet for {} roles",
            gaps.len(),
            role.name
        ),
        skills: SkillSet::from(gaps),
        projects: vec![format!("Build one small project using each new {} skill", role.name)],
        resources: vec!["Coursera".to_string(), "freeCodeCamp".to_string()],
        sponsor_tags: vec![],
        status: MilestoneStatus::NotStarted,
    })
}

/// The built-in roadmap, personalised by target roles and skill gaps.
/// Ids are `phase-N` and `milestone-N`, numbered across the whole roadmap.
pub fn deterministic_roadmap(profile: &StudentProfile, catalog: &Catalog) -> Roadmap {
    let mut phases: Vec<Phase> = PHASES
        .iter()
        .enumerate()
        .map(|(i, seed)| Phase {
            id: format!("phase-{}", i + 1),
            name: seed.name.to_string(),
            timeline: seed.timeline.to_string(),
            milestones: seed
                .milestones
                .iter()
                .map(|m| Milestone {
                    id: String::new(),
                    name: m.name.to_string(),
                    description: m.description.to_string(),
                    skills: SkillSet::from_labels(m.skills),
                    projects: to_strings(m.projects),
                    resources: to_strings(m.resources),
                    sponsor_tags: to_strings(m.sponsors),
                    status: MilestoneStatus::NotStarted,
                })
                .collect(),
        })
        .collect();

    if let Some(gap) = gap_milestone(profile, catalog) {
        phases[1].milestones.insert(0, gap);
    }

    let mut next_id = 1;
    for milestone in phases.iter_mut().flat_map(|p| p.milestones.iter_mut()) {
        milestone.id = format!("milestone-{next_id}");
        next_id += 1;
    }

    Roadmap {
        tracks: profile
            .distinct_target_roles()
            .into_iter()
            .map(str::to_string)
            .collect(),
        phases,
    }
}
