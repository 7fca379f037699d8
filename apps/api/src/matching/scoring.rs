//! Role scoring: deterministic coverage score of a skill set against one role.
//!
//! score = round(70 × required coverage + 30 × preferred coverage) + experience modifier,
//! clamped to 0 – 100. A role with no required (or no preferred) skills counts that
//! side as fully covered. Readiness reuses `score_skills` with a different skill set.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::RoleProfile;
use crate::models::profile::{ExperienceLevel, StudentProfile};
use crate::models::skill::{Skill, SkillSet};

pub const REQUIRED_WEIGHT: f64 = 70.0;
pub const PREFERRED_WEIGHT: f64 = 30.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchLevel {
    Excellent,
    Good,
    Fair,
    NeedsDevelopment,
}

impl MatchLevel {
    /// Fixed tier boundaries; a score equal to a boundary belongs to the higher tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => MatchLevel::Excellent,
            60..=79 => MatchLevel::Good,
            40..=59 => MatchLevel::Fair,
            _ => MatchLevel::NeedsDevelopment,
        }
    }
}

/// Derived result of comparing one profile with one role. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMatch {
    pub role_id: String,
    pub role_name: String,
    pub score: u8,
    pub matched_skills: Vec<Skill>,
    pub gap_skills: Vec<Skill>,
    #[serde(default)]
    pub matched_interests: Vec<String>,
    pub level: MatchLevel,
    /// Only the live AI backend fills this in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl RoleMatch {
    /// Replaces the score (and the level that derives from it).
    pub fn rescored(mut self, score: u8, explanation: Option<String>) -> Self {
        self.score = score.min(100);
        self.level = MatchLevel::from_score(self.score);
        self.explanation = explanation;
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring
// ────────────────────────────────────────────────────────────────────────────

fn coverage(skills: &SkillSet, wanted: &SkillSet) -> f64 {
    if wanted.is_empty() {
        return 1.0;
    }
    let hits = wanted.iter().filter(|s| skills.contains(s)).count();
    hits as f64 / wanted.len() as f64
}

/// Coverage score of `skills` against `role`, 0 – 100.
pub fn coverage_score(skills: &SkillSet, role: &RoleProfile, experience: ExperienceLevel) -> u8 {
    let base = REQUIRED_WEIGHT * coverage(skills, &role.required_skills)
        + PREFERRED_WEIGHT * coverage(skills, &role.preferred_skills);
    let adjusted = base.round() as i32 + experience.score_modifier();
    adjusted.clamp(0, 100) as u8
}

/// Scores an explicit skill set against a role. Shared by matching and readiness.
pub fn score_skills(
    skills: &SkillSet,
    experience: ExperienceLevel,
    interests: &[String],
    role: &RoleProfile,
) -> RoleMatch {
    let matched_skills: Vec<Skill> = role
        .required_skills
        .iter()
        .chain(role.preferred_skills.iter())
        .filter(|s| skills.contains(s))
        .cloned()
        .collect::<SkillSet>()
        .into();

    let gap_skills: Vec<Skill> = role
        .required_skills
        .iter()
        .filter(|s| !skills.contains(s))
        .cloned()
        .collect();

    let matched_interests = role
        .related_interests
        .iter()
        .filter(|ri| interests.iter().any(|i| i.eq_ignore_ascii_case(ri)))
        .cloned()
        .collect();

    let score = coverage_score(skills, role, experience);

    debug!(
        role_id = %role.role_id,
        score,
        matched = matched_skills.len(),
        gaps = gap_skills.len(),
        "scored role"
    );

    RoleMatch {
        role_id: role.role_id.clone(),
        role_name: role.name.clone(),
        score,
        matched_skills,
        gap_skills,
        matched_interests,
        level: MatchLevel::from_score(score),
        explanation: None,
    }
}

/// Scores a profile against a role using its current and resume skills.
pub fn score_role(profile: &StudentProfile, role: &RoleProfile) -> RoleMatch {
    score_skills(
        &profile.candidate_skills(),
        profile.experience_level,
        &profile.interests,
        role,
    )
}

/// Scores every role and sorts by descending score.
///
/// The sort is stable, so equal scores keep catalog order. `limit = None` returns all.
pub fn rank_roles(
    profile: &StudentProfile,
    roles: &[RoleProfile],
    limit: Option<usize>,
) -> Vec<RoleMatch> {
    let mut matches: Vec<RoleMatch> = roles.iter().map(|r| score_role(profile, r)).collect();
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(limit) = limit {
        matches.truncate(limit);
    }
    matches
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
