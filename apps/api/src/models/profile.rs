use serde::{Deserialize, Serialize};

use crate::models::skill::SkillSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Points added to a coverage score before clamping.
    pub fn score_modifier(self) -> i32 {
        match self {
            ExperienceLevel::Beginner => -5,
            ExperienceLevel::Intermediate => 0,
            ExperienceLevel::Advanced => 5,
        }
    }
}

/// Free-text onboarding constraints. Carried through to the AI prompt only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub money: String,
    #[serde(default)]
    pub workload: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub normalized_skills: SkillSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub current_skills: SkillSet,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub target_roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_data: Option<ResumeData>,
}

impl StudentProfile {
    /// Current skills unioned with resume-extracted skills.
    pub fn candidate_skills(&self) -> SkillSet {
        match &self.resume_data {
            Some(resume) => self.current_skills.union(&resume.normalized_skills),
            None => self.current_skills.clone(),
        }
    }

    /// Target roles with duplicates removed, first occurrence wins.
    pub fn distinct_target_roles(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for role in &self.target_roles {
            if !seen.contains(&role.as_str()) {
                seen.push(role.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile() -> StudentProfile {
        StudentProfile {
            id: "student-1".to_string(),
            name: "Ada".to_string(),
            major: "Computer Science".to_string(),
            interests: vec!["Data & Analytics".to_string()],
            current_skills: SkillSet::from_labels(&["Python", "Git"]),
            experience_level: ExperienceLevel::Beginner,
            target_roles: vec!["swe".to_string(), "data-analyst".to_string(), "swe".to_string()],
            graduation_timeline: None,
            constraints: None,
            resume_data: None,
        }
    }

    #[test]
    fn test_candidate_skills_merge_resume() {
        let mut profile = make_profile();
        profile.resume_data = Some(ResumeData {
            normalized_skills: SkillSet::from_labels(&["git", "SQL"]),
        });
        assert_eq!(profile.candidate_skills().labels(), vec!["Python", "Git", "SQL"]);
    }

    #[test]
    fn test_distinct_target_roles() {
        assert_eq!(make_profile().distinct_target_roles(), vec!["swe", "data-analyst"]);
    }

    #[test]
    fn test_profile_deserializes_camel_case_with_defaults() {
        let profile: StudentProfile = serde_json::from_str(
            r#"{"name": "Lin", "currentSkills": ["SQL"], "experienceLevel": "advanced"}"#,
        )
        .unwrap();
        assert_eq!(profile.experience_level, ExperienceLevel::Advanced);
        assert_eq!(profile.current_skills.labels(), vec!["SQL"]);
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_experience_modifiers() {
        assert_eq!(ExperienceLevel::Beginner.score_modifier(), -5);
        assert_eq!(ExperienceLevel::Intermediate.score_modifier(), 0);
        assert_eq!(ExperienceLevel::Advanced.score_modifier(), 5);
    }
}
