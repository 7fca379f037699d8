//! Store: the single container for everything the student has entered or
//! generated.
//!
//! Fields are private. Every transition takes `&self` and returns the next
//! `Store`, so handlers compute the new value from a snapshot and swap it in
//! under the write lock (see `AppState::update`).

pub mod snapshot;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::scoring::RoleMatch;
use crate::models::profile::{ResumeData, StudentProfile};
use crate::models::roadmap::Roadmap;
use crate::models::session::{ChatMessage, CompletedProject, InterviewSession, Settings};
use crate::roadmap::transitions::{apply_milestone_status, set_milestone_status};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Store {
    profile: Option<StudentProfile>,
    roadmap: Option<Roadmap>,
    role_matches: Vec<RoleMatch>,
    chat_history: Vec<ChatMessage>,
    interview_sessions: Vec<InterviewSession>,
    completed_projects: Vec<CompletedProject>,
    settings: Settings,
}

// ────────────────────────────────────────────────────────────────────────────
// Reads
// ────────────────────────────────────────────────────────────────────────────

impl Store {
    pub fn profile(&self) -> Option<&StudentProfile> {
        self.profile.as_ref()
    }

    pub fn roadmap(&self) -> Option<&Roadmap> {
        self.roadmap.as_ref()
    }

    pub fn require_profile(&self) -> Result<&StudentProfile, AppError> {
        self.profile
            .as_ref()
            .ok_or_else(|| {
                AppError::NotFound("No profile yet, complete onboarding first".to_string())
            })
    }

    pub fn require_roadmap(&self) -> Result<&Roadmap, AppError> {
        self.roadmap
            .as_ref()
            .ok_or_else(|| {
                AppError::NotFound("No roadmap yet, complete onboarding first".to_string())
            })
    }

    pub fn role_matches(&self) -> &[RoleMatch] {
        &self.role_matches
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat_history
    }

    pub fn interview_sessions(&self) -> &[InterviewSession] {
        &self.interview_sessions
    }

    pub fn completed_projects(&self) -> &[CompletedProject] {
        &self.completed_projects
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

}

// ────────────────────────────────────────────────────────────────────────────
// Transitions
// ────────────────────────────────────────────────────────────────────────────

impl Store {
    /// Replaces the profile. Cached matches were computed for the old one and are dropped.
    pub fn with_profile(&self, profile: StudentProfile) -> Store {
        Store {
            profile: Some(profile),
            role_matches: Vec::new(),
            ..self.clone()
        }
    }

    pub fn with_resume_data(&self, resume: ResumeData) -> Result<Store, AppError> {
        let mut profile = self.require_profile()?.clone();
        profile.resume_data = Some(resume);
        Ok(self.with_profile(profile))
    }

    pub fn with_roadmap(&self, roadmap: Roadmap) -> Store {
        Store {
            roadmap: Some(roadmap),
            ..self.clone()
        }
    }

    pub fn with_milestone_status(
        &self,
        phase_id: &str,
        milestone_id: &str,
        status: &str,
    ) -> Result<Store, AppError> {
        let updated =
            apply_milestone_status(self.require_roadmap()?, phase_id, milestone_id, status)?;
        Ok(self.with_roadmap(updated))
    }

    /// Moves one milestone to the next status in the dashboard cycle.
    pub fn with_milestone_toggled(
        &self,
        phase_id: &str,
        milestone_id: &str,
    ) -> Result<Store, AppError> {
        let roadmap = self.require_roadmap()?;
        let current = roadmap
            .phases
            .iter()
            .find(|p| p.id == phase_id)
            .and_then(|p| p.milestones.iter().find(|m| m.id == milestone_id))
            .map(|m| m.status)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Milestone {milestone_id} not found in phase {phase_id}"
                ))
            })?;
        let updated =
            set_milestone_status(roadmap, phase_id, milestone_id, current.next_in_cycle())?;
        Ok(self.with_roadmap(updated))
    }

    pub fn with_role_matches(&self, matches: Vec<RoleMatch>) -> Store {
        Store {
            role_matches: matches,
            ..self.clone()
        }
    }

    pub fn with_chat_message(&self, message: ChatMessage) -> Store {
        let mut next = self.clone();
        next.chat_history.push(message);
        next
    }

    pub fn without_chat_history(&self) -> Store {
        Store {
            chat_history: Vec::new(),
            ..self.clone()
        }
    }

    pub fn with_interview_session(&self, session: InterviewSession) -> Store {
        let mut next = self.clone();
        next.interview_sessions.push(session);
        next
    }

    pub fn with_completed_project(&self, project: CompletedProject) -> Store {
        let mut next = self.clone();
        next.completed_projects.push(project);
        next
    }

    pub fn with_settings(&self, settings: Settings) -> Store {
        Store {
            settings,
            ..self.clone()
        }
    }

    /// Clears everything the student entered or generated. Settings survive.
    pub fn reset(&self) -> Store {
        Store {
            settings: self.settings.clone(),
            ..Store::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roadmap::{Milestone, MilestoneStatus, Phase};
    use crate::models::skill::SkillSet;

    fn make_profile() -> StudentProfile {
        serde_json::from_str(r#"{"id": "student-1", "name": "Ada", "interests": ["Data"]}"#)
            .unwrap()
    }

    fn make_roadmap() -> Roadmap {
        Roadmap {
            tracks: vec![],
            phases: vec![Phase {
                id: "phase-1".to_string(),
                name: "Foundation".to_string(),
                timeline: String::new(),
                milestones: vec![Milestone {
                    id: "milestone-1".to_string(),
                    name: "Basics".to_string(),
                    description: String::new(),
                    skills: SkillSet::from_labels(&["Git"]),
                    projects: vec![],
                    resources: vec![],
                    sponsor_tags: vec![],
                    status: MilestoneStatus::NotStarted,
                }],
            }],
        }
    }

    #[test]
    fn test_empty_store_requires_onboarding() {
        let store = Store::default();
        assert!(matches!(store.require_profile(), Err(AppError::NotFound(_))));
        assert!(matches!(store.require_roadmap(), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let store = Store::default().with_profile(make_profile());
        let next = store.with_roadmap(make_roadmap());
        assert!(store.roadmap().is_none());
        assert!(next.roadmap().is_some());
        assert_eq!(next.profile(), store.profile());
    }

    #[test]
    fn test_milestone_status_through_store() {
        let store = Store::default().with_roadmap(make_roadmap());
        let next = store
            .with_milestone_status("phase-1", "milestone-1", "completed")
            .unwrap();
        let status = next.require_roadmap().unwrap().phases[0].milestones[0].status;
        assert_eq!(status, MilestoneStatus::Completed);

        let err = store
            .with_milestone_status("phase-1", "milestone-1", "done")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStatus(_)));
    }

    #[test]
    fn test_toggle_cycles_status() {
        let store = Store::default().with_roadmap(make_roadmap());
        let status =
            |s: &Store| s.require_roadmap().unwrap().phases[0].milestones[0].status;

        let once = store.with_milestone_toggled("phase-1", "milestone-1").unwrap();
        assert_eq!(status(&once), MilestoneStatus::InProgress);
        let twice = once.with_milestone_toggled("phase-1", "milestone-1").unwrap();
        assert_eq!(status(&twice), MilestoneStatus::Completed);
        let thrice = twice.with_milestone_toggled("phase-1", "milestone-1").unwrap();
        assert_eq!(status(&thrice), MilestoneStatus::InProgress);

        assert!(matches!(
            store.with_milestone_toggled("phase-1", "milestone-9"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_new_profile_drops_cached_matches() {
        let catalog = crate::catalog::Catalog::builtin();
        let profile = make_profile();
        let matches = crate::matching::scoring::rank_roles(&profile, catalog.roles(), Some(2));
        let store = Store::default()
            .with_profile(profile.clone())
            .with_role_matches(matches);
        assert_eq!(store.role_matches().len(), 2);

        let next = store
            .with_resume_data(ResumeData {
                normalized_skills: SkillSet::from_labels(&["SQL"]),
            })
            .unwrap();
        assert!(next.role_matches().is_empty());
        assert!(next.profile().unwrap().resume_data.is_some());
    }

    #[test]
    fn test_resume_needs_profile() {
        let err = Store::default()
            .with_resume_data(ResumeData::default())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_chat_and_reset() {
        let store = Store::default()
            .with_profile(make_profile())
            .with_chat_message(ChatMessage::user("hi"))
            .with_chat_message(ChatMessage::assistant("hello"));
        assert_eq!(store.chat_history().len(), 2);
        assert!(store.without_chat_history().chat_history().is_empty());
        assert_eq!(store.reset(), Store::default());
    }

    #[test]
    fn test_reset_keeps_settings() {
        let store = Store::default()
            .with_settings(Settings { demo_mode: true })
            .with_profile(make_profile())
            .with_roadmap(make_roadmap())
            .with_chat_message(ChatMessage::user("hi"));

        let cleared = store.reset();
        assert!(cleared.profile().is_none());
        assert!(cleared.roadmap().is_none());
        assert!(cleared.chat_history().is_empty());
        assert!(cleared.settings().demo_mode);
    }

    #[test]
    fn test_settings() {
        let store = Store::default().with_settings(Settings { demo_mode: true });
        assert!(store.settings().demo_mode);
    }
}
