//! Onboarding and profile maintenance.

pub mod handlers;
pub mod resume;

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::StudentProfile;

/// Checks a submitted onboarding profile and fills in what the client may omit.
///
/// The name is trimmed and must be non-empty, blank interests are dropped and at
/// least one must remain, and a missing id gets a fresh UUID.
pub fn prepare_onboarding(mut profile: StudentProfile) -> Result<StudentProfile, AppError> {
    profile.name = profile.name.trim().to_string();
    if profile.name.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    profile.interests = profile
        .interests
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();
    if profile.interests.is_empty() {
        return Err(AppError::Validation(
            "at least one interest is required".to_string(),
        ));
    }

    if profile.id.trim().is_empty() {
        profile.id = Uuid::new_v4().to_string();
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(json: &str) -> StudentProfile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_assigns_id_and_trims() {
        let profile = prepare_onboarding(make_profile(
            r#"{"name": "  Ada ", "interests": ["Data", "  "]}"#,
        ))
        .unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.interests, vec!["Data".to_string()]);
        assert!(Uuid::parse_str(&profile.id).is_ok());
    }

    #[test]
    fn test_keeps_existing_id() {
        let profile = prepare_onboarding(make_profile(
            r#"{"id": "student-7", "name": "Ada", "interests": ["Data"]}"#,
        ))
        .unwrap();
        assert_eq!(profile.id, "student-7");
    }

    #[test]
    fn test_rejects_blank_name_or_no_interests() {
        for json in [
            r#"{"name": " ", "interests": ["Data"]}"#,
            r#"{"name": "Ada", "interests": []}"#,
            r#"{"name": "Ada"}"#,
        ] {
            let err = prepare_onboarding(make_profile(json)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{json}");
        }
    }
}
