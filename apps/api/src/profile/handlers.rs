use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::enhanced::rank_roles_enhanced;
use crate::matching::scoring::RoleMatch;
use crate::models::profile::{ResumeData, StudentProfile};
use crate::models::roadmap::Roadmap;
use crate::models::session::Settings;
use crate::profile::prepare_onboarding;
use crate::profile::resume::{extract_skills, pdf_text};
use crate::roadmap::generator::generate_roadmap;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub profile: StudentProfile,
    pub roadmap: Roadmap,
    pub role_matches: Vec<RoleMatch>,
}

#[derive(Debug, Deserialize)]
pub struct ResumeText {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub demo_mode: Option<bool>,
}

/// POST /api/v1/onboarding
pub async fn handle_onboarding(
    State(state): State<AppState>,
    Json(submitted): Json<StudentProfile>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let profile = prepare_onboarding(submitted)?;
    let settings = state.store.read().await.settings().clone();
    let ai = state.ai_for(&settings);
    let timeout = state.config.ai_timeout;

    let roadmap = generate_roadmap(ai.as_ref(), &profile, &state.catalog, timeout).await;
    let role_matches =
        rank_roles_enhanced(ai.as_ref(), &profile, &state.catalog, None, timeout).await;

    state
        .update(|store| {
            Ok(store
                .with_profile(profile.clone())
                .with_roadmap(roadmap.clone())
                .with_role_matches(role_matches.clone()))
        })
        .await?;

    info!(
        "Onboarded {} ({}): {} milestones, top match {:?}",
        profile.name,
        profile.id,
        roadmap.milestones().count(),
        role_matches.first().map(|m| m.role_id.as_str())
    );

    Ok(Json(OnboardingResponse {
        profile,
        roadmap,
        role_matches,
    }))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<StudentProfile>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.require_profile()?.clone()))
}

async fn store_resume_skills(state: &AppState, text: &str) -> Result<StudentProfile, AppError> {
    let skills = extract_skills(text, &state.catalog.skill_vocabulary());
    info!("Extracted {} skills from resume", skills.len());

    let resume = ResumeData {
        normalized_skills: skills,
    };
    let store = state
        .update(|store| store.with_resume_data(resume.clone()))
        .await?;
    Ok(store.require_profile()?.clone())
}

/// POST /api/v1/profile/resume
pub async fn handle_resume_text(
    State(state): State<AppState>,
    Json(req): Json<ResumeText>,
) -> Result<Json<StudentProfile>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("resume text must not be empty".to_string()));
    }
    Ok(Json(store_resume_skills(&state, &req.text).await?))
}

/// POST /api/v1/profile/resume/pdf
///
/// Expects a multipart body; the first field carrying data is taken as the PDF.
pub async fn handle_resume_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StudentProfile>, AppError> {
    let mut pdf = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if !bytes.is_empty() {
            pdf = Some(bytes.to_vec());
            break;
        }
    }

    let pdf = pdf.ok_or_else(|| AppError::Validation("no PDF file in upload".to_string()))?;
    let text = pdf_text(pdf).await?;
    Ok(Json(store_resume_skills(&state, &text).await?))
}

/// PATCH /api/v1/settings
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<Settings>, AppError> {
    let store = state
        .update(|store| {
            let mut settings = store.settings().clone();
            if let Some(demo_mode) = patch.demo_mode {
                settings.demo_mode = demo_mode;
            }
            Ok(store.with_settings(settings))
        })
        .await?;
    Ok(Json(store.settings().clone()))
}

/// DELETE /api/v1/state
pub async fn handle_reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.update(|store| Ok(store.reset())).await?;
    info!("State reset");
    Ok(StatusCode::NO_CONTENT)
}
