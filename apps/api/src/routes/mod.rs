pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::readiness::handlers as readiness;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog and matching
        .route("/api/v1/roles", get(catalog::handle_list_roles))
        .route("/api/v1/matches", get(matching::handle_get_matches))
        // Onboarding and profile
        .route("/api/v1/onboarding", post(profile::handle_onboarding))
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route("/api/v1/profile/resume", post(profile::handle_resume_text))
        .route("/api/v1/profile/resume/pdf", post(profile::handle_resume_pdf))
        .route("/api/v1/settings", patch(profile::handle_update_settings))
        .route("/api/v1/state", delete(profile::handle_reset))
        // Roadmap
        .route("/api/v1/roadmap", get(roadmap::handle_get_roadmap))
        .route("/api/v1/roadmap/progress", get(roadmap::handle_get_progress))
        .route("/api/v1/roadmap/next-steps", get(roadmap::handle_get_next_steps))
        .route(
            "/api/v1/roadmap/phases/:phase_id/milestones/:milestone_id",
            patch(roadmap::handle_update_milestone),
        )
        .route(
            "/api/v1/roadmap/phases/:phase_id/milestones/:milestone_id/toggle",
            post(roadmap::handle_toggle_milestone),
        )
        // Readiness and portfolio
        .route("/api/v1/readiness/:role_id", get(readiness::handle_get_readiness))
        .route("/api/v1/portfolio", get(readiness::handle_get_portfolio))
        .route("/api/v1/portfolio/projects", post(readiness::handle_add_project))
        // Advisor and interview practice
        .route(
            "/api/v1/chat",
            get(advisor::handle_get_chat)
                .post(advisor::handle_chat)
                .delete(advisor::handle_clear_chat),
        )
        .route(
            "/api/v1/interview/questions",
            post(advisor::handle_interview_questions),
        )
        .route(
            "/api/v1/interview/evaluate",
            post(advisor::handle_evaluate_answer),
        )
        .route(
            "/api/v1/interview/sessions",
            get(advisor::handle_list_sessions).post(advisor::handle_save_session),
        )
        .with_state(state)
}
