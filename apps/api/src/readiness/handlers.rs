use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::session::CompletedProject;
use crate::readiness::portfolio::{build_portfolio, Portfolio};
use crate::readiness::{calculate_readiness, readiness_label};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub role_id: String,
    pub score: u8,
    pub label: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// GET /api/v1/readiness/:role_id
pub async fn handle_get_readiness(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> Result<Json<ReadinessResponse>, AppError> {
    let store = state.store.read().await;
    let score = calculate_readiness(
        store.require_profile()?,
        store.require_roadmap()?,
        &state.catalog,
        &role_id,
    )?;
    Ok(Json(ReadinessResponse {
        role_id,
        score,
        label: readiness_label(score),
    }))
}

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<Portfolio>, AppError> {
    let store = state.store.read().await;
    Ok(Json(build_portfolio(
        store.require_profile()?,
        store.require_roadmap()?,
        &state.catalog,
        store.interview_sessions(),
        store.completed_projects(),
    )))
}

/// POST /api/v1/portfolio/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Json(req): Json<NewProject>,
) -> Result<Json<Vec<CompletedProject>>, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("project name must not be empty".to_string()));
    }
    let project = CompletedProject {
        name: name.to_string(),
        description: req.description,
        url: req.url,
    };

    let store = state
        .update(|store| Ok(store.with_completed_project(project.clone())))
        .await?;
    Ok(Json(store.completed_projects().to_vec()))
}
