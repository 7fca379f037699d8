use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::roadmap::Roadmap;
use crate::roadmap::next_steps::{get_next_steps, NextStep};
use crate::roadmap::progress::RoadmapProgress;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MilestoneStatusUpdate {
    pub status: String,
}

/// GET /api/v1/roadmap
pub async fn handle_get_roadmap(State(state): State<AppState>) -> Result<Json<Roadmap>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.require_roadmap()?.clone()))
}

/// GET /api/v1/roadmap/progress
pub async fn handle_get_progress(
    State(state): State<AppState>,
) -> Result<Json<RoadmapProgress>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.require_roadmap()?.progress_report()))
}

/// GET /api/v1/roadmap/next-steps
pub async fn handle_get_next_steps(
    State(state): State<AppState>,
) -> Result<Json<Vec<NextStep>>, AppError> {
    let store = state.store.read().await;
    Ok(Json(get_next_steps(store.require_roadmap()?)))
}

/// PATCH /api/v1/roadmap/phases/:phase_id/milestones/:milestone_id
pub async fn handle_update_milestone(
    State(state): State<AppState>,
    Path((phase_id, milestone_id)): Path<(String, String)>,
    Json(req): Json<MilestoneStatusUpdate>,
) -> Result<Json<Roadmap>, AppError> {
    let store = state
        .update(|store| store.with_milestone_status(&phase_id, &milestone_id, &req.status))
        .await?;

    info!("Milestone {phase_id}/{milestone_id} set to {}", req.status);
    Ok(Json(store.require_roadmap()?.clone()))
}

/// POST /api/v1/roadmap/phases/:phase_id/milestones/:milestone_id/toggle
pub async fn handle_toggle_milestone(
    State(state): State<AppState>,
    Path((phase_id, milestone_id)): Path<(String, String)>,
) -> Result<Json<Roadmap>, AppError> {
    let store = state
        .update(|store| store.with_milestone_toggled(&phase_id, &milestone_id))
        .await?;
    Ok(Json(store.require_roadmap()?.clone()))
}
