use axum::{extract::State, Json};

use crate::catalog::RoleProfile;
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleProfile>> {
    Json(state.catalog.roles().to_vec())
}
