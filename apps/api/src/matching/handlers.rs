use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::matching::enhanced::rank_roles_enhanced;
use crate::matching::scoring::RoleMatch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub limit: Option<usize>,
}

/// GET /api/v1/matches?limit=N
///
/// Ranks the catalog for the stored profile and replaces the cached matches,
/// unless the profile changed in the meantime.
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchQuery>,
) -> Result<Json<Vec<RoleMatch>>, AppError> {
    let (profile, settings) = {
        let store = state.store.read().await;
        (store.require_profile()?.clone(), store.settings().clone())
    };

    let ai = state.ai_for(&settings);
    let matches = rank_roles_enhanced(
        ai.as_ref(),
        &profile,
        &state.catalog,
        params.limit,
        state.config.ai_timeout,
    )
    .await;

    // The profile may have been replaced while the AI call ran.
    state
        .update(|store| {
            if store.profile() == Some(&profile) {
                Ok(store.with_role_matches(matches.clone()))
            } else {
                warn!("Profile changed during ranking, not caching stale matches");
                Ok(store.clone())
            }
        })
        .await?;

    Ok(Json(matches))
}
