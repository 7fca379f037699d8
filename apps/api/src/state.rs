use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::error;

use crate::ai::{CareerAi, DeterministicAi};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::session::Settings;
use crate::store::snapshot::SnapshotFile;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub store: Arc<RwLock<Store>>,
    /// Backend chosen by `AI_MODE`. Demo mode overrides it per request.
    pub ai: Arc<dyn CareerAi>,
    /// Present when `STATE_PATH` is set.
    pub snapshot: Option<Arc<SnapshotFile>>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Catalog,
        store: Store,
        ai: Arc<dyn CareerAi>,
        snapshot: Option<SnapshotFile>,
    ) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            store: Arc::new(RwLock::new(store)),
            ai,
            snapshot: snapshot.map(Arc::new),
        }
    }

    /// The backend to use under the given settings.
    pub fn ai_for(&self, settings: &Settings) -> Arc<dyn CareerAi> {
        if settings.demo_mode {
            Arc::new(DeterministicAi)
        } else {
            self.ai.clone()
        }
    }

    /// Applies one store transition under the write lock and persists the result.
    ///
    /// The transition sees the current store and returns its replacement. On error
    /// the store is left as it was. A failed snapshot write is logged and does not
    /// fail the request.
    pub async fn update<F>(&self, transition: F) -> Result<Store, AppError>
    where
        F: FnOnce(&Store) -> Result<Store, AppError>,
    {
        let mut guard = self.store.write().await;
        let next = transition(&guard)?;
        *guard = next.clone();

        if let Some(snapshot) = &self.snapshot {
            if let Err(e) = snapshot.save(&next).await {
                error!("Failed to persist state to {}: {e:?}", snapshot.path().display());
            }
        }
        Ok(next)
    }
}
