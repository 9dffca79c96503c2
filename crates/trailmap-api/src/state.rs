use std::sync::Arc;

use trailmap_store::LogStorage;

use crate::services::{CatalogIndex, PreviewStore, TrajectoryCache};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogIndex>,
    pub trajectories: Arc<TrajectoryCache>,
    pub previews: Arc<PreviewStore>,
}

impl AppState {
    pub fn new(storage: Arc<dyn LogStorage>) -> Self {
        let trajectories = Arc::new(TrajectoryCache::new(storage.clone()));
        Self {
            catalog: Arc::new(CatalogIndex::new(storage.clone(), trajectories.clone())),
            trajectories,
            previews: Arc::new(PreviewStore::new(storage)),
        }
    }
}
