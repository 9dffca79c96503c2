//! On-demand preview retrieval.

use std::sync::Arc;

use trailmap_core::error::Result;
use trailmap_core::models::{LogId, PreviewImage};
use trailmap_store::LogStorage;

/// Uncached pass-through to stored preview images.
pub struct PreviewStore {
    storage: Arc<dyn LogStorage>,
}

impl PreviewStore {
    pub fn new(storage: Arc<dyn LogStorage>) -> Self {
        Self { storage }
    }

    pub async fn get(&self, id: &LogId) -> Result<PreviewImage> {
        self.storage.load_preview(id).await
    }
}
