//! In-memory storage implementation for development and testing.
//!
//! Uses `RwLock::unwrap()` intentionally. Lock poisoning only occurs when
//! another thread panicked while holding the lock, which is an
//! unrecoverable state. Dataset deployments use the filesystem backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use trailmap_core::error::{Result, TrailmapError};
use trailmap_core::models::{LogId, PreviewImage, TrajectorySamples};

use crate::ports::LogStorage;

/// In-memory implementation of LogStorage
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStorage {
    samples: Arc<RwLock<HashMap<LogId, TrajectorySamples>>>,
    previews: Arc<RwLock<HashMap<LogId, PreviewImage>>>,
}

impl MemoryLogStorage {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a log with its raw samples.
    pub fn insert_samples(&self, id: LogId, samples: TrajectorySamples) {
        self.samples.write().unwrap().insert(id, samples);
    }

    /// Attach a preview image to a log.
    pub fn insert_preview(&self, id: LogId, preview: PreviewImage) {
        self.previews.write().unwrap().insert(id, preview);
    }
}

#[async_trait]
impl LogStorage for MemoryLogStorage {
    async fn list_log_ids(&self) -> Result<Vec<LogId>> {
        let samples = self.samples.read().unwrap();
        let mut ids: Vec<LogId> = samples.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    async fn load_samples(&self, id: &LogId) -> Result<TrajectorySamples> {
        let samples = self.samples.read().unwrap();
        samples
            .get(id)
            .cloned()
            .ok_or_else(|| TrailmapError::LogNotFound { id: id.clone() })
    }

    async fn load_preview(&self, id: &LogId) -> Result<PreviewImage> {
        let previews = self.previews.read().unwrap();
        previews
            .get(id)
            .cloned()
            .ok_or_else(|| TrailmapError::PreviewNotFound { id: id.clone() })
    }
}
