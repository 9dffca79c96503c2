//! Filesystem-backed storage reading one directory per log.
//!
//! Layout mirrors the dataset export this service was built for:
//!
//! ```text
//! <root>/<log_id>/trajectory.json   # TrajectorySamples
//! <root>/<log_id>/preview.jpg       # JPEG preview bytes
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use trailmap_core::error::{Result, TrailmapError};
use trailmap_core::models::{LogId, PreviewImage, TrajectorySamples};

use crate::ports::LogStorage;

const SAMPLES_FILE: &str = "trajectory.json";
const PREVIEW_FILE: &str = "preview.jpg";
const PREVIEW_MIME: &str = "image/jpeg";

/// Filesystem implementation of LogStorage
#[derive(Debug, Clone)]
pub struct FsLogStorage {
    root: PathBuf,
}

impl FsLogStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn log_dir(&self, id: &LogId) -> PathBuf {
        self.root.join(id.as_str())
    }
}

#[async_trait]
impl LogStorage for FsLogStorage {
    async fn list_log_ids(&self) -> Result<Vec<LogId>> {
        if !self.root.is_dir() {
            tracing::warn!(root = %self.root.display(), "Data root does not exist");
            return Ok(Vec::new());
        }

        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    ids.push(LogId::new(name));
                }
            }
        }

        ids.sort();
        Ok(ids)
    }

    async fn load_samples(&self, id: &LogId) -> Result<TrajectorySamples> {
        let dir = self.log_dir(id);
        if !dir.is_dir() {
            return Err(TrailmapError::LogNotFound { id: id.clone() });
        }

        let content = tokio::fs::read_to_string(dir.join(SAMPLES_FILE)).await?;
        serde_json::from_str(&content)
            .map_err(|e| TrailmapError::Decode(format!("{}: {}", SAMPLES_FILE, e)))
    }

    async fn load_preview(&self, id: &LogId) -> Result<PreviewImage> {
        let dir = self.log_dir(id);
        if !dir.is_dir() {
            return Err(TrailmapError::LogNotFound { id: id.clone() });
        }

        let path = dir.join(PREVIEW_FILE);
        if !path.is_file() {
            return Err(TrailmapError::PreviewNotFound { id: id.clone() });
        }

        let bytes = tokio::fs::read(&path).await?;
        Ok(PreviewImage { bytes, mime: PREVIEW_MIME.to_string() })
    }
}
