use async_trait::async_trait;
use trailmap_core::error::Result;
use trailmap_core::models::{LogId, PreviewImage, TrajectorySamples};

/// Port for raw driving-log assets
#[async_trait]
pub trait LogStorage: Send + Sync {
    /// Enumerate every log identifier known to this storage, sorted.
    async fn list_log_ids(&self) -> Result<Vec<LogId>>;

    /// Load the raw odometry samples for a log.
    ///
    /// Fails with `LogNotFound` for an unknown identifier.
    async fn load_samples(&self, id: &LogId) -> Result<TrajectorySamples>;

    /// Load the pre-rendered preview image for a log.
    ///
    /// Fails with `PreviewNotFound` when the log has no preview.
    async fn load_preview(&self, id: &LogId) -> Result<PreviewImage>;
}
