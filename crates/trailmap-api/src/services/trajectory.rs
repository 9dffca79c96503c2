//! Memoized trajectory computation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;

use trailmap_core::error::{Result, TrailmapError};
use trailmap_core::models::{BoundingBox, LogDetail, LogId};
use trailmap_store::LogStorage;

/// Outcome memoized per log id. Failures are kept so every caller of a
/// failed computation observes the same error; nothing is recomputed for
/// the lifetime of the process.
#[derive(Debug, Clone)]
enum CachedOutcome {
    Detail(Arc<LogDetail>),
    NotFound,
    Failed(String),
}

type Slot = Arc<OnceCell<CachedOutcome>>;

/// Per-process trajectory cache.
///
/// `get_detail` is single-flight per key: the per-key `OnceCell` makes the
/// compute-or-join decision atomic, so N concurrent requests for the same
/// uncached id run exactly one storage load and share its outcome. The
/// cache is unbounded and never invalidated; a trajectory, once computed,
/// is immutable until the process restarts.
pub struct TrajectoryCache {
    storage: Arc<dyn LogStorage>,
    slots: Mutex<HashMap<LogId, Slot>>,
}

impl TrajectoryCache {
    pub fn new(storage: Arc<dyn LogStorage>) -> Self {
        Self {
            storage,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Full ordered point sequence and bounding box for a log.
    pub async fn get_detail(&self, id: &LogId) -> Result<Arc<LogDetail>> {
        let slot = {
            let mut slots = self.slots.lock().unwrap();
            slots.entry(id.clone()).or_insert_with(|| Arc::new(OnceCell::new())).clone()
        };

        let outcome = slot
            .get_or_init(|| async {
                tracing::info!(log_id = %id, "Loading trajectory");
                match self.compute(id).await {
                    Ok(detail) => CachedOutcome::Detail(Arc::new(detail)),
                    Err(TrailmapError::LogNotFound { .. }) => CachedOutcome::NotFound,
                    Err(e) => {
                        tracing::error!(log_id = %id, error = %e, "Trajectory computation failed");
                        CachedOutcome::Failed(e.to_string())
                    }
                }
            })
            .await;

        match outcome {
            CachedOutcome::Detail(detail) => Ok(detail.clone()),
            CachedOutcome::NotFound => Err(TrailmapError::LogNotFound { id: id.clone() }),
            CachedOutcome::Failed(message) => Err(TrailmapError::Storage(message.clone())),
        }
    }

    async fn compute(&self, id: &LogId) -> Result<LogDetail> {
        let samples = self.storage.load_samples(id).await?;
        let trajectory = samples.to_points();
        let bounds = BoundingBox::from_points(&trajectory);

        tracing::info!(log_id = %id, num_points = trajectory.len(), "Computed trajectory");

        Ok(LogDetail {
            id: id.clone(),
            num_points: trajectory.len(),
            bounds,
            trajectory,
        })
    }
}
