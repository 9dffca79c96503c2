//! Catalog enumeration and pagination.

use std::sync::Arc;

use tokio::sync::OnceCell;

use trailmap_core::error::{Result, TrailmapError};
use trailmap_core::models::{LogId, LogPage, LogSummary};
use trailmap_store::LogStorage;

use super::trajectory::TrajectoryCache;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 500;

/// Enumerates the known log identifiers.
///
/// The identifier list is read from storage once per process and memoized:
/// the server is the identifier authority and the catalog is fixed for the
/// process lifetime.
pub struct CatalogIndex {
    storage: Arc<dyn LogStorage>,
    trajectories: Arc<TrajectoryCache>,
    ids: OnceCell<Vec<LogId>>,
}

impl CatalogIndex {
    pub fn new(storage: Arc<dyn LogStorage>, trajectories: Arc<TrajectoryCache>) -> Self {
        Self {
            storage,
            trajectories,
            ids: OnceCell::new(),
        }
    }

    /// Sorted list of every known identifier.
    pub async fn ids(&self) -> Result<&[LogId]> {
        let ids = self
            .ids
            .get_or_try_init(|| async {
                let ids = self.storage.list_log_ids().await?;
                tracing::info!(total = ids.len(), "Enumerated catalog");
                Ok::<_, TrailmapError>(ids)
            })
            .await?;
        Ok(ids)
    }

    /// Whether the catalog knows this identifier.
    pub async fn contains(&self, id: &LogId) -> Result<bool> {
        Ok(self.ids().await?.iter().any(|known| known == id))
    }

    /// One page of the catalog.
    ///
    /// `next_offset` is `None` once `offset + items.len() >= total`. With
    /// `include_details`, each item carries its point count and bounds;
    /// identifiers whose trajectory fails to load are skipped (the total
    /// still counts them).
    pub async fn page(
        &self,
        offset: usize,
        limit: usize,
        include_details: bool,
    ) -> Result<LogPage> {
        let limit = limit.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        let ids = self.ids().await?;
        let total = ids.len();

        let sliced: &[LogId] = if offset >= total {
            &[]
        } else {
            &ids[offset..(offset + limit).min(total)]
        };

        let items: Vec<LogSummary> = if include_details {
            let details = futures::future::join_all(
                sliced.iter().map(|id| self.trajectories.get_detail(id)),
            )
            .await;

            sliced
                .iter()
                .zip(details)
                .filter_map(|(id, detail)| match detail {
                    Ok(detail) => Some(detail.summary()),
                    Err(e) => {
                        tracing::error!(log_id = %id, error = %e, "Skipping log in detailed listing");
                        None
                    }
                })
                .collect()
        } else {
            sliced.iter().cloned().map(LogSummary::bare).collect()
        };

        let next_offset = match offset + sliced.len() {
            end if end >= total => None,
            end => Some(end),
        };

        Ok(LogPage { items, total, next_offset })
    }
}
