//! Client-side record store: the single source of truth for rendering.

use std::collections::HashMap;
use std::sync::Arc;

use trailmap_core::models::{LogDetail, LogId, LogSummary};

/// Aggregate client view of one log.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub summary: LogSummary,

    /// Populated once, on first activation, and never cleared by
    /// deactivation.
    pub detail: Option<Arc<LogDetail>>,

    /// True while a detail fetch is in flight.
    pub loading: bool,

    /// Last detail fetch failure, scoped to this record only.
    pub error: Option<String>,
}

impl LogRecord {
    fn new(summary: LogSummary) -> Self {
        Self {
            summary,
            detail: None,
            loading: false,
            error: None,
        }
    }
}

/// Identifier-keyed record map plus the insertion-ordered key sequence.
///
/// The two structures are updated together on every merge, so the rendered
/// list keeps first-seen order while lookups stay cheap.
#[derive(Debug, Default)]
pub struct LogStore {
    order: Vec<LogId>,
    records: HashMap<LogId, LogRecord>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &LogId) -> bool {
        self.records.contains_key(id)
    }

    pub fn get(&self, id: &LogId) -> Option<&LogRecord> {
        self.records.get(id)
    }

    /// Identifiers in first-seen order.
    pub fn ids(&self) -> &[LogId] {
        &self.order
    }

    /// Records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&LogId, &LogRecord)> + '_ {
        self.order.iter().map(move |id| (id, &self.records[id]))
    }

    /// Drop every record and the ordering (an offset-0 page is a full
    /// reset).
    pub fn clear(&mut self) {
        self.order.clear();
        self.records.clear();
    }

    /// Merge one page of summaries.
    ///
    /// Unseen identifiers append in arrival order; already-present ones
    /// keep their position and record but have the summary refreshed in
    /// place.
    pub fn merge_summaries(&mut self, items: Vec<LogSummary>) {
        for summary in items {
            match self.records.get_mut(&summary.id) {
                Some(record) => {
                    record.summary = summary;
                }
                None => {
                    self.order.push(summary.id.clone());
                    self.records.insert(summary.id.clone(), LogRecord::new(summary));
                }
            }
        }
    }

    /// Decide whether a detail fetch must be issued for `id`.
    ///
    /// Returns `false` when the identifier is unknown, the detail is
    /// already present, or a fetch is already in flight; otherwise marks
    /// the record loading.
    pub fn begin_detail_fetch(&mut self, id: &LogId) -> bool {
        let Some(record) = self.records.get_mut(id) else {
            return false;
        };
        if record.detail.is_some() || record.loading {
            return false;
        }
        record.loading = true;
        true
    }

    /// Apply a detail fetch completion to the owning record only.
    pub fn complete_detail(&mut self, id: &LogId, result: Result<LogDetail, String>) {
        let Some(record) = self.records.get_mut(id) else {
            return;
        };
        record.loading = false;
        match result {
            Ok(detail) => {
                record.summary = detail.summary();
                record.error = None;
                record.detail = Some(Arc::new(detail));
            }
            Err(message) => {
                record.error = Some(message);
            }
        }
    }
}
