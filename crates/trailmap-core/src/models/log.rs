use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{BoundingBox, TrajectoryPoint};

/// Unique identifier of a recorded driving log.
///
/// Identifiers are assigned by the storage layer; the server is the
/// authority for which identifiers exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogId(pub String);

impl LogId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Cheap catalog-listing view of a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    pub id: LogId,

    /// Number of trajectory points, when the listing was asked for details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_points: Option<usize>,

    /// Enclosing box, when the listing was asked for details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,
}

impl LogSummary {
    /// Summary carrying only the identifier.
    pub fn bare(id: LogId) -> Self {
        Self { id, num_points: None, bounds: None }
    }
}

/// Full trajectory of a log, fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogDetail {
    pub id: LogId,
    pub num_points: usize,

    /// Absent when the trajectory has zero points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,

    pub trajectory: Vec<TrajectoryPoint>,
}

impl LogDetail {
    /// The cheap listing view of this detail.
    pub fn summary(&self) -> LogSummary {
        LogSummary {
            id: self.id.clone(),
            num_points: Some(self.num_points),
            bounds: self.bounds,
        }
    }
}

/// One page of the catalog listing.
///
/// `next_offset` is `None` once the page reaches the end of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogPage {
    pub items: Vec<LogSummary>,
    pub total: usize,
    pub next_offset: Option<usize>,
}

/// A pre-rendered preview image for a log.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub bytes: Vec<u8>,
    pub mime: String,
}
