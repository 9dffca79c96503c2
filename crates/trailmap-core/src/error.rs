//! Error types for Trailmap

use thiserror::Error;

use crate::models::LogId;

#[derive(Debug, Error)]
pub enum TrailmapError {
    // Catalog errors
    #[error("Unknown log id: {id}")]
    LogNotFound { id: LogId },

    #[error("No preview available for log {id}")]
    PreviewNotFound { id: LogId },

    // Connection-level errors (client side)
    #[error("Transport failure: {0}")]
    Transport(String),

    // Server-side computation or storage errors
    #[error("Storage failure: {0}")]
    Storage(String),

    // Malformed payloads
    #[error("Decode failure: {0}")]
    Decode(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrailmapError {
    /// True for the not-found kinds at any endpoint.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LogNotFound { .. } | Self::PreviewNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TrailmapError>;
