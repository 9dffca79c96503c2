use serde::Serialize;
use trailmap_core::models::{LogPage, LogSummary};

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct LogListResponse {
    pub items: Vec<LogSummary>,
    pub total: usize,
    pub next_offset: Option<usize>,
}

impl From<LogPage> for LogListResponse {
    fn from(page: LogPage) -> Self {
        Self {
            items: page.items,
            total: page.total,
            next_offset: page.next_offset,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "trailmap-api" }
    }
}
