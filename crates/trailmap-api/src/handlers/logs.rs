use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use trailmap_core::models::{LogDetail, LogId};

use crate::dto::{ListLogsParams, LogListResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListLogsParams>,
) -> Result<Json<LogListResponse>, ApiError> {
    tracing::info!(
        offset = params.offset,
        limit = params.limit,
        include_details = params.include_details,
        "Listing logs"
    );

    let page = state
        .catalog
        .page(params.offset, params.limit, params.include_details)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list logs");
            ApiError::internal("Failed to list logs").with_details(e.to_string())
        })?;

    Ok(Json(page.into()))
}

pub async fn get_log(
    State(state): State<Arc<AppState>>,
    Path(log_id): Path<String>,
) -> Result<Json<LogDetail>, ApiError> {
    let id = LogId::new(log_id);
    tracing::info!(log_id = %id, "Fetching log detail");

    if !state.catalog.contains(&id).await? {
        return Err(ApiError::not_found(format!("Unknown log id: {}", id)));
    }

    let detail = state.trajectories.get_detail(&id).await?;
    Ok(Json((*detail).clone()))
}

pub async fn get_log_preview(
    State(state): State<Arc<AppState>>,
    Path(log_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = LogId::new(log_id);
    tracing::info!(log_id = %id, "Fetching preview image");

    if !state.catalog.contains(&id).await? {
        return Err(ApiError::not_found(format!("Unknown log id: {}", id)));
    }

    let preview = state.previews.get(&id).await?;
    Ok(([(header::CONTENT_TYPE, preview.mime)], preview.bytes).into_response())
}
