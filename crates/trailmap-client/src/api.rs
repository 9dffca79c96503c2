use trailmap_core::error::{Result, TrailmapError};
use trailmap_core::models::{LogDetail, LogId, LogPage, PreviewImage};

/// HTTP client for the Trailmap data service.
pub struct ApiClient {
    /// Base URL for the service (e.g., "http://localhost:3001")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create with the default localhost URL.
    pub fn localhost() -> Self {
        Self::new(crate::config::DEFAULT_API_URL)
    }

    /// `GET /api/v1/logs` - one catalog page.
    pub async fn list_logs(&self, offset: usize, limit: usize) -> Result<LogPage> {
        let response = self
            .client
            .get(format!("{}/api/v1/logs", self.base_url))
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await
            .map_err(connection_error)?;

        if !response.status().is_success() {
            return Err(server_failure(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| TrailmapError::Decode(format!("log page: {}", e)))
    }

    /// `GET /api/v1/logs/{id}` - full trajectory detail.
    pub async fn get_log(&self, id: &LogId) -> Result<LogDetail> {
        let response = self
            .client
            .get(format!("{}/api/v1/logs/{}", self.base_url, id))
            .send()
            .await
            .map_err(connection_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(TrailmapError::LogNotFound { id: id.clone() });
        }
        if !response.status().is_success() {
            return Err(server_failure(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| TrailmapError::Decode(format!("log detail: {}", e)))
    }

    /// `GET /api/v1/logs/{id}/preview` - preview image bytes and mime type.
    pub async fn get_preview(&self, id: &LogId) -> Result<PreviewImage> {
        let response = self
            .client
            .get(format!("{}/api/v1/logs/{}/preview", self.base_url, id))
            .send()
            .await
            .map_err(connection_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(TrailmapError::PreviewNotFound { id: id.clone() });
        }
        if !response.status().is_success() {
            return Err(server_failure(response).await);
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TrailmapError::Decode(format!("preview body: {}", e)))?;

        Ok(PreviewImage { bytes: bytes.to_vec(), mime })
    }
}

fn connection_error(e: reqwest::Error) -> TrailmapError {
    TrailmapError::Transport(e.to_string())
}

async fn server_failure(response: reqwest::Response) -> TrailmapError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    TrailmapError::Storage(format!("server error ({}): {}", status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://localhost:3001///");
        assert_eq!(client.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_localhost_default() {
        let client = ApiClient::localhost();
        assert_eq!(client.base_url, crate::config::DEFAULT_API_URL);
    }
}
