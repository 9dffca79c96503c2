use std::env;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub data_root: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("TRAILMAP_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3001);

        let cors_origin = env::var("TRAILMAP_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        let data_root = env::var("TRAILMAP_DATA_ROOT").ok();

        Self { port, cors_origin, data_root }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if filesystem storage is configured
    pub fn uses_filesystem(&self) -> bool {
        self.data_root.is_some()
    }
}
