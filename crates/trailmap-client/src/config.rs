use std::env;

/// Default data service base URL (the local development server).
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Default minimum zoom at which trajectories render.
pub const DEFAULT_ZOOM_THRESHOLD: f64 = 13.0;

/// Default pixel padding when fitting a bounding box to the viewport.
pub const DEFAULT_FIT_PADDING: u32 = 48;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the data service.
    pub base_url: String,

    /// Catalog page size.
    pub page_size: usize,

    /// Zoom gating threshold for trajectory rendering.
    pub zoom_threshold: f64,

    /// Viewport padding, in pixels, for focus-on-activation.
    pub fit_padding: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            page_size: crate::pager::DEFAULT_PAGE_SIZE,
            zoom_threshold: DEFAULT_ZOOM_THRESHOLD,
            fit_padding: DEFAULT_FIT_PADDING,
        }
    }
}

impl ClientConfig {
    /// Load configuration, honoring the `TRAILMAP_API_URL` override.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("TRAILMAP_API_URL") {
            config.base_url = url;
        }
        config
    }
}
