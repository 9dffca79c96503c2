use serde::Deserialize;

/// Query parameters for the catalog listing
#[derive(Debug, Deserialize)]
pub struct ListLogsParams {
    #[serde(default)]
    pub offset: usize,

    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default)]
    pub include_details: bool,
}

fn default_limit() -> usize {
    50
}
