mod health;
mod logs;

pub use health::health_check;
pub use logs::{get_log, get_log_preview, list_logs};
