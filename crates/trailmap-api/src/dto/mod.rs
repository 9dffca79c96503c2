pub mod request;
pub mod response;

pub use request::ListLogsParams;
pub use response::{HealthResponse, LogListResponse};
