pub mod geometry;
pub mod log;
pub mod samples;

pub use geometry::{BoundingBox, TrajectoryPoint};
pub use log::{LogDetail, LogId, LogPage, LogSummary, PreviewImage};
pub use samples::TrajectorySamples;
