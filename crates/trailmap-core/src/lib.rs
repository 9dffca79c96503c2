//! Trailmap Core - Domain models and error types
//!
//! This crate contains the domain types shared by the Trailmap server and
//! client: log identifiers, trajectories, bounding boxes, catalog pages,
//! and preview images.

pub mod error;
pub mod models;

pub use error::{Result, TrailmapError};
