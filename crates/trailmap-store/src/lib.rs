//! Trailmap Store - storage ports and backends
//!
//! Storage produces raw trajectory samples and preview image bytes per log
//! identifier. Two backends: an in-memory store for development and tests,
//! and a filesystem store reading one directory per log.

pub mod fs;
pub mod memory;
pub mod ports;

pub use fs::FsLogStorage;
pub use memory::MemoryLogStorage;
pub use ports::LogStorage;
