//! Trailmap Client - asynchronous state synchronization for the log browser
//!
//! Pure state machines (pagination, record store, selection, preview
//! session, viewport gating) plus a reqwest wire client and an async
//! session facade that ties them together. Every state transition is
//! discrete; responses superseded by a newer activation or a close are
//! discarded by the sequence protocol in [`preview`], never by aborting
//! the transport.

pub mod api;
pub mod config;
pub mod pager;
pub mod palette;
pub mod preview;
pub mod selection;
pub mod session;
pub mod store;
pub mod viewport;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use pager::{CatalogPager, PageRequest};
pub use preview::{
    DropReleaser, PreviewController, PreviewSession, PreviewState, PreviewTicket, ResourceReleaser,
};
pub use selection::{SelectionChange, SelectionSet};
pub use session::{ClientSession, RenderTrajectory, SessionState};
pub use store::{LogRecord, LogStore};
pub use viewport::{FitBounds, Focus, ViewportGate};
