//! Async session facade: wires the wire client to the state machines.
//!
//! All client state lives behind one mutex that is held only across
//! discrete transitions, never across an await. Every fetch completion
//! re-acquires the lock to apply its outcome, so a superseded preview
//! response is discarded by the sequence protocol rather than by aborting
//! the transport.

use std::sync::{Arc, Mutex};

use trailmap_core::error::Result;
use trailmap_core::models::{LogDetail, LogId, PreviewImage};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::pager::{CatalogPager, PageRequest};
use crate::palette;
use crate::preview::{DropReleaser, PreviewController};
use crate::selection::{SelectionChange, SelectionSet};
use crate::store::LogStore;
use crate::viewport::{FitBounds, Focus, ViewportGate};

/// Everything the render layer reads, guarded as one unit.
#[derive(Default)]
pub struct SessionState {
    pub store: LogStore,
    pub pager: CatalogPager,
    pub selection: SelectionSet,
    pub preview: PreviewController<PreviewImage>,
    pub zoom: f64,
    pub hovered: Option<LogId>,
}

/// One trajectory ready for the render layer.
#[derive(Debug, Clone)]
pub struct RenderTrajectory {
    pub id: LogId,
    pub color: &'static str,
    pub detail: Arc<LogDetail>,
}

/// Client session over the Trailmap data service.
#[derive(Clone)]
pub struct ClientSession {
    api: Arc<ApiClient>,
    gate: ViewportGate,
    state: Arc<Mutex<SessionState>>,
}

impl ClientSession {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: Arc::new(ApiClient::new(config.base_url.as_str())),
            gate: ViewportGate::new(config.zoom_threshold, config.fit_padding),
            state: Arc::new(Mutex::new(SessionState {
                pager: CatalogPager::new(config.page_size),
                ..SessionState::default()
            })),
        }
    }

    pub fn gate(&self) -> ViewportGate {
        self.gate
    }

    /// Run a closure against the current state (for rendering).
    pub fn with_state<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        f(&self.state.lock().unwrap())
    }

    /// Load the first catalog page, resetting the merged list once it
    /// arrives.
    pub async fn reload(&self) -> Result<()> {
        let request = self.state.lock().unwrap().pager.reload();
        match request {
            Some(request) => self.run_page_request(request).await,
            None => Ok(()),
        }
    }

    /// Load the next catalog page; a no-op while one is outstanding or
    /// once the catalog is exhausted.
    pub async fn load_more(&self) -> Result<()> {
        let request = self.state.lock().unwrap().pager.load_more();
        match request {
            Some(request) => self.run_page_request(request).await,
            None => Ok(()),
        }
    }

    async fn run_page_request(&self, request: PageRequest) -> Result<()> {
        match self.api.list_logs(request.offset, request.limit).await {
            Ok(page) => {
                let mut state = self.state.lock().unwrap();
                let state = &mut *state;
                state.pager.apply_page(&mut state.store, request.offset, page);
                state.selection.retain_known(&state.store);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, offset = request.offset, "Catalog page load failed");
                self.state.lock().unwrap().pager.apply_error(&e);
                Err(e)
            }
        }
    }

    /// Toggle selection of a log. Activation triggers the detail fetch
    /// through the dedup protocol; deactivation never cancels one.
    pub async fn toggle(&self, id: &LogId) -> Option<SelectionChange> {
        let (change, fetch) = {
            let mut state = self.state.lock().unwrap();
            let state = &mut *state;
            let change = state.selection.toggle(&state.store, id);
            let fetch = matches!(change, Some(SelectionChange::Activated))
                && state.store.begin_detail_fetch(id);
            (change, fetch)
        };

        if fetch {
            self.fetch_detail(id).await;
        }
        change
    }

    /// Activate several logs at once; one independent fetch per
    /// identifier.
    pub async fn activate_many(&self, ids: &[LogId]) {
        let mut to_fetch = Vec::new();
        {
            let mut state = self.state.lock().unwrap();
            let state = &mut *state;
            for id in ids {
                if state.selection.is_active(id) {
                    continue;
                }
                if state.selection.toggle(&state.store, id).is_some()
                    && state.store.begin_detail_fetch(id)
                {
                    to_fetch.push(id.clone());
                }
            }
        }

        futures::future::join_all(to_fetch.iter().map(|id| self.fetch_detail(id))).await;
    }

    async fn fetch_detail(&self, id: &LogId) {
        let result = self.api.get_log(id).await.map_err(|e| e.to_string());
        self.state.lock().unwrap().store.complete_detail(id, result);
    }

    /// Open (or retarget) the preview for a log.
    pub async fn open_preview(&self, id: &LogId) {
        let ticket = self.state.lock().unwrap().preview.activate(&mut DropReleaser, id);

        let result = self.api.get_preview(id).await.map_err(|e| e.to_string());
        self.state.lock().unwrap().preview.complete(&mut DropReleaser, ticket, result);
    }

    /// Close the preview, invalidating any outstanding fetch.
    pub fn close_preview(&self) {
        self.state.lock().unwrap().preview.close(&mut DropReleaser);
    }

    /// Report a hover change from the render layer. Ignored while the
    /// zoom gate keeps trajectories hidden.
    pub fn set_hovered(&self, id: Option<LogId>) {
        let mut state = self.state.lock().unwrap();
        if id.is_some() && !self.gate.trajectories_visible(state.zoom) {
            return;
        }
        state.hovered = id;
    }

    /// Report a zoom change; below the gating threshold the hover clears.
    pub fn apply_zoom(&self, zoom: f64) {
        let mut state = self.state.lock().unwrap();
        state.zoom = zoom;
        self.gate.apply_zoom(zoom, &mut state.hovered);
    }

    /// Trajectories to draw: active selections whose detail has arrived,
    /// only when the current zoom clears the gate.
    pub fn renderable(&self) -> Vec<RenderTrajectory> {
        let state = self.state.lock().unwrap();
        if !self.gate.trajectories_visible(state.zoom) {
            return Vec::new();
        }

        state
            .store
            .iter()
            .enumerate()
            .filter(|(_, (id, _))| state.selection.is_active(id))
            .filter_map(|(index, (id, record))| {
                record.detail.clone().map(|detail| RenderTrajectory {
                    id: id.clone(),
                    color: palette::color_for(index),
                    detail,
                })
            })
            .collect()
    }

    /// Focus viewport for a log's trajectory, if its detail is loaded.
    pub fn focus_on(&self, fit: &dyn FitBounds, id: &LogId) -> Option<Focus> {
        let state = self.state.lock().unwrap();
        let record = state.store.get(id)?;
        let detail = record.detail.as_ref()?;
        self.gate.focus(fit, detail, state.zoom)
    }
}
