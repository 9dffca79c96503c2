//! The preview session: one logically current preview fetch.
//!
//! Cooperative cancellation without transport aborts: every activation and
//! every close bumps a monotonic sequence counter, and a completion whose
//! ticket no longer matches the counter is discarded. A discarded success
//! still carries a resource; it is released through the
//! [`ResourceReleaser`] seam without ever being exposed.

use trailmap_core::models::LogId;

/// Owner hook for releasing preview resources (decoded images, object
/// URLs) once a session no longer holds them.
pub trait ResourceReleaser<R> {
    fn release(&mut self, resource: R);
}

/// Releases resources by dropping them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DropReleaser;

impl<R> ResourceReleaser<R> for DropReleaser {
    fn release(&mut self, resource: R) {
        drop(resource);
    }
}

/// Correlates an in-flight preview fetch with the activation that issued
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTicket {
    pub id: LogId,
    seq: u64,
}

/// State of the current preview session.
#[derive(Debug)]
pub enum PreviewState<R> {
    Loading,
    Ready(R),
    Failed(String),
}

/// The one logically current preview session.
#[derive(Debug)]
pub struct PreviewSession<R> {
    pub id: LogId,
    seq: u64,
    pub state: PreviewState<R>,
}

impl<R> PreviewSession<R> {
    /// Sequence number of the activation that created this session.
    pub fn sequence(&self) -> u64 {
        self.seq
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PreviewState::Loading)
    }
}

/// Manages the preview session lifecycle and resource ownership.
#[derive(Debug)]
pub struct PreviewController<R> {
    seq: u64,
    session: Option<PreviewSession<R>>,
}

impl<R> PreviewController<R> {
    pub fn new() -> Self {
        Self { seq: 0, session: None }
    }

    pub fn current(&self) -> Option<&PreviewSession<R>> {
        self.session.as_ref()
    }

    /// Begin a new session for `id`, superseding any previous one in full.
    ///
    /// The previous committed resource, if any, is released here; the
    /// returned ticket must be passed back to [`complete`](Self::complete)
    /// with the fetch outcome.
    pub fn activate<H: ResourceReleaser<R>>(&mut self, host: &mut H, id: &LogId) -> PreviewTicket {
        self.seq += 1;
        self.release_current(host);
        self.session = Some(PreviewSession {
            id: id.clone(),
            seq: self.seq,
            state: PreviewState::Loading,
        });
        PreviewTicket { id: id.clone(), seq: self.seq }
    }

    /// Apply a fetch completion.
    ///
    /// A ticket issued before a newer activation or a close no longer
    /// matches the counter: its result is discarded, and a carried
    /// resource is released without being exposed. A current result is
    /// committed after releasing whatever the session still holds.
    pub fn complete<H: ResourceReleaser<R>>(
        &mut self,
        host: &mut H,
        ticket: PreviewTicket,
        result: Result<R, String>,
    ) {
        if ticket.seq != self.seq {
            if let Ok(resource) = result {
                host.release(resource);
            }
            return;
        }

        self.release_current(host);
        self.session = Some(PreviewSession {
            id: ticket.id,
            seq: ticket.seq,
            state: match result {
                Ok(resource) => PreviewState::Ready(resource),
                Err(message) => PreviewState::Failed(message),
            },
        });
    }

    /// Explicitly close the session, invalidating any outstanding fetch
    /// and releasing the held resource.
    pub fn close<H: ResourceReleaser<R>>(&mut self, host: &mut H) {
        self.seq += 1;
        self.release_current(host);
    }

    fn release_current<H: ResourceReleaser<R>>(&mut self, host: &mut H) {
        if let Some(session) = self.session.take() {
            if let PreviewState::Ready(resource) = session.state {
                host.release(resource);
            }
        }
    }
}

impl<R> Default for PreviewController<R> {
    fn default() -> Self {
        Self::new()
    }
}
