//! End-to-end tests driving the client session against a live in-process
//! server.

use std::sync::Arc;

use trailmap_api::state::AppState;
use trailmap_api::create_router;
use trailmap_client::viewport::{FitBounds, Focus};
use trailmap_client::{ClientConfig, ClientSession, PreviewState, SelectionChange};
use trailmap_core::models::{BoundingBox, LogId, PreviewImage, TrajectorySamples};
use trailmap_store::{LogStorage, MemoryLogStorage};

struct FixedFit(f64);

impl FitBounds for FixedFit {
    fn zoom_for_bounds(&self, _bounds: &BoundingBox, _padding: u32) -> f64 {
        self.0
    }
}

fn seeded_storage() -> MemoryLogStorage {
    let storage = MemoryLogStorage::new();
    for id in ["X", "Y", "Z"] {
        storage.insert_samples(
            LogId::from(id),
            TrajectorySamples {
                origin_lat: 57.78,
                origin_lon: 12.76,
                offsets: vec![[0.0, 0.0], [100.0, 50.0], [-30.0, 200.0]],
            },
        );
    }
    storage.insert_preview(
        LogId::from("X"),
        PreviewImage { bytes: vec![0xff, 0xd8, 0xff], mime: "image/jpeg".to_string() },
    );
    storage
}

async fn spawn_server(storage: MemoryLogStorage) -> String {
    let storage: Arc<dyn LogStorage> = Arc::new(storage);
    let app = create_router(Arc::new(AppState::new(storage)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn session_for(base_url: String, page_size: usize) -> ClientSession {
    ClientSession::new(&ClientConfig {
        base_url,
        page_size,
        ..ClientConfig::default()
    })
}

#[tokio::test]
async fn test_paged_catalog_merges_in_server_order() {
    let base_url = spawn_server(seeded_storage()).await;
    let session = session_for(base_url, 2);

    session.reload().await.unwrap();
    session.load_more().await.unwrap();

    session.with_state(|state| {
        let ids: Vec<&str> = state.store.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["X", "Y", "Z"]);
        assert_eq!(state.pager.total(), 3);
        assert!(!state.pager.has_more());
    });
}

#[tokio::test]
async fn test_activation_fetches_detail_and_retains_it() {
    let base_url = spawn_server(seeded_storage()).await;
    let session = session_for(base_url, 50);
    session.reload().await.unwrap();

    let x = LogId::from("X");
    assert_eq!(session.toggle(&x).await, Some(SelectionChange::Activated));

    session.with_state(|state| {
        let record = state.store.get(&x).unwrap();
        assert!(!record.loading);
        assert!(record.error.is_none());
        let detail = record.detail.as_ref().unwrap();
        assert_eq!(detail.num_points, 3);
        assert!(detail.bounds.is_some());
    });

    // Deactivation keeps the fetched detail for instant re-activation.
    assert_eq!(session.toggle(&x).await, Some(SelectionChange::Deactivated));
    session.with_state(|state| {
        assert!(!state.selection.is_active(&x));
        assert!(state.store.get(&x).unwrap().detail.is_some());
    });
}

#[tokio::test]
async fn test_unknown_identifier_cannot_be_selected() {
    let base_url = spawn_server(seeded_storage()).await;
    let session = session_for(base_url, 50);
    session.reload().await.unwrap();

    assert_eq!(session.toggle(&LogId::from("ghost")).await, None);
    session.with_state(|state| assert!(state.selection.is_empty()));
}

#[tokio::test]
async fn test_activate_many_fetches_each_log_once() {
    let base_url = spawn_server(seeded_storage()).await;
    let session = session_for(base_url, 50);
    session.reload().await.unwrap();

    let ids = [LogId::from("X"), LogId::from("Y"), LogId::from("X")];
    session.activate_many(&ids).await;

    session.with_state(|state| {
        assert_eq!(state.selection.len(), 2);
        assert!(state.store.get(&LogId::from("X")).unwrap().detail.is_some());
        assert!(state.store.get(&LogId::from("Y")).unwrap().detail.is_some());
        assert!(state.store.get(&LogId::from("Z")).unwrap().detail.is_none());
    });
}

#[tokio::test]
async fn test_rendering_is_gated_by_zoom() {
    let base_url = spawn_server(seeded_storage()).await;
    let session = session_for(base_url, 50);
    session.reload().await.unwrap();
    session.toggle(&LogId::from("X")).await;

    // Default zoom is below the gate: nothing renders, hover is ignored.
    assert!(session.renderable().is_empty());
    session.set_hovered(Some(LogId::from("X")));
    session.with_state(|state| assert!(state.hovered.is_none()));

    session.apply_zoom(15.0);
    let rendered = session.renderable();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].id, LogId::from("X"));
    assert!(!rendered[0].color.is_empty());

    session.set_hovered(Some(LogId::from("X")));
    session.with_state(|state| assert!(state.hovered.is_some()));

    // Zooming back out clears the hover and hides the trajectories.
    session.apply_zoom(10.0);
    session.with_state(|state| assert!(state.hovered.is_none()));
    assert!(session.renderable().is_empty());
}

#[tokio::test]
async fn test_focus_respects_the_gating_floor() {
    let base_url = spawn_server(seeded_storage()).await;
    let session = session_for(base_url, 50);
    session.reload().await.unwrap();
    session.toggle(&LogId::from("X")).await;

    // The fit primitive would zoom out to 8; the gate floors it.
    let Focus { zoom, .. } = session.focus_on(&FixedFit(8.0), &LogId::from("X")).unwrap();
    assert_eq!(zoom, session.gate().threshold());

    let Focus { zoom, .. } = session.focus_on(&FixedFit(16.0), &LogId::from("X")).unwrap();
    assert_eq!(zoom, 16.0);

    // No detail loaded for Y yet: no focus target.
    assert!(session.focus_on(&FixedFit(16.0), &LogId::from("Y")).is_none());
}

#[tokio::test]
async fn test_preview_lifecycle() {
    let base_url = spawn_server(seeded_storage()).await;
    let session = session_for(base_url, 50);
    session.reload().await.unwrap();

    session.open_preview(&LogId::from("X")).await;
    session.with_state(|state| {
        let preview = state.preview.current().unwrap();
        assert_eq!(preview.id, LogId::from("X"));
        match &preview.state {
            PreviewState::Ready(image) => {
                assert_eq!(image.mime, "image/jpeg");
                assert_eq!(image.bytes, vec![0xff, 0xd8, 0xff]);
            }
            other => panic!("expected a ready preview, got {:?}", other),
        }
    });

    // Y has no preview: the failure lands in the session, nothing else.
    session.open_preview(&LogId::from("Y")).await;
    session.with_state(|state| {
        let preview = state.preview.current().unwrap();
        assert_eq!(preview.id, LogId::from("Y"));
        assert!(matches!(&preview.state, PreviewState::Failed(m) if m.contains("preview")));
        assert!(state.pager.last_error().is_none());
    });

    session.close_preview();
    session.with_state(|state| assert!(state.preview.current().is_none()));
}

#[tokio::test]
async fn test_unreachable_server_surfaces_a_transport_error() {
    // Nothing listens on this port.
    let session = session_for("http://127.0.0.1:9".to_string(), 50);

    let err = session.reload().await.unwrap_err();
    assert!(err.to_string().contains("Transport failure"));
    session.with_state(|state| {
        assert!(state.store.is_empty());
        assert!(state.pager.last_error().is_some());
    });
}
