//! Store Sync against an in-process fake of the portfolio backend

#![cfg(feature = "native")]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};

use folio::view::FormState;
use folio::{
    AdminGate, Collections, Fields, Item, Page, Portfolio, PortfolioStore, Profile,
    RemoteConfig, RemoteSource, Section, StoreError, View, WorkItem,
};

#[derive(Default)]
struct Backend {
    records: Mutex<HashMap<String, Vec<Value>>>,
    next_id: AtomicU64,
    failing: AtomicBool,
}

type Shared = Arc<Backend>;

fn failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
}

async fn list(State(backend): State<Shared>, Path(section): Path<String>) -> Response {
    if backend.failing.load(Ordering::SeqCst) {
        return failure();
    }
    let records = backend.records.lock().unwrap();
    Json(records.get(&section).cloned().unwrap_or_default()).into_response()
}

async fn create(
    State(backend): State<Shared>,
    Path(section): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    if backend.failing.load(Ordering::SeqCst) {
        return failure();
    }
    let id = backend.next_id.fetch_add(1, Ordering::SeqCst);
    body["_id"] = json!(id.to_string());
    backend
        .records
        .lock()
        .unwrap()
        .entry(section)
        .or_default()
        .push(body.clone());
    Json(body).into_response()
}

async fn remove(
    State(backend): State<Shared>,
    Path((section, id)): Path<(String, String)>,
) -> Response {
    if backend.failing.load(Ordering::SeqCst) {
        return failure();
    }
    if let Some(records) = backend.records.lock().unwrap().get_mut(&section) {
        records.retain(|record| record["_id"] != json!(id));
    }
    Json(json!({ "message": "Deleted" })).into_response()
}

/// Serve a fake backend on an ephemeral port, returning its API base URL
async fn spawn_backend(backend: Shared) -> String {
    let app = Router::new()
        .route("/api/:section", get(list).post(create))
        .route("/api/:section/:id", delete(remove))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

/// A base URL nothing is listening on
async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

fn seeded(works: Vec<Value>) -> Shared {
    let backend = Backend::default();
    backend
        .records
        .lock()
        .unwrap()
        .insert("works".to_string(), works);
    Arc::new(backend)
}

fn remote(url: &str, strict: bool) -> RemoteSource {
    RemoteSource::new(RemoteConfig::new(url).strict(strict)).unwrap()
}

#[tokio::test]
async fn test_load_maps_backend_ids() {
    let url = spawn_backend(seeded(vec![json!({ "_id": "a", "title": "X" })])).await;
    let mut site = Portfolio::new(remote(&url, false), AdminGate::default(), Profile::default());

    site.load().await.unwrap();
    site.navigate(Page::Works);

    match site.render() {
        View::Works(works) => {
            assert_eq!(works.len(), 1);
            assert_eq!(works[0].id, "a");
            assert_eq!(works[0].title, "X");
        }
        other => panic!("unexpected view: {:?}", other),
    }
    assert!(site.collections().certifications.is_empty());
    assert!(site.collections().blog.is_empty());
}

#[tokio::test]
async fn test_load_is_idempotent() {
    let url = spawn_backend(seeded(vec![
        json!({ "_id": "a", "title": "X" }),
        json!({ "_id": 7, "title": "Y" }),
    ]))
    .await;
    let mut store = PortfolioStore::new(remote(&url, false));

    store.load().await.unwrap();
    let first = store.snapshot();
    store.load().await.unwrap();

    assert_eq!(store.collections(), &first);
    assert_eq!(first.works[1].id, "7");
}

#[tokio::test]
async fn test_add_uses_backend_id() {
    let backend = Arc::new(Backend::default());
    backend.next_id.store(99, Ordering::SeqCst);
    let url = spawn_backend(backend.clone()).await;
    let mut store = PortfolioStore::new(remote(&url, false));
    store.load().await.unwrap();

    let mut fields = Fields::new();
    fields.insert("title".to_string(), "T".to_string());
    fields.insert("date".to_string(), "2025-01-01".to_string());
    fields.insert("slug".to_string(), "t".to_string());
    fields.insert("excerpt".to_string(), "E".to_string());

    let item = store.add(Section::Blog, fields).await.unwrap();
    assert_eq!(item.id(), "99");
    assert_eq!(store.collections().blog.len(), 1);
    assert_eq!(store.collections().blog[0].slug, "t");
    assert_eq!(backend.records.lock().unwrap()["blog"].len(), 1);
}

#[tokio::test]
async fn test_remove_with_backend_down() {
    let collections = Collections::try_from_items([Item::Work(WorkItem {
        id: "a".to_string(),
        title: "X".to_string(),
        ..Default::default()
    })])
    .unwrap();
    let mut store = PortfolioStore::with_collections(remote(&dead_url().await, false), collections);

    let removal = store.remove(Section::Works, "a").await;
    assert_eq!(removal.removed, 1);
    assert!(!removal.confirmed());
    assert!(store.collections().works.is_empty());
}

#[tokio::test]
async fn test_load_with_backend_down_keeps_state() {
    let mut site = Portfolio::new(
        remote(&dead_url().await, false),
        AdminGate::default(),
        Profile::default(),
    );

    assert!(site.load().await.is_err());
    assert!(matches!(site.render(), View::Home { .. }));
    assert!(site.collections().is_empty());
}

#[tokio::test]
async fn test_strict_status_rejects_server_errors() {
    let backend = seeded(vec![json!({ "_id": "a", "title": "X" })]);
    let url = spawn_backend(backend.clone()).await;
    let mut store = PortfolioStore::new(remote(&url, true));
    store.load().await.unwrap();

    backend.failing.store(true, Ordering::SeqCst);
    match store.load().await {
        Err(StoreError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(store.collections().works.len(), 1);

    let removal = store.remove(Section::Works, "a").await;
    assert_eq!(removal.removed, 1);
    assert!(matches!(
        removal.remote_error,
        Some(StoreError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_lenient_delete_ignores_status() {
    let backend = seeded(vec![json!({ "_id": "a", "title": "X" })]);
    let url = spawn_backend(backend.clone()).await;
    let mut store = PortfolioStore::new(remote(&url, false));
    store.load().await.unwrap();

    backend.failing.store(true, Ordering::SeqCst);
    let removal = store.remove(Section::Works, "a").await;
    assert!(removal.confirmed());
    assert!(store.collections().works.is_empty());
}

#[tokio::test]
async fn test_admin_session_against_backend() {
    let backend = Arc::new(Backend::default());
    let url = spawn_backend(backend.clone()).await;
    let mut site = Portfolio::new(remote(&url, false), AdminGate::new("pw"), Profile::default());
    site.load().await.unwrap();

    site.navigate(Page::Admin);
    assert!(matches!(site.render(), View::AdminLogin { error: None }));
    site.login("pw").unwrap();
    site.select_admin_tab(Section::Certifications);

    let mut form = FormState::new(Section::Certifications);
    form.set("name", "CKA").unwrap();
    form.set("issuer", "CNCF").unwrap();
    form.set("date", "2024").unwrap();
    form.set("imageUrl", "https://img/cka.png").unwrap();
    let item = site.submit_form(&mut form).await.unwrap().unwrap();
    assert_eq!(backend.records.lock().unwrap()["certifications"].len(), 1);
    assert_eq!(item.id(), "0");

    match site.render() {
        View::AdminPanel { tab, items, .. } => {
            assert_eq!(tab, Section::Certifications);
            assert_eq!(items, vec![item.clone()]);
        }
        other => panic!("unexpected view: {:?}", other),
    }

    let removal = site.remove(Section::Certifications, item.id()).await.unwrap();
    assert!(removal.confirmed());
    assert!(backend.records.lock().unwrap()["certifications"].is_empty());
}
