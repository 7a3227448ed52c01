use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use planner::{
    config::AppConfig,
    db::{init_pool, run_migrations},
    routes::create_router,
    services::notifier::LogNotifier,
    state::AppState,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _root: TempDir,
}

/// Router backed by a fresh SQLite file in a temp dir.
pub async fn create_test_app() -> TestApp {
    let root = TempDir::new().expect("temp dir");
    let db_path = root.path().join("api.sqlite");
    let config = AppConfig {
        database_url: format!("sqlite://{}", db_path.to_string_lossy()),
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        max_connections: 4,
    };
    let db = init_pool(&config.database_url, config.max_connections)
        .await
        .expect("pool");
    run_migrations(&db).await.expect("migrations");

    let state = AppState::new(config, db, Arc::new(LogNotifier::new()));
    let router = create_router(state.clone());
    TestApp {
        router,
        state,
        _root: root,
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json response body")
        };
        (status, value)
    }
}
