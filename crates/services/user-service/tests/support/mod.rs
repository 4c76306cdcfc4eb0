//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use tempfile::TempDir;

use common::DatabaseConfig;
use user_service_lib::api::{create_router, AppState};
use user_service_lib::infra::Database;
use user_service_lib::repository::{UserRepository, UserStore};

/// Fresh in-memory database with migrations applied.
pub async fn create_test_database() -> Database {
    Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database should connect")
}

/// File-backed database with a multi-connection pool, for tests that need
/// writes to really overlap. The database lives as long as `dir`.
pub async fn create_file_database(dir: &TempDir) -> Database {
    let path = dir.path().join("users.db");
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 4,
        min_connections: 1,
    };

    Database::connect(&config)
        .await
        .expect("file database should connect")
}

/// Store and router sharing one fresh database.
pub async fn create_test_app() -> (Router, Arc<dyn UserRepository>) {
    let db = create_test_database().await;
    let repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.get_connection()));
    let app = create_router(AppState::from_connection(db.get_connection()));
    (app, repo)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(body: Body) -> Value {
    serde_json::from_str(&body_string(body).await).unwrap()
}
