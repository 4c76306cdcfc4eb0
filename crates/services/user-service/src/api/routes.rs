//! Route configuration.

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::handlers::{index_routes, user_routes};
use crate::api::openapi::ApiDoc;
use crate::api::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Server-rendered listing and form
        .merge(index_routes())
        // JSON API
        .nest("/users", user_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
