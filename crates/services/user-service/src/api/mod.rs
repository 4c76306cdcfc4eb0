//! HTTP transport - handlers, extractors and routes.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod views;

pub use routes::create_router;
pub use state::AppState;
