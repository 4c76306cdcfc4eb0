//! HTTP request handlers.

pub mod index_handler;
pub mod user_handler;

pub use index_handler::index_routes;
pub use user_handler::user_routes;
