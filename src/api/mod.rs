//! HTTP API module: handlers and router for the proxy surface.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
