//! HTTP proxy service for a remote todo REST API.
//!
//! The service exposes a small CRUD-style surface (`/todos`,
//! `/todos/{id}`, `POST /todos`) and forwards each request to a remote
//! collection-resource API, decoding responses through a strict schema.
//! Upstream transport failures are folded into a uniform 500 response
//! carrying the failure text in a `detail` field.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`upstream`]: Todo schema and the remote API client
//! - [`api`]: HTTP handlers and router
//! - [`metrics`]: Prometheus metrics helpers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod upstream;
pub mod utils;

pub use config::Config;
pub use error::{ProxyError, Result};
