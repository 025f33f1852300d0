//! Upstream todo API integration.
//!
//! This module handles:
//! - The todo wire schema
//! - The reqwest-based client for the remote collection API

pub mod client;
pub mod types;

pub use client::TodoClient;
pub use types::{CreateTodo, Todo};
