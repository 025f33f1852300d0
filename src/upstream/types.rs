//! Wire schema for the upstream todo collection API.

use serde::{Deserialize, Serialize};

/// One remote todo item.
///
/// Decoding is strict: a response missing any field, or carrying a
/// wrong type, fails decode and surfaces as an upstream error rather
/// than passing through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Owner identifier (opaque, not validated beyond type).
    pub user_id: i64,
    /// Unique identifier assigned by the upstream system.
    pub id: i64,
    /// Free text title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
}

/// Client-supplied payload for creation. The upstream assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    /// Owner identifier.
    pub user_id: i64,
    /// Free text title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
}
