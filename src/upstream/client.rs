//! Reqwest client for the upstream todo API.

use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::UpstreamError;
use crate::metrics;

use super::types::{CreateTodo, Todo};

/// Client for the upstream todo collection API.
///
/// Holds a pooled reqwest client and the collection base URL. One
/// outbound call per operation, no retries.
#[derive(Debug, Clone)]
pub struct TodoClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Collection base URL (no trailing slash).
    base_url: String,
}

impl TodoClient {
    /// Create a new client from config with tuned HTTP settings.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            // Configurable request timeout
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            // Fast connection establishment
            .connect_timeout(std::time::Duration::from_millis(2_000))
            // TCP_NODELAY (disable Nagle's algorithm)
            .tcp_nodelay(true)
            // Keep connections alive for reuse
            .tcp_keepalive(std::time::Duration::from_secs(30))
            // Connection pool per host
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.upstream_base().to_string(),
        }
    }

    /// Get the HTTP client reference.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Get the upstream base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single item in the collection.
    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch the whole todo collection.
    #[instrument(skip(self))]
    pub async fn list_todos(&self) -> Result<Vec<Todo>, UpstreamError> {
        let start = Instant::now();
        let response = self.http.get(&self.base_url).send().await;
        metrics::record_upstream_latency(start, "list");

        let todos: Vec<Todo> = Self::decode(response?).await?;
        debug!(count = todos.len(), "Fetched todo list from upstream");
        Ok(todos)
    }

    /// Fetch a single todo by its upstream id.
    #[instrument(skip(self))]
    pub async fn get_todo(&self, id: u64) -> Result<Todo, UpstreamError> {
        let start = Instant::now();
        let response = self.http.get(self.item_url(id)).send().await;
        metrics::record_upstream_latency(start, "get");

        let todo: Todo = Self::decode(response?).await?;
        debug!(id = todo.id, "Fetched todo from upstream");
        Ok(todo)
    }

    /// Create a todo. The upstream assigns and returns the new `id`.
    #[instrument(skip(self, todo), fields(title = %todo.title))]
    pub async fn create_todo(&self, todo: &CreateTodo) -> Result<Todo, UpstreamError> {
        let start = Instant::now();
        let response = self.http.post(&self.base_url).json(todo).send().await;
        metrics::record_upstream_latency(start, "create");

        let created: Todo = Self::decode(response?).await?;
        debug!(id = created.id, "Created todo at upstream");
        Ok(created)
    }

    /// Check the response status and decode the body through the schema.
    ///
    /// Non-2xx responses are read for their body text so the caller's
    /// `detail` carries the upstream's own message.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(upstream_url: &str) -> Config {
        Config {
            upstream_url: upstream_url.to_string(),
            http_timeout_ms: 2_000,
            http_pool_size: 10,
            port: 8080,
            rust_log: "info".to_string(),
            verbose: false,
            metrics_enabled: false,
        }
    }

    #[test]
    fn client_creation_works() {
        let client = TodoClient::new(&test_config("https://jsonplaceholder.typicode.com/todos"));
        assert_eq!(
            client.base_url(),
            "https://jsonplaceholder.typicode.com/todos"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = TodoClient::new(&test_config("https://example.com/todos/"));
        assert_eq!(client.base_url(), "https://example.com/todos");
        assert_eq!(client.item_url(7), "https://example.com/todos/7");
    }
}
