//! HTTP API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::warn;

use crate::error::UpstreamError;
use crate::metrics;
use crate::upstream::{CreateTodo, Todo, TodoClient};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream API client.
    pub client: TodoClient,
    /// Prometheus render handle, present when metrics are enabled.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state around an upstream client.
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            prometheus: None,
        }
    }

    /// Attach a Prometheus render handle for the /metrics endpoint.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}

/// Greeting response for the root endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Fixed greeting text.
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Uniform failure body: the error text under `detail`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Textual description of the failure.
    pub detail: String,
}

/// Handler-boundary error wrapper.
///
/// Every upstream failure, regardless of sub-cause, renders as HTTP 500
/// with the failure text in `detail`. Not-found from the upstream is
/// intentionally not translated to 404.
#[derive(Debug)]
pub struct ApiError(UpstreamError);

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Log and count an upstream failure before handing it to the caller.
fn upstream_failure(endpoint: &'static str, err: UpstreamError) -> ApiError {
    warn!(endpoint, error = %err, "Upstream request failed");
    metrics::inc_upstream_errors(endpoint);
    ApiError(err)
}

/// Root handler - fixed greeting, no failure mode.
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Hello, World!",
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Proxy the full todo collection from the upstream.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    metrics::inc_proxy_requests("list");
    let todos = state
        .client
        .list_todos()
        .await
        .map_err(|e| upstream_failure("list", e))?;
    Ok(Json(todos))
}

/// Proxy a single todo by id. The upstream interprets the id; there is
/// no local existence check.
pub async fn get_todo_by_id(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    metrics::inc_proxy_requests("get");
    let todo = state
        .client
        .get_todo(id)
        .await
        .map_err(|e| upstream_failure("get", e))?;
    Ok(Json(todo))
}

/// Proxy a creation request. The body is schema-validated by the Json
/// extractor (422 on violation) before any outbound call is made.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    metrics::inc_proxy_requests("create");
    let created = state
        .client
        .create_todo(&body)
        .await
        .map_err(|e| upstream_failure("create", e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Render Prometheus metrics, 404 when the exporter is disabled.
pub async fn render_metrics(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn api_error_renders_500_with_detail() {
        let err = ApiError(UpstreamError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "Todo not found".to_string(),
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("Todo not found"));
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let response = root().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Hello, World!"}));
    }
}
