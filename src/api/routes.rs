//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_todo, get_todo_by_id, health, list_todos, render_metrics, root, AppState,
};

/// Create the API router.
///
/// `POST /todos/` is kept as an alias of `POST /todos` for route
/// compatibility with existing clients of the original service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        // Proxy endpoints
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/", post(create_todo))
        .route("/todos/:id", get(get_todo_by_id))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::upstream::TodoClient;

    fn test_state() -> AppState {
        let config = Config {
            upstream_url: "http://127.0.0.1:1/todos".to_string(),
            http_timeout_ms: 1_000,
            http_pool_size: 1,
            port: 8080,
            rust_log: "info".to_string(),
            verbose: false,
            metrics_enabled: false,
        };
        AppState::new(TodoClient::new(&config))
    }

    #[tokio::test]
    async fn root_endpoint_returns_ok() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_endpoint_is_404_when_disabled() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/not-a-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
