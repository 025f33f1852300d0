//! Unified error types for the todo proxy.

use thiserror::Error;

/// Unified error type for the proxy service.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Upstream API error.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors communicating with or interpreting the upstream todo API.
///
/// All variants surface identically at the handler boundary: HTTP 500
/// with the Display text in a `detail` field. Sub-causes exist for
/// logging, not for the caller.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport-level failure (connection, DNS, timeout).
    #[error("request to upstream failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        /// Status code from the upstream response.
        status: reqwest::StatusCode,
        /// Response body text, best effort.
        body: String,
    },

    /// Upstream body did not match the todo schema.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_body_text() {
        let err = UpstreamError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "Todo not found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("Todo not found"));
    }

    #[test]
    fn decode_error_display() {
        let err = UpstreamError::Decode("missing field `title`".to_string());
        assert_eq!(
            err.to_string(),
            "failed to decode upstream response: missing field `title`"
        );
    }

    #[test]
    fn proxy_error_wraps_upstream() {
        let err = ProxyError::from(UpstreamError::Decode("bad shape".to_string()));
        assert!(err.to_string().starts_with("upstream error:"));
    }
}
