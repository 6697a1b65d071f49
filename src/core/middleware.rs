//! HTTP middleware for per-request diagnostic logging.
//!
//! Every request through the router gets a generated request ID and one
//! log line recording method, path, response status, and duration.

use crate::core::logging::{generate_request_id, REQUEST_ID};
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Middleware that logs each request's method, path, and outcome.
///
/// The handler runs inside a [`REQUEST_ID`] scope so any log lines it emits
/// can be correlated with the summary line written here.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let request_id = generate_request_id();
    let start = Instant::now();

    let response = REQUEST_ID
        .scope(request_id.clone(), next.run(request))
        .await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    tracing::info!(
        request_id = %request_id,
        "{} {} - status={} duration={:.3}s",
        method,
        path,
        status,
        duration
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    async fn echo_request_id() -> String {
        crate::core::logging::get_request_id()
    }

    #[tokio::test]
    async fn test_requests_pass_through_with_request_id() {
        let app = Router::new()
            .route("/echo", get(echo_request_id))
            .layer(axum::middleware::from_fn(request_logging_middleware));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/echo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let id = String::from_utf8(bytes.to_vec()).unwrap();
        // Handler observed a scoped UUID request ID
        assert_eq!(id.len(), 36);
    }
}
