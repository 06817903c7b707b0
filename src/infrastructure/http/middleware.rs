//! HTTP Middleware
//!
//! 按状态码分级记录请求日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 错误响应日志中间件
///
/// 4xx 记 warn，5xx 记 error；错误原因由 ApiError::into_response() 记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    use crate::infrastructure::http::error::ApiError;

    async fn found() -> &'static str {
        "found"
    }

    async fn malformed() -> Result<&'static str, ApiError> {
        Err(ApiError::MalformedIdentifier("Invalid uuid".to_string()))
    }

    async fn broken() -> Result<&'static str, ApiError> {
        Err(ApiError::Internal("connection reset".to_string()))
    }

    fn router() -> Router {
        Router::new()
            .route("/found", get(found))
            .route("/malformed", get(malformed))
            .route("/broken", get(broken))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_responses_through() {
        assert_eq!(status_of("/found").await, StatusCode::OK);
        assert_eq!(status_of("/malformed").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/broken").await, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_of("/missing").await, StatusCode::NOT_FOUND);
    }
}
