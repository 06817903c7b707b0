//! Ping Handler

use axum::Json;
use serde::Serialize;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /api/ping
pub async fn ping() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_reports_package() {
        let Json(health) = ping().await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "newsdesk");
        assert!(!health.version.is_empty());
    }
}
