//! Health check endpoint

use crate::TaskboardServer;
use axum::Json;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

static SERVER_START: OnceLock<Instant> = OnceLock::new();

/// Record the server start time. Called once during startup.
pub fn init() {
    SERVER_START.get_or_init(Instant::now);
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Timestamp of the health check
    pub timestamp: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Version information
    pub version: String,
    /// Database component status
    pub database: ComponentStatus,
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    /// All systems healthy
    Healthy,
    /// System unhealthy
    Unhealthy,
}

/// Individual component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    /// Component status
    pub status: HealthStatus,
    /// Response time in milliseconds
    pub response_time_ms: Option<f64>,
    /// Error message if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check handler: pings the database and reports uptime.
pub async fn health_check(server: Arc<TaskboardServer>) -> Json<HealthResponse> {
    let start = Instant::now();
    let database = match server.storage.ping().await {
        Ok(()) => ComponentStatus {
            status: HealthStatus::Healthy,
            response_time_ms: Some(start.elapsed().as_secs_f64() * 1000.0),
            error: None,
        },
        Err(e) => ComponentStatus {
            status: HealthStatus::Unhealthy,
            response_time_ms: None,
            error: Some(e.to_string()),
        },
    };

    let uptime_seconds = SERVER_START
        .get()
        .map(|start| start.elapsed().as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: database.status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds,
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_health_check_healthy() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path()).await.unwrap();
        let server = Arc::new(TaskboardServer::new(storage));

        init();
        let Json(response) = health_check(server).await;

        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.database.status, HealthStatus::Healthy);
        assert!(response.database.response_time_ms.is_some());
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
