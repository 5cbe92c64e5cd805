//! Service health endpoint

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;

// Static variable to track service start time
static START_TIME: AtomicU64 = AtomicU64::new(0);

/// Record the service start time for uptime reporting
pub fn mark_started() {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    START_TIME.store(now, Ordering::Relaxed);
}

fn uptime_seconds() -> u64 {
    let started = START_TIME.load(Ordering::Relaxed);
    if started == 0 {
        return 0;
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    now.saturating_sub(started)
}

/// Health check endpoint
///
/// The service is stateless, so there is nothing deeper to probe than the
/// process itself.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status")
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}
