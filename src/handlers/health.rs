use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use prometheus::{Encoder, TextEncoder};

use crate::state::AppState;

// health handler
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "uptime_secs": state.started_at.elapsed().as_secs(),
        "tracked_clients": state.history.tracked_clients(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// prometheus text exposition
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            String::from_utf8(buffer).unwrap_or_default(),
        ),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode prometheus metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("content-type", "text/plain; charset=utf-8")],
                format!("failed to encode metrics: {e}"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{FakeGenerator, body_json, get, post_json, test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_tracked_clients() {
        let (app, _) = test_app(FakeGenerator::replying("ok"));

        app.clone()
            .oneshot(post_json("/chat", Some("3.3.3.3"), json!({"message": "m"})))
            .await
            .unwrap();

        let res = app.oneshot(get("/health", None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tracked_clients"], 1);
    }

    #[tokio::test]
    async fn metrics_exposes_admission_counters() {
        let (app, _) = test_app(FakeGenerator::replying("ok"));

        app.clone()
            .oneshot(post_json("/chat", Some("4.4.4.4"), json!({"message": "m"})))
            .await
            .unwrap();

        let res = app.oneshot(get("/metrics", None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("chatty_admitted_total"));
    }
}
