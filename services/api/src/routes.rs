use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use nfdiv_packs::workflows::document_packs::{
    document_pack_router, DocumentGenerator, DocumentPackService, LetterPrinter,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_document_pack_routes<G, P>(
    service: Arc<DocumentPackService<G, P>>,
) -> axum::Router
where
    G: DocumentGenerator + 'static,
    P: LetterPrinter + 'static,
{
    document_pack_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": env!("CARGO_PKG_NAME") }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let label = if ready { "ready" } else { "initializing" };
    let payload = json!({
        "status": label,
        "lettersRegistered": state.letters_registered,
    });

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
