//! HTTP surface of the server: ambient endpoints, module routes and the
//! middleware stack wrapped around them.

use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Request, Response, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tenant_account::TenantAccountModule;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::ServerConfig;

fn request_id_header() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

/// Assemble the full application router.
///
/// Requests pass through the layers outermost first:
/// request id assignment, request id propagation, tracing, timeout, body limit.
pub fn build_router(
    cfg: &ServerConfig,
    module: &TenantAccountModule,
    tenant_header: HeaderName,
) -> Router {
    let openapi = TenantAccountModule::openapi(&tenant_header);

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(|| async { "ok" }))
        .route("/openapi.json", get(move || async move { Json(openapi) }));
    let router = module.register_rest(router, tenant_header);

    // Layers are added innermost first.
    router
        .layer(DefaultBodyLimit::max(cfg.body_limit_bytes))
        .layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(cfg.request_timeout_secs),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    let request_id = req
                        .headers()
                        .get(request_id_header())
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("n/a");
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        request_id = %request_id,
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}
