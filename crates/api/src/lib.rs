//! HTTP greeting service with observability.
//!
//! Serves a fixed JSON greeting on `/`, plus `/health` for container probes
//! and `/metrics` for Prometheus scraping. Requests are traced through
//! `tower-http`.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::greeting::home))
        .route("/health", get(routes::health::check))
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
