pub mod todos;

use std::path::Path;

use axum::{http::StatusCode, middleware::from_fn, routing::get, Json, Router};
use tower::{Layer, ServiceBuilder};
use tower_http::{normalize_path::NormalizePathLayer, services::ServeDir, trace::TraceLayer};

use super::{logging::log_request, types::ApiResponse};

pub const API_PREFIX: &str = "/api/v1";

/// Mounts the todo routes and health check under `/api/v1`; anything else is served from `static_dir`.
/// API paths match with or without a trailing slash.
pub fn app(router: Router, static_dir: impl AsRef<Path>) -> Router {
    let api = Router::new().route("/health", get(health)).merge(router);
    Router::new()
        .nest_service(API_PREFIX, NormalizePathLayer::trim_trailing_slash().layer(api))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(log_request))
                .layer(TraceLayer::new_for_http()),
        )
}

async fn health() -> (StatusCode, Json<ApiResponse>) {
    (StatusCode::OK, Json(ApiResponse::ok("Server is Healthy")))
}
