use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::{self, Next},
    response::Response,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use self::rest::router as rest_router;

pub mod rest;

/// Routes are served both at the root and under `/api`, where serverless
/// platforms mount function handlers.
pub fn build_router() -> Router {
    Router::new()
        .merge(rest_router())
        .nest("/api", rest_router())
        .fallback(not_found)
        .layer(middleware::from_fn(apply_cors_headers))
        .layer(TraceLayer::new_for_http())
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "not_found",
            "details": format!("no route for {}", uri.path()),
        })),
    )
}

/// Browsers reading from a static site need these on every answer, errors included.
async fn apply_cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
