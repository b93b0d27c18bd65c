use axum::{routing::get, Router};

pub mod health;
pub mod jobs;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health::healthcheck))
        .route("/jobs", jobs::routes())
}
