use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{post, MethodRouter},
};

use crate::{
    infrastructure::state::AppState,
    services::{errors::ProxyError, jobs::JobsService},
};

pub fn routes() -> MethodRouter {
    post(proxy_openings)
        .options(preflight)
        .fallback(reject_method)
}

async fn proxy_openings(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ProxyError> {
    let service = JobsService::new(state);
    let body = service.fetch_openings().await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn reject_method(method: Method) -> ProxyError {
    ProxyError::MethodNotAllowed(method)
}
