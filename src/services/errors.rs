use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Upper bound on upstream diagnostic text relayed to callers, in characters.
pub const MAX_DETAIL_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method Not Allowed. Use POST.")]
    MethodNotAllowed(Method),
    #[error("Atlas API HTTP Error: {status}")]
    Upstream { status: StatusCode, body: String },
    #[error("Internal Server Error: Failed to connect to the Atlas API.")]
    Transport(String),
}

impl ProxyError {
    pub fn upstream(status: StatusCode, body: &str) -> Self {
        ProxyError::Upstream {
            status,
            body: truncate_detail(body),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        ProxyError::Transport(truncate_detail(&err.to_string()))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::Upstream { status, .. }
                if status.is_client_error() || status.is_server_error() =>
            {
                *status
            }
            ProxyError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn details(&self) -> String {
        match self {
            ProxyError::MethodNotAllowed(method) => {
                format!("{method} requests are not supported on this endpoint")
            }
            ProxyError::Upstream { body, .. } => body.clone(),
            ProxyError::Transport(detail) => detail.clone(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "details": self.details(),
        }));

        match self {
            ProxyError::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                body,
            )
                .into_response(),
            other => (other.status_code(), body).into_response(),
        }
    }
}

pub fn truncate_detail(text: &str) -> String {
    text.chars().take(MAX_DETAIL_CHARS).collect()
}
