use std::sync::Arc;

use bytes::Bytes;
use serde::de::IgnoredAny;
use tracing::{error, warn};

use crate::infrastructure::state::AppState;

use super::errors::ProxyError;

pub struct JobsService {
    pub state: Arc<AppState>,
}

impl JobsService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Makes a single upstream attempt and returns the JSON body to relay.
    pub async fn fetch_openings(&self) -> Result<Bytes, ProxyError> {
        let reply = self
            .state
            .job_board
            .fetch_openings()
            .await
            .map_err(|err| {
                let detail = format!("{err:#}");
                error!(error = %detail, "proxy fetch error");
                ProxyError::transport(detail)
            })?;

        if !reply.status.is_success() {
            let text = String::from_utf8_lossy(&reply.body);
            let err = ProxyError::upstream(reply.status, &text);
            warn!(
                status = %reply.status,
                body = %err.details(),
                "atlas api returned an error status"
            );
            return Err(err);
        }

        if let Err(err) = serde_json::from_slice::<IgnoredAny>(&reply.body) {
            error!(error = %err, "atlas api returned a body that is not JSON");
            return Err(ProxyError::transport(err));
        }

        Ok(reply.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{
        atlas::{JobBoard, UpstreamReply},
        config::Config,
    };
    use async_trait::async_trait;
    use axum::http::StatusCode;

    struct CannedBoard(StatusCode, &'static str);

    #[async_trait]
    impl JobBoard for CannedBoard {
        async fn fetch_openings(&self) -> anyhow::Result<UpstreamReply> {
            Ok(UpstreamReply {
                status: self.0,
                body: Bytes::from_static(self.1.as_bytes()),
            })
        }
    }

    struct UnreachableBoard;

    #[async_trait]
    impl JobBoard for UnreachableBoard {
        async fn fetch_openings(&self) -> anyhow::Result<UpstreamReply> {
            anyhow::bail!("connection refused")
        }
    }

    fn service(board: impl JobBoard + 'static) -> JobsService {
        let state = AppState::new(Arc::new(Config::default()), Arc::new(board));
        JobsService::new(Arc::new(state))
    }

    #[tokio::test]
    async fn relays_successful_body_untouched() {
        let body = r#"{"data":{"publicJobOpenings":{"items":[]}}}"#;
        let result = service(CannedBoard(StatusCode::OK, body))
            .fetch_openings()
            .await
            .expect("expected upstream body");

        assert_eq!(result, Bytes::from_static(body.as_bytes()));
    }

    #[tokio::test]
    async fn non_json_success_is_a_transport_error() {
        let err = service(CannedBoard(StatusCode::OK, "<html>"))
            .fetch_openings()
            .await
            .expect_err("expected parse failure");

        assert!(matches!(err, ProxyError::Transport(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn upstream_failure_status_is_relayed() {
        let err = service(CannedBoard(StatusCode::BAD_REQUEST, "bad query"))
            .fetch_openings()
            .await
            .expect_err("expected upstream error");

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.details(), "bad query");
    }

    #[tokio::test]
    async fn transport_failure_keeps_cause_in_details() {
        let err = service(UnreachableBoard)
            .fetch_openings()
            .await
            .expect_err("expected transport error");

        assert!(matches!(err, ProxyError::Transport(_)));
        assert_eq!(err.details(), "connection refused");
    }
}
