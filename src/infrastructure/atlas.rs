use anyhow::Context;
use async_trait::async_trait;
use axum::http::{header, StatusCode};
use bytes::Bytes;
use tracing::debug;

use crate::domain::query::{job_openings_body, ATLAS_API_URL};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Raw upstream answer; classification happens in the service layer.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

#[async_trait]
pub trait JobBoard: Send + Sync {
    async fn fetch_openings(&self) -> anyhow::Result<UpstreamReply>;
}

#[derive(Debug, Clone)]
pub struct AtlasClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AtlasClient {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_endpoint(ATLAS_API_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build Atlas HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl JobBoard for AtlasClient {
    async fn fetch_openings(&self) -> anyhow::Result<UpstreamReply> {
        debug!(endpoint = %self.endpoint, "requesting public job openings");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(job_openings_body())
            .send()
            .await
            .context("request to Atlas API failed")?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("failed to read Atlas API response body")?;

        Ok(UpstreamReply { status, body })
    }
}
