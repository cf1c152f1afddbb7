use async_trait::async_trait;
use shared_types::{FormDraft, HealthReport, SubmitResponse};

use super::error::{Result, TransportError};

/// What a submission endpoint answered: its status and optional message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReply {
    pub status: u16,
    pub message: Option<String>,
}

impl SubmitReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network side of the submitter. Futures are not `Send` so the same trait
/// backs the browser fetch client.
#[async_trait(?Send)]
pub trait SubmissionTransport {
    async fn probe_health(&self, url: &str) -> Result<HealthReport>;

    async fn post_draft(&self, url: &str, draft: &FormDraft) -> Result<SubmitReply>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl SubmissionTransport for HttpTransport {
    async fn probe_health(&self, url: &str) -> Result<HealthReport> {
        let response = self.client.get(url).send().await?;
        // The status code is not consulted; only the reported status counts.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| TransportError::Malformed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn post_draft(&self, url: &str, draft: &FormDraft) -> Result<SubmitReply> {
        let response = self.client.post(url).json(draft).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let parsed: SubmitResponse =
            serde_json::from_str(&body).map_err(|e| TransportError::Malformed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(SubmitReply {
            status,
            message: parsed.message,
        })
    }
}
