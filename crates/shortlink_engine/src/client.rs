use async_trait::async_trait;

use crate::{FailureKind, ShortenRequest, ShortenResult, SubmitError, GENERIC_FAILURE_MESSAGE};

/// Transport abstraction over the shortening service.
#[async_trait]
pub trait ShortenClient: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestShortenClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestShortenClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/shorten", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ShortenClient for ReqwestShortenClient {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, SubmitError> {
        // Exactly one request per call: no retries, no client-side timeout
        // beyond what reqwest imposes.
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status_display_message(status),
            ));
        }

        response
            .json::<ShortenResult>()
            .await
            .map_err(|err| SubmitError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

/// Display text for a non-2xx reply: the reason phrase of the status code,
/// or the generic message for codes that have none.
fn status_display_message(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) if !reason.is_empty() => reason.to_string(),
        _ => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}
