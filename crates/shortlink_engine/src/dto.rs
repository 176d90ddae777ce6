use serde::{Deserialize, Serialize};

use crate::{FailureKind, ShortenOutcome, SubmitError};

/// Display message used when the service reports a failure without one.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to shorten URL";

/// Outbound wire shape for `POST /shorten`.
///
/// Field names on the wire are the service's camelCase (`originalUrl`,
/// `expiresAt`); an absent expiration serializes as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: String,
    pub expires_at: Option<String>,
}

impl ShortenRequest {
    /// Builds the request from the exact input string. No trimming or
    /// normalization is applied before sending.
    pub fn new(original_url: impl Into<String>, expires_at: Option<String>) -> Self {
        Self {
            original_url: original_url.into(),
            expires_at,
        }
    }
}

/// Inbound wire shape. Every field tolerates absence: an empty JSON object
/// parses to all-`None` rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortenResult {
    pub success: Option<bool>,
    pub short_url: Option<String>,
    pub short_code: Option<String>,
    pub error_message: Option<String>,
}

impl ShortenResult {
    /// Folds the service reply into the submission outcome. A falsy `success`
    /// is a rejection carrying the service's message; a truthy `success`
    /// must carry the short URL.
    pub fn into_outcome(self) -> Result<ShortenOutcome, SubmitError> {
        if self.success != Some(true) {
            let message = self
                .error_message
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(SubmitError::new(FailureKind::Rejected, message));
        }

        match self.short_url {
            Some(short_url) => Ok(ShortenOutcome {
                short_url,
                short_code: self.short_code,
            }),
            // success without a short URL breaks the contract
            None => Err(SubmitError::new(
                FailureKind::Rejected,
                GENERIC_FAILURE_MESSAGE,
            )),
        }
    }
}
