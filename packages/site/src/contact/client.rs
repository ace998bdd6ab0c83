//! HTTP client for the external form backend

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

use super::encode::{encode_submission, FORM_CONTENT_TYPE};
use super::form::FormState;

/// Error type for contact submissions
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Invalid form endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Form backend returned {0}")]
    Status(StatusCode),
}

/// Client that delivers contact submissions to the form backend
#[derive(Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ContactClient {
    /// Create a client posting to `endpoint`, giving up after `timeout`
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the submission. Only a 2xx answer counts as delivered; the
    /// response body is ignored.
    pub async fn submit(&self, form: &FormState) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(encode_submission(form))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, %status, "Form backend rejected submission");
            return Err(SubmitError::Status(status));
        }

        tracing::info!(endpoint = %self.endpoint, "Contact submission delivered");
        Ok(())
    }
}
