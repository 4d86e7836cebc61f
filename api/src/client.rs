use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::SubmitError;
use crate::wire::InquiryPayload;

/// Endpoint of the hosted form collector the contact form posts to.
pub const DEFAULT_ENDPOINT: &str = "https://submit-form.com/Js4n9tHHJ";

/// Minimal HTTP seam: POST a JSON body, hand back the status code.
///
/// Network-level failures map to [`SubmitError::Network`]; any status code,
/// including error codes, is returned as `Ok` and judged by the caller.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError>;
}

/// `reqwest`-backed transport. On `wasm32` reqwest rides on the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        Ok(response.status().as_u16())
    }
}

/// Sends inquiries to the form collector. One attempt per call: no retry, no queue.
#[derive(Debug, Clone)]
pub struct InquiryClient<T = HttpTransport> {
    endpoint: String,
    transport: T,
}

impl InquiryClient<HttpTransport> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_transport(endpoint, HttpTransport::default())
    }
}

impl Default for InquiryClient<HttpTransport> {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl<T: Transport> InquiryClient<T> {
    pub fn with_transport(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST the payload once. Any 2xx status counts as accepted.
    pub async fn submit(&self, payload: &InquiryPayload) -> Result<(), SubmitError> {
        let body = payload.to_json()?;
        match self.transport.post_json(&self.endpoint, body).await {
            Ok(status) if (200..300).contains(&status) => {
                tracing::info!(status, endpoint = %self.endpoint, "inquiry accepted");
                Ok(())
            }
            Ok(status) => {
                tracing::warn!(status, endpoint = %self.endpoint, "inquiry rejected");
                Err(SubmitError::Rejected { status })
            }
            Err(err) => {
                tracing::error!(error = %err, endpoint = %self.endpoint, "inquiry not delivered");
                Err(err)
            }
        }
    }
}
