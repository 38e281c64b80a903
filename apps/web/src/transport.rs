//! HTTP side of the contact form: one POST of the three fields as JSON.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// Path of the contact endpoint, relative to the site origin.
pub const CONTACT_PATH: &str = "/api/contact";

/// The three form fields, serialized as the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormData {
    /// True when every field has content.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Contact endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Delivers a completed form to the server. Any non-2xx answer is an error.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn submit(&self, form: &ContactFormData) -> Result<(), SubmitError>;
}

/// `ContactTransport` backed by `reqwest`, posting to `{base_url}/api/contact`.
#[derive(Clone)]
pub struct HttpContactTransport {
    client: Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn submit(&self, form: &ContactFormData) -> Result<(), SubmitError> {
        let response = self.client.post(&self.endpoint).json(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
