/// Mailer — the single point of entry for outbound email.
///
/// Handlers never talk to the relay directly: they build `OutboundEmail`
/// values and hand them to an `Arc<dyn Mailer>` carried in `AppState`.
/// Production uses `SmtpMailer`; tests swap in a recording fake.
use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::debug;

use crate::config::MailCredentials;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid email address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP relay error: {0}")]
    Relay(String),
}

impl MailError {
    /// Short failure class that is safe to show to a caller.
    /// The full error (addresses, relay responses) stays in the server log.
    pub fn details(&self) -> &'static str {
        match self {
            MailError::InvalidAddress { .. } => "Invalid email address",
            MailError::Build(_) => "Message could not be built",
            MailError::Relay(_) => "Mail relay rejected the message",
        }
    }
}

/// One message as handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// The outbound mail relay. Each call is all-or-nothing from the caller's
/// point of view; retries and bounces are the relay's business.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

// ────────────────────────────────────────────────────────────────────────────
// SmtpMailer — authenticated SMTP submission (Gmail by default)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(host: &str, credentials: &MailCredentials) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| MailError::Relay(e.to_string()))?
            .credentials(Credentials::new(
                credentials.user.clone(),
                credentials.pass.clone(),
            ))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Relay(e.to_string()))?;

        debug!(
            "SMTP relay accepted message to {}: code={}",
            email.to,
            response.code()
        );
        Ok(())
    }
}

/// Converts an `OutboundEmail` into a `multipart/alternative` MIME message.
fn build_message(email: &OutboundEmail) -> Result<Message, MailError> {
    Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .map_err(|e| MailError::Build(e.to_string()))
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
