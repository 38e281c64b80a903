use std::sync::Arc;

use crate::mailer::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `EMAIL_USER`/`EMAIL_PASS` are missing; the contact
    /// endpoint then answers 500 without attempting any send.
    pub relay: Option<Relay>,
}

/// A configured mail relay plus the account it sends as.
#[derive(Clone)]
pub struct Relay {
    pub mailer: Arc<dyn Mailer>,
    /// Account identifier, used as the `From` address of every message.
    pub sender: String,
}
