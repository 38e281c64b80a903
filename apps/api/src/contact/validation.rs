use lettre::message::Mailbox;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::AppError;

/// Same pattern the page uses before posting.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Wire payload of `POST /api/contact`. Every field is optional so that a
/// missing key and an empty string are both reported as a presence failure.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed the presence and syntax checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The page's pattern, plus the mailbox grammar the relay builds messages
/// with. An address the relay cannot parse must fail here, before the owner
/// notification goes out.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email) && email.parse::<Mailbox>().is_ok()
}

/// Presence check followed by email syntax check. First failure wins.
pub fn validate_submission(payload: ContactPayload) -> Result<ContactSubmission, AppError> {
    let (Some(name), Some(email), Some(message)) = (
        non_empty(payload.name),
        non_empty(payload.email),
        non_empty(payload.message),
    ) else {
        return Err(AppError::Validation("All fields are required".to_string()));
    };

    if !is_valid_email(&email) {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }

    Ok(ContactSubmission {
        name,
        email,
        message,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
