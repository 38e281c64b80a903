use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Application configuration loaded from environment variables.
///
/// The mail relay credentials are optional here: a server without them still
/// starts and serves the site, and the contact endpoint reports the omission
/// per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub smtp_host: String,
    pub static_dir: Option<PathBuf>,
}

/// Account identifier and secret for the mail relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub user: String,
    pub pass: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            email_user: optional_env("EMAIL_USER"),
            email_pass: optional_env("EMAIL_PASS"),
            smtp_host: optional_env("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            static_dir: optional_env("STATIC_DIR").map(PathBuf::from),
        })
    }

    /// Returns the relay credentials only when both halves are present.
    pub fn mail_credentials(&self) -> Option<MailCredentials> {
        match (&self.email_user, &self.email_pass) {
            (Some(user), Some(pass)) => Some(MailCredentials {
                user: user.clone(),
                pass: pass.clone(),
            }),
            _ => None,
        }
    }
}

/// Reads `key`, treating an unset or blank variable as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
