mod config;
mod contact;
mod errors;
mod mailer;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::mailer::SmtpMailer;
use crate::routes::build_router;
use crate::state::{AppState, Relay};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Missing credentials are not fatal: the site still serves and the
    // contact endpoint reports the omission per request.
    let relay = match config.mail_credentials() {
        Some(credentials) => {
            let mailer = SmtpMailer::new(&config.smtp_host, &credentials)?;
            info!("SMTP relay initialized (host: {})", config.smtp_host);
            Some(Relay {
                mailer: Arc::new(mailer),
                sender: credentials.user,
            })
        }
        None => {
            warn!("EMAIL_USER/EMAIL_PASS not set; contact submissions will be rejected");
            None
        }
    };

    if let Some(dir) = &config.static_dir {
        info!("Serving static site from {}", dir.display());
    }

    let state = AppState { relay };

    let app = build_router(state, config.static_dir.clone()).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
