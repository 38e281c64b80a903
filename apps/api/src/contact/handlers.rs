use axum::{extract::State, http::Method, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::contact::templates::{acknowledgment_email, notification_email};
use crate::contact::validation::{validate_submission, ContactPayload};
use crate::errors::AppError;
use crate::mailer::{MailError, Mailer, OutboundEmail};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// ANY /api/contact
///
/// Stages run in order and stop at the first failure:
/// method → presence → email syntax → relay configured → dispatch.
#[tracing::instrument(skip_all, fields(submission_id = %Uuid::new_v4()))]
pub async fn handle_contact(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let submission = validate_submission(parse_payload(&body)?)?;

    let relay = state.relay.as_ref().ok_or(AppError::MailNotConfigured)?;

    let emails = [
        notification_email(&relay.sender, &submission),
        acknowledgment_email(&relay.sender, &submission),
    ];
    send_all(relay.mailer.as_ref(), &emails).await?;

    info!("Contact submission delivered");
    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully!".to_string(),
    }))
}

/// An empty body is treated as a payload with every field missing.
fn parse_payload(body: &[u8]) -> Result<ContactPayload, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContactPayload::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        debug!("Rejecting unparseable contact payload: {e}");
        AppError::Validation("Invalid request body".to_string())
    })
}

/// Sends sequentially; the first failure aborts the rest and is reported as
/// a failure of the whole submission.
async fn send_all(mailer: &dyn Mailer, emails: &[OutboundEmail]) -> Result<(), MailError> {
    for email in emails {
        mailer.send(email).await?;
        debug!("Sent \"{}\" to {}", email.subject, email.to);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::contact::templates::OWNER_EMAIL;
    use crate::routes::build_router;
    use crate::state::Relay;

    /// Records every send attempt; fails the attempt at `fail_on` (0-based).
    #[derive(Default)]
    struct RecordingMailer {
        attempts: Mutex<Vec<OutboundEmail>>,
        fail_on: Option<usize>,
    }

    impl RecordingMailer {
        fn failing_on(call: usize) -> Self {
            Self {
                fail_on: Some(call),
                ..Default::default()
            }
        }

        fn attempts(&self) -> Vec<OutboundEmail> {
            self.attempts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
            let mut attempts = self.attempts.lock().unwrap();
            let call = attempts.len();
            attempts.push(email.clone());
            if self.fail_on == Some(call) {
                return Err(MailError::Relay("421 service not available".to_string()));
            }
            Ok(())
        }
    }

    fn app(mailer: Option<Arc<RecordingMailer>>) -> Router {
        let relay = mailer.map(|mailer| Relay {
            mailer,
            sender: "relay@gmail.com".to_string(),
        });
        build_router(AppState { relay }, None)
    }

    async fn call(app: Router, method: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_body() -> String {
        json!({ "name": "Jane Doe", "email": "jane@example.com", "message": "Hello" }).to_string()
    }

    #[tokio::test]
    async fn test_valid_submission_sends_two_emails() {
        let mailer = Arc::new(RecordingMailer::default());
        let (status, body) = call(app(Some(mailer.clone())), "POST", &valid_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": true, "message": "Message sent successfully!" })
        );

        let attempts = mailer.attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].to, OWNER_EMAIL);
        assert_eq!(attempts[1].to, "jane@example.com");
        assert!(attempts.iter().all(|e| e.from == "relay@gmail.com"));
    }

    #[tokio::test]
    async fn test_non_post_is_405() {
        for method in ["GET", "PUT", "DELETE", "PATCH"] {
            let mailer = Arc::new(RecordingMailer::default());
            let (status, body) = call(app(Some(mailer.clone())), method, &valid_body()).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
            assert_eq!(body, json!({ "error": "Method not allowed" }));
            assert!(mailer.attempts().is_empty());
        }
    }

    #[tokio::test]
    async fn test_missing_fields_are_400_without_sending() {
        let bodies = [
            json!({ "email": "jane@example.com", "message": "Hello" }),
            json!({ "name": "Jane Doe", "message": "Hello" }),
            json!({ "name": "Jane Doe", "email": "jane@example.com" }),
            json!({ "name": "", "email": "jane@example.com", "message": "Hello" }),
            json!({}),
        ];
        for body in bodies {
            let mailer = Arc::new(RecordingMailer::default());
            let (status, resp) = call(app(Some(mailer.clone())), "POST", &body.to_string()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(resp["error"], "All fields are required");
            assert!(mailer.attempts().is_empty());
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_400() {
        let (status, resp) = call(app(None), "POST", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["error"], "All fields are required");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (status, resp) = call(app(None), "POST", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_invalid_email_is_400() {
        for email in ["foo", "a@b", "a@b.c "] {
            let mailer = Arc::new(RecordingMailer::default());
            let body = json!({ "name": "Jane", "email": email, "message": "Hello" });
            let (status, resp) = call(app(Some(mailer.clone())), "POST", &body.to_string()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{email:?}");
            assert_eq!(resp["error"], "Invalid email address");
            assert!(mailer.attempts().is_empty());
        }
    }

    #[tokio::test]
    async fn test_unparseable_mailbox_is_400_before_any_send() {
        let mailer = Arc::new(RecordingMailer::default());
        let body = json!({ "name": "Jane", "email": "a\"b@c.d", "message": "Hello" });
        let (status, resp) = call(app(Some(mailer.clone())), "POST", &body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["error"], "Invalid email address");
        assert!(mailer.attempts().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_relay_is_500() {
        let (status, resp) = call(app(None), "POST", &valid_body()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp,
            json!({
                "error": "Email service not configured. Please contact the administrator.",
                "details": "Missing environment variables"
            })
        );
    }

    #[tokio::test]
    async fn test_second_send_failure_is_total_failure() {
        let mailer = Arc::new(RecordingMailer::failing_on(1));
        let (status, resp) = call(app(Some(mailer.clone())), "POST", &valid_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp["error"], "Failed to send message. Please try again later.");
        assert!(resp.get("success").is_none());
        assert_eq!(mailer.attempts().len(), 2);
    }

    #[tokio::test]
    async fn test_first_send_failure_skips_acknowledgment() {
        let mailer = Arc::new(RecordingMailer::failing_on(0));
        let (status, _) = call(app(Some(mailer.clone())), "POST", &valid_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let attempts = mailer.attempts();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].to, OWNER_EMAIL);
    }
}
