//! Contact form relay

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::AppState;

/// Body of `POST /api/contact`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Reply to the contact form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Why a contact request was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is invalid")]
    InvalidEmail,
    #[error("request body is not valid JSON")]
    MalformedBody,
}

/// Mail transport failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to send message: {0}")]
pub struct MailError(pub String);

/// Delivers validated contact messages
pub trait Mailer: Send + Sync {
    fn send(&self, request: &ContactRequest) -> Result<(), MailError>;
}

/// Mailer that records messages in the log instead of sending them
#[derive(Clone, Debug)]
pub struct LogMailer {
    to: String,
}

impl LogMailer {
    pub fn new(to: impl Into<String>) -> Self {
        Self { to: to.into() }
    }
}

impl Mailer for LogMailer {
    fn send(&self, request: &ContactRequest) -> Result<(), MailError> {
        info!(
            to = %self.to,
            from = %request.email,
            name = %request.name,
            subject = request.subject.as_deref().unwrap_or("(none)"),
            chars = request.message.chars().count(),
            "contact message received"
        );
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl ContactRequest {
    /// Check required fields and the email shape
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// `POST /api/contact`
///
/// 400 on validation failure, 500 when the mailer fails, 200 otherwise.
/// Nothing is retried or queued.
pub async fn handle_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(%rejection, "contact request rejected");
            return (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::failed(ContactError::MalformedBody)),
            );
        }
    };

    if let Err(err) = request.validate() {
        warn!(%err, "contact request rejected");
        return (StatusCode::BAD_REQUEST, Json(ContactResponse::failed(err)));
    }

    match state.mailer.send(&request) {
        Ok(()) => (StatusCode::OK, Json(ContactResponse::ok())),
        Err(err) => {
            error!(%err, "contact relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::failed(err)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingMailer;

    impl Mailer for FailingMailer {
        fn send(&self, _request: &ContactRequest) -> Result<(), MailError> {
            Err(MailError("smtp unavailable".to_string()))
        }
    }

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: Some("Hi".to_string()),
            message: "Hello there".to_string(),
        }
    }

    fn log_state() -> State<AppState> {
        State(AppState::new(LogMailer::new("me@example.com")))
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@example."));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_validate_required_fields() {
        assert_eq!(request().validate(), Ok(()));
        let blank_name = ContactRequest {
            name: "   ".to_string(),
            ..request()
        };
        assert_eq!(blank_name.validate(), Err(ContactError::MissingField("name")));
        let no_subject = ContactRequest {
            subject: None,
            ..request()
        };
        assert_eq!(no_subject.validate(), Ok(()));
    }

    #[tokio::test]
    async fn test_valid_request_succeeds() {
        let (status, Json(body)) = handle_contact(log_state(), Ok(Json(request()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ContactResponse::ok());
    }

    #[tokio::test]
    async fn test_blank_message_is_bad_request() {
        let blank = ContactRequest {
            message: String::new(),
            ..request()
        };
        let (status, Json(body)) = handle_contact(log_state(), Ok(Json(blank))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("message is required"));
    }

    #[tokio::test]
    async fn test_bad_email_is_bad_request() {
        let bad = ContactRequest {
            email: "not-an-email".to_string(),
            ..request()
        };
        let (status, Json(body)) = handle_contact(log_state(), Ok(Json(bad))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("email address is invalid"));
    }

    #[tokio::test]
    async fn test_mailer_failure_is_server_error() {
        let state = State(AppState::new(FailingMailer));
        let (status, Json(body)) = handle_contact(state, Ok(Json(request()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.success);
        assert!(body.error.unwrap().contains("smtp unavailable"));
    }

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(ContactResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }
}
