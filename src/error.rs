use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lubricants_contact::ContactError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every contact endpoint response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Validation(#[from] ContactError),

    #[error("Email service not configured")]
    NotConfigured,

    /// Every delivery failure collapses into one message; the detail is logged.
    #[error("Failed to send email")]
    Delivery(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotConfigured => {
                tracing::error!("SMTP credentials not configured");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Delivery(e) => {
                tracing::error!(error = ?e, "Email error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, Json(MessageBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (
                AppError::Validation(ContactError::MissingFields),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Validation(ContactError::MessageTooShort),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::NotConfigured, StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::Delivery(anyhow::anyhow!("535 authentication failed")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_delivery_detail_is_hidden() {
        let error = AppError::Delivery(anyhow::anyhow!("535 authentication failed"));
        assert_eq!(error.to_string(), "Failed to send email");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            AppError::from(ContactError::MissingFields).to_string(),
            "All fields are required"
        );
        assert_eq!(
            AppError::from(ContactError::MessageTooShort).to_string(),
            "Message must be at least 10 characters long"
        );
    }
}
