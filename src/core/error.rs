use crate::mail::MailError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Value>,
}

/// Errore applicativo. Il layer HTTP sceglie lo status dal variant, mai dal messaggio.
#[derive(Debug)]
pub enum AppError {
    /// L'input non rispetta lo schema (UUID, email, URL, lunghezze, JSON malformato)
    Validation { errors: Value },

    /// Errore di dominio causato dal client, es. "Trip not found."
    Client { message: &'static str },

    /// Database o trasporto mail non disponibili. La causa resta nei log, mai nella risposta.
    Infrastructure {
        status: StatusCode,
        message: &'static str,
    },
}

impl AppError {
    pub fn validation(errors: impl Into<Value>) -> Self {
        Self::Validation {
            errors: errors.into(),
        }
    }

    pub fn client(message: &'static str) -> Self {
        Self::Client { message }
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::Infrastructure {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::Infrastructure {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Client { .. } => StatusCode::BAD_REQUEST,
            Self::Infrastructure { status, .. } => *status,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                error!("Database pool unavailable: {}", err);
                Self::service_unavailable("Database unavailable")
            }

            _ => {
                error!("Database error: {}", err);
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation(serde_json::to_value(&err).unwrap_or_default())
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        error!("Mail delivery failed: {}", err);
        Self::internal_server_error("Mail delivery failed")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match self {
            Self::Validation { errors } => ErrorResponse {
                message: "Invalid input.",
                errors: Some(errors),
            },
            Self::Client { message } | Self::Infrastructure { message, .. } => ErrorResponse {
                message,
                errors: None,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> Value {
        let bytes = to_bytes(err.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::client("Trip not found.").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::validation(Value::Null).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(sqlx::Error::PoolTimedOut).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_database_error_text_is_not_exposed() {
        let err = AppError::from(sqlx::Error::Protocol(
            "UNIQUE constraint failed: participants.id".to_string(),
        ));

        let body = body_of(err).await;
        assert_eq!(body, serde_json::json!({ "message": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_mail_error_text_is_not_exposed() {
        let err = AppError::from(MailError::Rejected(StatusCode::BAD_GATEWAY));

        let body = body_of(err).await;
        assert_eq!(body, serde_json::json!({ "message": "Mail delivery failed" }));
    }
}
