use crate::{
    domain::{AmountError, AmountOverflow, InvalidTransition, RangeExceeded, TicketRangeError},
    repository,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jwt_auth::error::MissingRoleError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("validation error: {0}")]
    TicketRange(#[from] TicketRangeError),

    #[error("validation error: {0}")]
    Amount(#[from] AmountError),

    #[error("{0}")]
    AmountOverflow(#[from] AmountOverflow),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account locked")]
    AccountLocked,

    #[error("session expired")]
    SessionExpired,

    #[error("auth error: {0}")]
    Auth(#[from] MissingRoleError),

    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    #[error("user not exist")]
    UserNotExist,

    #[error("customer not exist")]
    CustomerNotExist,

    #[error("ticket not exist")]
    TicketNotExist,

    #[error("username already taken")]
    UsernameTaken,

    #[error("customer phone already registered")]
    CustomerPhoneTaken,

    #[error("ticket number range overlaps range of another user")]
    TicketRangeOverlap,

    #[error("{0}")]
    TicketRangeExceeded(#[from] RangeExceeded),

    #[error("ticket number allocation failed: too many concurrent requests")]
    TicketNumberContention,

    #[error("ticket number already used")]
    TicketNumberTaken,

    #[error("invalid status transition: {0}")]
    InvalidTransition(#[from] InvalidTransition),

    #[error("ticket status changed concurrently")]
    TicketStatusChanged,

    #[error("upload not exist")]
    UploadNotExist,

    #[error("unsupported upload: {0}")]
    UnsupportedUpload(&'static str),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status = match self {
            Error::Validation(_)
            | Error::TicketRange(_)
            | Error::Amount(_)
            | Error::AmountOverflow(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidCredentials | Error::SessionExpired => StatusCode::UNAUTHORIZED,
            Error::AccountLocked => StatusCode::LOCKED,
            Error::Auth(_) | Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::UserNotExist
            | Error::CustomerNotExist
            | Error::TicketNotExist
            | Error::UploadNotExist => StatusCode::NOT_FOUND,
            Error::UsernameTaken
            | Error::CustomerPhoneTaken
            | Error::TicketRangeOverlap
            | Error::TicketRangeExceeded(_)
            | Error::TicketNumberContention
            | Error::TicketNumberTaken
            | Error::InvalidTransition(_)
            | Error::TicketStatusChanged => StatusCode::CONFLICT,
            Error::UnsupportedUpload(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::Database(_) | Error::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // internal details stay in logs
        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn response_parts(err: Error) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice::<Value>(&body).unwrap();

        (status, body["error"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn range_exceeded_is_conflict_with_message() {
        let (status, message) =
            response_parts(Error::TicketRangeExceeded(RangeExceeded { next: 1003, end: 1002 }))
                .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(message.contains("range exceeded"));
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let (status, message) =
            response_parts(Error::Database(repository::Error::NoDocumentUpdated)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "internal server error");
    }

    #[tokio::test]
    async fn amount_overflow_is_unprocessable() {
        let (status, message) = response_parts(Error::AmountOverflow(AmountOverflow)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(message, "amount total out of range");
    }

    #[tokio::test]
    async fn locked_account() {
        let (status, _) = response_parts(Error::AccountLocked).await;

        assert_eq!(status, StatusCode::LOCKED);
    }
}
