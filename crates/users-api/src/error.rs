use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use users_core::DomainError;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(&'static str),

    #[error("Not found: {0}")]
    NotFound(&'static str),

    /// `message` goes to the client; `source` is only logged.
    #[error("{message}: {source}")]
    DatabaseError {
        message: &'static str,
        #[source]
        source: DomainError,
    },
}

impl ApiError {
    pub fn user_not_found() -> Self {
        ApiError::NotFound("User not found")
    }

    pub fn database(message: &'static str) -> impl FnOnce(DomainError) -> Self {
        move |source| ApiError::DatabaseError { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            },
            ApiError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            },
            ApiError::DatabaseError { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            },
        };

        let body = Json(ErrorBody {
            error: message.to_string(),
        });

        (status, body).into_response()
    }
}
