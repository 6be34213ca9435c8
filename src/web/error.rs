use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::signup_service::SignupError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),
}

/// Error body: `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<SignupError> for ApiError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::ActivityNotFound | SignupError::NotSignedUp => {
                ApiError::NotFound(err.to_string())
            }
            SignupError::AlreadySignedUp => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_errors_map_to_status_codes() {
        assert_eq!(
            ApiError::from(SignupError::ActivityNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(SignupError::NotSignedUp).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(SignupError::AlreadySignedUp).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn detail_keeps_service_message() {
        let err = ApiError::from(SignupError::AlreadySignedUp);
        assert!(err.to_string().to_lowercase().contains("already signed up"));
    }
}
