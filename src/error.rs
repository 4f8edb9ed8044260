//! Unified API error handling
//!
//! Provides consistent error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::LoginError;
use crate::forms::SwapFormError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Profile required: {0}")]
    ProfileRequired(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn profile_required() -> Self {
        Self::ProfileRequired(
            "Please create your profile before continuing".to_string(),
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ProfileRequired(_) => StatusCode::PRECONDITION_FAILED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Conflict(_) => "CONFLICT",
            Self::ProfileRequired(_) => "PROFILE_REQUIRED",
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Conflict(msg)
            | Self::ProfileRequired(msg) => msg.clone(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ProfileExists { .. }
            | StoreError::InvalidTransition { .. }
            | StoreError::AlreadyRated
            | StoreError::NotPending(_) => Self::conflict(err.to_string()),
            StoreError::UnknownProfile(_) => Self::not_found(err.to_string()),
            StoreError::SelfSwap => Self::bad_request(err.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<SwapFormError> for ApiError {
    fn from(err: SwapFormError) -> Self {
        match err {
            SwapFormError::ProfileRequired => Self::profile_required(),
            SwapFormError::RecipientNotFound => Self::not_found(err.to_string()),
            SwapFormError::RecipientPrivate => Self::forbidden(err.to_string()),
            SwapFormError::OwnProfile
            | SwapFormError::MissingFields(_)
            | SwapFormError::SkillNotOffered { .. } => Self::bad_request(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            error = %self,
            code = self.error_code(),
            "API error"
        );

        let status = self.status_code();
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SwapStatus;
    use uuid::Uuid;

    #[test]
    fn store_errors_map_to_http_statuses() {
        let exists: ApiError = StoreError::ProfileExists {
            user_id: Uuid::new_v4(),
        }
        .into();
        assert_eq!(exists.status_code(), StatusCode::CONFLICT);

        let unknown: ApiError = StoreError::UnknownProfile(Uuid::new_v4()).into();
        assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);

        let selfish: ApiError = StoreError::SelfSwap.into();
        assert_eq!(selfish.error_code(), "BAD_REQUEST");

        let rated: ApiError = StoreError::AlreadyRated.into();
        assert_eq!(rated.status_code(), StatusCode::CONFLICT);

        let answered: ApiError = StoreError::NotPending(SwapStatus::Accepted).into();
        assert_eq!(answered.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn form_errors_map_to_http_statuses() {
        let required: ApiError = SwapFormError::ProfileRequired.into();
        assert_eq!(required.status_code(), StatusCode::PRECONDITION_FAILED);
        assert_eq!(required.error_code(), "PROFILE_REQUIRED");

        let private: ApiError = SwapFormError::RecipientPrivate.into();
        assert_eq!(private.status_code(), StatusCode::FORBIDDEN);
    }
}
