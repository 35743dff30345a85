use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::FareError;

/// Central error type for the service handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fare(#[from] FareError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Fare(err) => fare_status(err),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn fare_status(err: &FareError) -> StatusCode {
    match err {
        FareError::InvalidCredentials | FareError::InvalidToken => StatusCode::UNAUTHORIZED,
        FareError::DuplicateMembership { .. }
        | FareError::NotInRoster { .. }
        | FareError::InvalidRate { .. } => StatusCode::BAD_REQUEST,
        FareError::NoDriversAvailable => StatusCode::NOT_FOUND,
        FareError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "request failed");
                "Internal server error".to_string()
            }
            other => {
                tracing::warn!(status = status.as_u16(), error = %other, "request rejected");
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
