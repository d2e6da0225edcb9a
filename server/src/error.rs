use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors of the HTTP surface. Rendered as `{"detail": ...}` with a matching status code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Body(#[from] JsonRejection),
    #[error(transparent)]
    Analysis(#[from] lemmastat::Error),
    #[error("analysis did not finish in time")]
    Timeout,
    #[error("internal error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Analysis(lemmastat::Error::TextTooLarge { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Analysis(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Body(rejection) => rejection.body_text(),
            ApiError::Analysis(error @ lemmastat::Error::TextTooLarge { .. }) => error.to_string(),
            // internals are logged, not exposed
            ApiError::Analysis(_) | ApiError::Internal => ApiError::Internal.to_string(),
            ApiError::Timeout => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("request failed: {}", self);
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
