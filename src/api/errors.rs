use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

/// Messages per wire field name. Sorted so responses are stable.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload parsed as JSON but one or more fields failed validation.
    #[error("invalid payload: {0:?}")]
    Validation(FieldErrors),

    /// Body is not JSON, or was sent without a JSON content type.
    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
}

impl ApiError {
    pub fn field(name: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(name.to_owned(), vec![message.to_owned()]);
        Self::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                debug!(?errors, "Rejected request payload");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            Self::MalformedBody(rejection) => {
                debug!(error = %rejection, "Rejected request body");
                let status = rejection.status();
                let body = Json(json!({ "detail": rejection.body_text() }));
                (status, body).into_response()
            }
            Self::StorageUnavailable(e) => {
                error!(error = %e, "Storage operation failed");
                let body = Json(json!({ "detail": "A server error occurred." }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
