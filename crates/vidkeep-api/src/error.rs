//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Validation failures render as
//! `400 {"errorsMessages": [...]}` and missing resources as a bare `404`.

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use vidkeep_core::{AppError, ErrorMetadata, FieldError, ValidationErrors};

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rule: both the trait and AppError are foreign to this crate).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Unreadable bodies count as a validation failure on the `body` field.
impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        HttpAppError(AppError::Validation(vec![FieldError::new(
            "body",
            format!("Invalid request body: {}", rejection.body_text()),
        )]))
    }
}

/// JSON body extractor that reports deserialization failures in the validation error shape.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = self.0;
        // Both kinds are client errors; keep them out of the default log level.
        tracing::debug!(
            error = %app_error,
            error_code = app_error.error_code(),
            "Request rejected"
        );

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::BAD_REQUEST);

        match app_error {
            AppError::Validation(errors) => {
                (status, Json(ValidationErrors::from(errors))).into_response()
            }
            AppError::NotFound(_) => status.into_response(),
        }
    }
}
