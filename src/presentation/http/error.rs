//! `ServiceError` to HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::errors::ServiceError;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

const fn status_of(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        ServiceError::Forbidden { .. } => StatusCode::FORBIDDEN,
        ServiceError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        ServiceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = status_of(&self);
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => error!(error = %self, "Request failed"),
            StatusCode::BAD_GATEWAY => warn!(error = %self, "Upstream unavailable"),
            _ => {}
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
