//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] transport agnostic while letting actix handlers return it
//! directly: the `ResponseError` impl picks the status code and renders the
//! JSON envelope, redacting internal detail.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if matches!(err.code, ErrorCode::InternalError) {
        error!(message = %err.message, "internal error returned to client");
        let mut redacted = Error::internal("Internal server error");
        redacted.trace_id.clone_from(&err.trace_id);
        redacted
    } else {
        err.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        builder.json(redact_if_internal(self))
    }
}

/// JSON extractor configuration translating deserialisation failures into the
/// standard error envelope instead of actix's plain-text 400.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        Error::invalid_request("invalid request body")
            .with_details(json!({ "code": "malformed_body", "message": detail }))
            .into()
    })
}
