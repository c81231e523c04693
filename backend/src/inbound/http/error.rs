//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into `{"error": <message>}` bodies with
//! consistent status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{Error, ErrorCode};

pub use crate::domain::ApiResult;

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure message.
    #[schema(example = "Quantity must be a valid integer.")]
    pub error: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::MalformedRequest
        | ErrorCode::InvalidQuantityType
        | ErrorCode::QuantityOutOfRange => StatusCode::BAD_REQUEST,
        ErrorCode::VariationsExhausted => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &Error) -> ErrorBody {
    let message = if matches!(error.code(), ErrorCode::InternalError) {
        // Do not leak implementation details to clients.
        error!(error = %error, "internal error redacted from response");
        "Internal server error"
    } else {
        error.message()
    };
    ErrorBody {
        error: message.to_owned(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(body_for(self))
    }
}
