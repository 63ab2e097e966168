//! HTTP handlers for the server.

pub mod print;
pub mod printers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::error::{ReciboError, TransportError};

/// Error body shared by every endpoint:
/// `{"success": false, "kind": "compile" | "transport" | "request", "error": "..."}`.
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "request",
            message: message.into(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        let status = match err {
            TransportError::NotConnected(_) => StatusCode::CONFLICT,
            TransportError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            TransportError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            kind: "transport",
            message: err.to_string(),
        }
    }
}

impl From<ReciboError> for ApiError {
    fn from(err: ReciboError) -> Self {
        match err {
            ReciboError::Transport(e) => e.into(),
            other if other.is_compile() => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                kind: "compile",
                message: other.to_string(),
            },
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "internal",
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, kind = self.kind, error = %self.message, "Request failed");
        (
            self.status,
            Json(json!({
                "success": false,
                "kind": self.kind,
                "error": self.message,
            })),
        )
            .into_response()
    }
}
