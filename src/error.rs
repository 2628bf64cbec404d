use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while handling a request.
///
/// All variants render as a `{"error": message}` JSON body. Upstream failures
/// carry the HTTP status the remote answered with, which is propagated to the
/// caller; transport-level failures (DNS, refused connection, timeout) have no
/// upstream status and map to 502.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `state` returned on the callback did not match the cookie value.
    /// The token exchange is aborted before any upstream call is made.
    #[error("state mismatch")]
    StateMismatch,

    /// A required query parameter was absent.
    #[error("missing query parameter: {0}")]
    MissingParam(&'static str),

    /// A token-endpoint call failed.
    #[error("{message}")]
    UpstreamAuth {
        status: Option<u16>,
        message: String,
    },

    /// A proxied resource lookup failed.
    #[error("{message}")]
    UpstreamResource {
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::StateMismatch => StatusCode::FORBIDDEN,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamAuth { status, .. } | ApiError::UpstreamResource { status, .. } => {
                status
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
