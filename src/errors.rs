use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Crate-wide error type. Handlers propagate these with `?`; the
/// `IntoResponse` impl below is the only place they are turned into an
/// HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("customer {0} not found")]
    CustomerNotFound(i64),

    #[error("invalid form input: {0}")]
    InvalidInput(String),

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::UnknownTemplate(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("request failed with {}: {}", status, self);
        (status, self.to_string()).into_response()
    }
}
