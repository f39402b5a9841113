use axum::http::header::{HeaderValue, X_CONTENT_TYPE_OPTIONS};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use textproc::ProcessError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// The display text of each variant is the exact plain-text body sent to the
/// client.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("No text provided")]
    NoText,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: max {0} bytes allowed")]
    PayloadTooLarge(usize),

    #[error("404 page not found")]
    NotFound,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::NoText | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), self.to_string()).into_response();
        response
            .headers_mut()
            .insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
        response
    }
}

impl From<ProcessError> for ServerError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::NoText => ServerError::NoText,
        }
    }
}
