use axum::http::StatusCode;

use crate::response::Reply;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A required request field was absent.
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("failed to encode response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Every error goes out as `{"error": "<message>"}`.
    pub fn into_reply(self) -> Reply {
        if let AppError::Serialization(ref e) = self {
            tracing::error!(error = %e, "Response serialization failed");
        }
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        Reply::json_value(status, &body)
    }
}
