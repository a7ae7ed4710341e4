use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodePixError {
    /// A required request field was missing or empty.
    #[error("{0}")]
    Validation(String),

    #[error("Unsupported model provider: {0}. Supported providers are 'gemini' and 'groq'.")]
    UnsupportedProvider(String),

    #[error("{provider} client not available. Please check the {credential} environment variable.")]
    ProviderUnavailable {
        provider: &'static str,
        credential: &'static str,
    },

    /// The external provider call itself failed.
    #[error("{0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),

    // The variants below originate in the client facade and are never
    // produced by request handlers.
    /// The service returned an error envelope; carries its message.
    #[error("{0}")]
    Service(String),

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response format from server")]
    InvalidResponse,
}

impl IntoResponse for CodePixError {
    fn into_response(self) -> Response {
        let status = match &self {
            CodePixError::Validation(_) => StatusCode::BAD_REQUEST,
            CodePixError::UnsupportedProvider(_)
            | CodePixError::ProviderUnavailable { .. }
            | CodePixError::Upstream(_)
            | CodePixError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Facade-side variants; included so the match stays exhaustive.
            CodePixError::Service(_)
            | CodePixError::Timeout
            | CodePixError::Network(_)
            | CodePixError::InvalidResponse => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, CodePixError>;
