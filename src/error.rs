use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Everything `/api/translate` can fail with, as seen by the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid DeepL API key. Please check configuration.")]
    InvalidCredential,
    #[error("DeepL API quota exceeded. Please try again later.")]
    RateLimited,
    #[error("Invalid request: {0}")]
    UpstreamBadRequest(String),
    #[error("DeepL API error: {0}")]
    UpstreamStatus(u16),
    #[error("No translation returned from DeepL API")]
    EmptyResponse,
    #[error("Request to DeepL API timed out. Please try again.")]
    Timeout,
    #[error("Failed to connect to DeepL API: {0}")]
    Unavailable(String),
    /// The cause is logged where it happens and never leaves the process
    #[error("An unexpected error occurred during translation")]
    Internal,
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UpstreamBadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidCredential
            | Self::UpstreamStatus(_)
            | Self::EmptyResponse
            | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::InvalidCredential => "invalid_credential",
            Self::RateLimited => "rate_limited",
            Self::UpstreamBadRequest(_) => "upstream_bad_request",
            Self::UpstreamStatus(_) | Self::EmptyResponse => "upstream_error",
            Self::Timeout => "upstream_timeout",
            Self::Unavailable(_) => "upstream_unavailable",
            Self::Internal => "internal_error",
        }
    }

    pub fn detail(&self) -> String {
        self.to_string()
    }

    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.category().to_string(),
            detail: Some(self.detail()),
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_category_and_detail() {
        let body = TranslateError::RateLimited.to_body();
        assert_eq!(body.error, "rate_limited");
        assert_eq!(
            body.detail.as_deref(),
            Some("DeepL API quota exceeded. Please try again later.")
        );
    }

    #[test]
    fn internal_error_detail_is_generic() {
        let err = TranslateError::Internal;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "An unexpected error occurred during translation");
    }

    #[test]
    fn missing_detail_is_omitted_from_json() {
        let body = ErrorResponse {
            error: "internal_error".to_string(),
            detail: None,
        };
        assert_eq!(
            serde_json::to_value(&body).expect("serialize"),
            serde_json::json!({"error": "internal_error"})
        );
    }

    #[test]
    fn response_uses_mapped_status() {
        let response = TranslateError::Timeout.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
