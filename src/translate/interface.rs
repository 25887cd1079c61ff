use async_trait::async_trait;
use thiserror::Error;

/// Request handed to the upstream provider, already validated and normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
}

/// First translation returned by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTranslation {
    pub text: String,
    pub detected_source_language: Option<String>,
}

/// Failures of a single upstream call, before they are mapped to the client contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Non-200 answer. `message` is the provider's error message, if any
    #[error("upstream returned status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("upstream returned no translations")]
    EmptyResponse,
    #[error("upstream request timed out")]
    Timeout,
    #[error("upstream unreachable: {0}")]
    Unavailable(String),
    #[error("unexpected upstream failure: {0}")]
    Unexpected(String),
}

/// Translation provider interface - the DeepL client in production, fakes in tests
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate_upstream(
        &self,
        request: &UpstreamRequest,
    ) -> Result<UpstreamTranslation, UpstreamError>;
}
