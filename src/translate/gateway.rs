use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::interface::{TranslationProvider, UpstreamError, UpstreamRequest};
use super::languages::{self, AUTO_DETECT};
use crate::error::TranslateError;

/// Longest accepted text, in characters, after trimming
pub const MAX_TEXT_CHARS: usize = 50_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default)]
    pub source_lang: Option<String>,
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub character_count: usize,
}

/// Validates translation requests, forwards them to the provider and maps the outcome
pub struct TranslationGateway {
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationGateway {
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    pub async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        let upstream_request = validate(&request)?;
        let character_count = upstream_request.text.chars().count();

        info!(
            "Translation request: source={:?}, target={}, text_len={}",
            request.source_lang, upstream_request.target_lang, character_count
        );

        let translation = self
            .provider
            .translate_upstream(&upstream_request)
            .await
            .map_err(map_upstream_error)?;

        let source_lang = translation
            .detected_source_language
            .or(request.source_lang.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| AUTO_DETECT.to_string());

        Ok(TranslationResponse {
            translated_text: translation.text,
            source_lang,
            target_lang: upstream_request.target_lang,
            character_count,
        })
    }
}

/// Check a request and build the normalized upstream form of it
pub fn validate(request: &TranslationRequest) -> Result<UpstreamRequest, TranslateError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(TranslateError::Validation("Text cannot be empty".to_string()));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(TranslateError::Validation(format!(
            "Text exceeds the maximum length of {} characters",
            MAX_TEXT_CHARS
        )));
    }

    let target_lang = languages::normalize_target(&request.target_lang).ok_or_else(|| {
        TranslateError::Validation(format!(
            "Invalid target language. Must be one of: {}",
            languages::supported_codes()
        ))
    })?;

    Ok(UpstreamRequest {
        text: text.to_string(),
        source_lang: languages::normalize_source(request.source_lang.as_deref()),
        target_lang,
    })
}

fn map_upstream_error(err: UpstreamError) -> TranslateError {
    match err {
        UpstreamError::Status { status: 403, .. } => {
            error!("DeepL rejected the configured API key");
            TranslateError::InvalidCredential
        }
        UpstreamError::Status { status: 456, .. } => {
            warn!("DeepL quota exceeded");
            TranslateError::RateLimited
        }
        UpstreamError::Status {
            status: 400,
            message,
        } => {
            let message = message.unwrap_or_else(|| "Unknown error".to_string());
            warn!("DeepL rejected request: {}", message);
            TranslateError::UpstreamBadRequest(message)
        }
        UpstreamError::Status { status, .. } => {
            warn!("DeepL returned status {}", status);
            TranslateError::UpstreamStatus(status)
        }
        UpstreamError::EmptyResponse => {
            warn!("DeepL returned no translations");
            TranslateError::EmptyResponse
        }
        UpstreamError::Timeout => {
            warn!("DeepL request timed out");
            TranslateError::Timeout
        }
        UpstreamError::Unavailable(cause) => {
            warn!("Failed to reach DeepL: {}", cause);
            TranslateError::Unavailable(cause)
        }
        UpstreamError::Unexpected(cause) => {
            error!("Unexpected error: {}", cause);
            TranslateError::Internal
        }
    }
}
