use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::{TranslationProvider, UpstreamError, UpstreamRequest, UpstreamTranslation};
use crate::config::DeepLConfig;

/// DeepL REST client. One instance (and one connection pool) is shared by all requests
#[derive(Debug, Clone)]
pub struct DeepLClient {
    client: Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct TranslateForm<'a> {
    auth_key: &'a str,
    text: &'a str,
    target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct DeepLResponse {
    #[serde(default)]
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeepLErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
}

impl DeepLClient {
    pub fn new(
        api_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    pub fn from_config(config: &DeepLConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            config.api_url.clone(),
            config.api_key.clone(),
            config.timeout(),
        )
    }
}

#[async_trait]
impl TranslationProvider for DeepLClient {
    async fn translate_upstream(
        &self,
        request: &UpstreamRequest,
    ) -> Result<UpstreamTranslation, UpstreamError> {
        let form = TranslateForm {
            auth_key: &self.api_key,
            text: &request.text,
            target_lang: &request.target_lang,
            source_lang: request.source_lang.as_deref(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .form(&form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        debug!("DeepL responded: status={}, body_len={}", status, body.len());

        if status != StatusCode::OK {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: error_message(status, &body)?,
            });
        }

        let parsed: DeepLResponse = serde_json::from_slice(&body).map_err(|e| {
            UpstreamError::Unexpected(format!("invalid DeepL response body: {}", e))
        })?;

        let translation = parsed
            .translations
            .into_iter()
            .next()
            .ok_or(UpstreamError::EmptyResponse)?;

        Ok(UpstreamTranslation {
            text: translation.text,
            detected_source_language: translation.detected_source_language,
        })
    }
}

fn transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Unavailable(e.to_string())
    }
}

/// Extract DeepL's `message` from an error body.
///
/// An unparseable body only matters for 400, whose message is shown to the caller.
fn error_message(status: StatusCode, body: &[u8]) -> Result<Option<String>, UpstreamError> {
    if body.is_empty() {
        return Ok(None);
    }
    match serde_json::from_slice::<DeepLErrorBody>(body) {
        Ok(parsed) => Ok(parsed.message.and_then(|message| match message {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text),
            other => Some(other.to_string()),
        })),
        Err(e) if status == StatusCode::BAD_REQUEST => Err(UpstreamError::Unexpected(format!(
            "invalid DeepL error body: {}",
            e
        ))),
        Err(_) => Ok(None),
    }
}
