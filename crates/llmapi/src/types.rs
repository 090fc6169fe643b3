use anyhow::{Context, Result, bail};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::utils;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// One `generateContent` call: an optional system instruction plus a single
/// user turn.
#[derive(Clone, Debug, Default)]
pub struct GenerateRequest {
    pub system_instruction: Option<String>,
    pub prompt: String,
}

impl GenerateRequest {
    pub fn text(system_instruction: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: Some(system_instruction.into()),
            prompt: prompt.into(),
        }
    }
}

/// Authenticated handle to the Gemini REST API.
///
/// The credential lives only inside the HTTP client's default headers,
/// marked sensitive so it never shows up in debug output.
#[derive(Clone)]
pub struct LLMClient {
    pub(crate) http: Client,
    pub(crate) endpoint: String,
    pub(crate) default_model: String,
}

impl LLMClient {
    pub fn new(
        api_key: &str,
        endpoint: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Result<Self> {
        if api_key.trim().is_empty() {
            bail!("API key is empty");
        }

        let mut key_value =
            HeaderValue::from_str(api_key).context("API key is not a valid header value")?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            default_model: utils::normalize_model_id(&default_model.into()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }
}

impl std::fmt::Debug for LLMClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMClient")
            .field("endpoint", &self.endpoint)
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

    #[test]
    fn rejects_empty_api_key() {
        let err = LLMClient::new("   ", ENDPOINT, "gemini-2.0-flash").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_api_key_with_control_characters() {
        let err = LLMClient::new("abc\ndef", ENDPOINT, "gemini-2.0-flash").unwrap_err();
        assert!(err.to_string().contains("header value"));
    }

    #[test]
    fn normalizes_model_prefix() {
        let client = LLMClient::new("key", ENDPOINT, "models/gemini-2.0-flash").unwrap();
        assert_eq!(client.default_model(), "gemini-2.0-flash");
        assert_eq!(client.endpoint(), ENDPOINT);
    }

    #[test]
    fn debug_output_omits_credential() {
        let client = LLMClient::new("super-secret", ENDPOINT, "gemini-2.0-flash").unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("gemini-2.0-flash"));
    }
}
