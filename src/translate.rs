//! The translation provider boundary.
//!
//! The engine only needs `translate(text, from, to) -> translated text`;
//! everything else (endpoint, credentials, retries) lives behind the
//! [`Translator`] trait so tests can substitute a canned implementation.

use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A machine-translation service. Calls are asynchronous and may fail for
/// network, quota, or server reasons; the caller recovers per leaf.
pub trait Translator {
    /// Translate `text` from language code `from` to language code `to`.
    fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> impl std::future::Future<Output = Result<String>>;
}

/// Google Translate v2 REST request body.
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    // "text" disables HTML entity escaping in responses
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationData,
}

#[derive(Debug, Deserialize)]
struct TranslationData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for the Google Translate v2 REST API, authenticated with an API
/// key passed as a query parameter.
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl GoogleTranslator {
    pub const DEFAULT_API_URL: &'static str =
        "https://translation.googleapis.com/language/translate/v2";

    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, Self::DEFAULT_API_URL.to_string())
    }

    /// Point the client at a different endpoint, used by tests to target a
    /// mock server.
    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    async fn request_translation(&self, request: &TranslateRequest<'_>) -> Result<String> {
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .context("Failed to send request to translation API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Translation API error ({}): {}", status, body);
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse translation API response")?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .context("Translation API response contained no translations")
    }
}

impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source: from,
            target: to,
            format: "text",
        };

        with_retry_if(
            &RetryConfig::api_call(),
            &format!("Translation {from} -> {to}"),
            || self.request_translation(&request),
            is_retryable_error,
        )
        .await
    }
}

/// Determine if an error is retryable (5xx errors, 429 rate limit, network
/// errors). Other 4xx client errors should not be retried.
fn is_retryable_error(error: &anyhow::Error) -> bool {
    let error_str = error.to_string();

    // Error format: "Translation API error (403 Forbidden): ..."
    if error_str.contains("Translation API error") {
        if let Some(start) = error_str.find('(') {
            if let Some(end) = error_str[start..].find(')') {
                let status_str = &error_str[start + 1..start + end];
                let status_num = status_str.split_whitespace().next().unwrap_or("");
                if let Ok(status) = status_num.parse::<u16>() {
                    return status == 429 || status >= 500;
                }
            }
        }
    }

    // Retry network errors, timeouts, and other transient failures
    true
}
