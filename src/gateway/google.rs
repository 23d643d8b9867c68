//! Google Translate API provider
//!
//! Integrates with Google Translate API v2. When the session asks for
//! auto-detection the `source` field is omitted from the request and the
//! provider-detected language is read back from `detectedSourceLanguage`.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GOOGLE_TRANSLATE_API_KEY`
//! environment variable. Obtain a key from:
//! https://console.cloud.google.com/
//!
//! # Example
//!
//! ```ignore
//! use polyglot::gateway::{TranslationGateway, GoogleTranslateProvider};
//! use polyglot::session::SourceSelection;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::from_env()?;
//!     let result = provider
//!         .translate("Hola mundo", "en", &SourceSelection::Auto)
//!         .await?;
//!     println!("{} (from {})", result.translated_text, result.detected_source);
//!     Ok(())
//! }
//! ```

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::translator::{
    Translation, TranslationGateway, normalize_locale, validate_locale,
};
use crate::session::SourceSelection;
use async_trait::async_trait;
use serde_json::json;

/// Google Translate API v2 provider
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for Google Translate API
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Maximum characters per request (30KB per Google Translate API limits)
    const MAX_CHARS: usize = 30_000;

    /// Remote call deadline; overruns surface as `GatewayError::Timeout`
    const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

    /// Create a new provider with an explicit API key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(GatewayError)` - If the key is empty or HTTP client creation fails
    pub fn new(api_key: String) -> GatewayResult<Self> {
        if api_key.trim().is_empty() {
            return Err(GatewayError::Service("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Service(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: "https://translation.googleapis.com/language/translate/v2".to_string(),
        })
    }

    /// Create a provider from the `GOOGLE_TRANSLATE_API_KEY` environment variable
    pub fn from_env() -> GatewayResult<Self> {
        let api_key = std::env::var("GOOGLE_TRANSLATE_API_KEY").map_err(|_| {
            GatewayError::Service(
                "GOOGLE_TRANSLATE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Self::new(api_key)
    }

    /// Build the v2 request body for a single text
    ///
    /// `source` is omitted entirely in auto-detect mode; the API then
    /// reports the detected language in the response.
    fn request_body(&self, text: &str, target_lang: &str, source: &SourceSelection) -> serde_json::Value {
        let mut body = json!({
            "q": [text],
            "target": normalize_locale(target_lang),
            "format": "text"
        });

        if let SourceSelection::Language(code) = source {
            body["source"] = json!(normalize_locale(code));
        }

        body
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TranslationGateway for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source: &SourceSelection,
    ) -> GatewayResult<Translation> {
        validate_locale(target_lang)?;
        if let SourceSelection::Language(code) = source {
            validate_locale(code)?;
        }

        if text.len() > Self::MAX_CHARS {
            return Err(GatewayError::Service(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS
            )));
        }

        let url = format!("{}?key={}", self.base_url, self.api_key);
        let body = self.request_body(text, target_lang, source);

        tracing::debug!(target_lang, ?source, "sending translation request");

        // reqwest timeouts become GatewayError::Timeout via From
        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(GatewayError::Service(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Service(format!("Failed to parse API response: {}", e)))?;

        let translation = payload["data"]["translations"]
            .as_array()
            .and_then(|t| t.first())
            .ok_or_else(|| {
                GatewayError::Service(
                    "Invalid API response: missing 'data.translations' array".to_string(),
                )
            })?;

        let translated_text = translation["translatedText"]
            .as_str()
            .ok_or_else(|| {
                GatewayError::Service(
                    "Invalid API response: missing 'translatedText' field".to_string(),
                )
            })?
            .to_string();

        // Explicit source requests echo the requested code; the API only
        // reports detectedSourceLanguage when the source was omitted.
        let detected_source = match source {
            SourceSelection::Language(code) => normalize_locale(code),
            SourceSelection::Auto => translation["detectedSourceLanguage"]
                .as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| {
                    GatewayError::Service(
                        "Invalid API response: missing 'detectedSourceLanguage' field".to_string(),
                    )
                })?,
        };

        Ok(Translation {
            translated_text,
            detected_source,
        })
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
