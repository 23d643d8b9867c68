//! Translation gateway trait and locale utilities
//!
//! This module defines the `TranslationGateway` trait for provider
//! abstraction, so the session logic can run against Google Translate, a
//! mock, or any future backend without coupling to a specific one.
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
//!         .translate("Bonjour", "en", &SourceSelection::Auto)
//!         .await?;
//!     println!("{} (detected {})", result.translated_text, result.detected_source);
//!     Ok(())
//! }
//! ```

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::session::SourceSelection;
use async_trait::async_trait;

/// Outcome of a successful gateway call
///
/// `detected_source` is always a concrete language code: the provider's
/// detection result when the request asked for auto-detection, or the
/// requested source code echoed back otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub translated_text: String,
    pub detected_source: String,
}

/// Generic trait for translation providers
///
/// One call per user action: implementations perform no retries and no
/// caching. Failures are reported through [`GatewayError`] and the caller
/// decides whether to try again.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    /// Translate `text` into `target_lang`
    ///
    /// # Arguments
    ///
    /// * `text` - Non-empty text to translate
    /// * `target_lang` - Target language code (e.g. "en", "fr")
    /// * `source` - Explicit source code, or `Auto` to let the provider
    ///   detect the input language
    ///
    /// # Returns
    ///
    /// * `Ok(Translation)` - Translated text plus the concrete source code
    /// * `Err(GatewayError)` - `Timeout` or `Service` failure
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source: &SourceSelection,
    ) -> GatewayResult<Translation>;

    /// Name of this provider, for log lines
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code by stripping region information
///
/// Converts BCP 47 style codes to their base language:
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `en` → `en` (unchanged)
pub fn normalize_locale(locale: &str) -> String {
    locale.split('-').next().unwrap_or(locale).to_lowercase()
}

/// Validate that a locale code is in acceptable format
///
/// Accepts only alphanumeric characters, hyphens, and underscores,
/// following ISO 639 conventions.
pub fn validate_locale(locale: &str) -> GatewayResult<()> {
    if locale.is_empty() {
        return Err(GatewayError::InvalidLocale(
            "Locale code is empty".to_string(),
        ));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(GatewayError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}
