//! Mock translation gateway for testing
//!
//! A deterministic, API-free gateway for exercising the session logic
//! without network access. Every call is recorded, so tests can assert
//! exactly which effective source the controller sent per request.
//!
//! # Example
//!
//! ```ignore
//! use polyglot::gateway::{MockGateway, MockMode, TranslationGateway};
//! use polyglot::session::SourceSelection;
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockGateway::new(MockMode::Suffix);
//!     let result = mock
//!         .translate("hello", "fr", &SourceSelection::Auto)
//!         .await
//!         .unwrap();
//!     assert_eq!(result.translated_text, "hello_fr");
//! }
//! ```

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::translator::{Translation, TranslationGateway};
use crate::session::SourceSelection;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Language code the mock reports when asked to auto-detect
pub const MOCK_DETECTED: &str = "fr";

/// Mock translation modes for different test scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: "hello" → "hello_fr"
    Suffix,

    /// Predefined (text, target) → translation mappings, falling back to
    /// suffix behavior for unknown pairs
    Mappings(HashMap<(String, String), String>),

    /// Fail every call with `GatewayError::Timeout`
    Timeout(String),

    /// Fail every call with `GatewayError::Service`
    ServiceError(String),
}

/// One recorded gateway invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayCall {
    pub text: String,
    pub target_lang: String,
    pub source: SourceSelection,
}

/// Mock gateway that simulates translation without a provider
///
/// In auto-detect mode the mock reports [`MOCK_DETECTED`] as the detected
/// source; with an explicit source it echoes the requested code, matching
/// the real provider's contract.
#[derive(Debug)]
pub struct MockGateway {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockGateway {
    /// Create a new MockGateway with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a MockGateway with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All calls recorded so far, oldest first
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// The most recent recorded call, if any
    pub fn last_call(&self) -> Option<GatewayCall> {
        self.calls.lock().expect("call log poisoned").last().cloned()
    }

    /// Number of calls received
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, target: &str) -> GatewayResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Timeout(msg) => Err(GatewayError::Timeout(msg.clone())),
            MockMode::ServiceError(msg) => Err(GatewayError::Service(msg.clone())),
        }
    }
}

#[async_trait]
impl TranslationGateway for MockGateway {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source: &SourceSelection,
    ) -> GatewayResult<Translation> {
        self.calls.lock().expect("call log poisoned").push(GatewayCall {
            text: text.to_string(),
            target_lang: target_lang.to_string(),
            source: source.clone(),
        });

        self.apply_delay().await;

        let translated_text = self.apply_translation(text, target_lang)?;
        let detected_source = match source {
            SourceSelection::Language(code) => code.clone(),
            SourceSelection::Auto => MOCK_DETECTED.to_string(),
        };

        Ok(Translation {
            translated_text,
            detected_source,
        })
    }

    fn provider_name(&self) -> &str {
        "Mock Gateway"
    }
}
