//! Session state record and source-language selection
//!
//! `SessionState` is the single mutable record behind the translator UI.
//! It is owned by the `TranslationController` and mutated only through the
//! controller's trigger methods; a presentation layer reads it to render.

use crate::session::history::HistoryLog;
use serde::{Deserialize, Serialize};

/// Source-language selection for the next translation
///
/// The target side is a plain code and can never be `Auto`; only the
/// source selector offers auto-detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceSelection {
    /// Let the provider detect the input language
    Auto,
    /// An explicit catalog code (e.g. "en", "fr")
    Language(String),
}

impl SourceSelection {
    /// Convenience constructor for an explicit code
    pub fn language(code: impl Into<String>) -> Self {
        SourceSelection::Language(code.into())
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceSelection::Auto)
    }

    /// The explicit code, if any
    pub fn as_code(&self) -> Option<&str> {
        match self {
            SourceSelection::Auto => None,
            SourceSelection::Language(code) => Some(code),
        }
    }
}

impl std::fmt::Display for SourceSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceSelection::Auto => write!(f, "auto"),
            SourceSelection::Language(code) => write!(f, "{}", code),
        }
    }
}

/// Mutable state of one interactive translation session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Source selector value; `Auto` until detection locks or the user picks
    pub source_lang: SourceSelection,
    /// Target selector value, always a concrete code
    pub target_lang: String,
    /// Current contents of the input field
    pub input_text: String,
    /// Current contents of the output field
    pub output_text: String,
    /// Detection result of the last successful auto-detect translation
    pub last_detected_source: Option<String>,
    /// Whether the input changed since the last successful translation
    pub user_edited_input: bool,
    /// Snapshot of the trimmed input as of the last successful translation
    pub last_run_input: String,
    /// Past translations, most recent first
    pub history: HistoryLog,
}

impl SessionState {
    /// Fresh session: auto-detect source, English target, everything empty
    pub fn new() -> Self {
        Self {
            source_lang: SourceSelection::Auto,
            target_lang: "en".to_string(),
            input_text: String::new(),
            output_text: String::new(),
            last_detected_source: None,
            user_edited_input: false,
            last_run_input: String::new(),
            history: HistoryLog::new(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
