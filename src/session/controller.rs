//! Session controller: the four user triggers
//!
//! `TranslationController` owns the `SessionState` and is its only
//! mutation path. Each trigger is a transition over the state record;
//! `translate` additionally makes one gateway call per invocation.
//!
//! The subtle part is which source language a translate call actually
//! sends. It falls out of the interaction of three fields: the stored
//! `source_lang` selection, whether the trimmed input still matches
//! `last_run_input`, and the detection memory. Any text change since the
//! last successful run forces auto-detection for the next call, even when
//! the edit bypassed `edit_input` (e.g. a programmatic update).

use crate::catalog::LanguageCatalog;
use crate::gateway::{GatewayResult, TranslationGateway};
use crate::session::history::HistoryEntry;
use crate::session::state::{SessionState, SourceSelection};
use std::sync::Arc;

/// Rejected selector change: the code is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionError {
    pub code: String,
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown language code: {}", self.code)
    }
}

impl std::error::Error for SelectionError {}

/// Orchestrates one interactive translation session
///
/// Holds the session state, the gateway, and the language catalog used
/// for history display names. All triggers take `&mut self`, so two
/// translate calls can never overlap on the same session; callers that
/// share a session across tasks serialize through a mutex around the
/// whole controller.
pub struct TranslationController {
    state: SessionState,
    gateway: Arc<dyn TranslationGateway>,
    catalog: LanguageCatalog,
}

impl TranslationController {
    /// New session with default state and the built-in catalog
    pub fn new(gateway: Arc<dyn TranslationGateway>) -> Self {
        Self::with_catalog(gateway, LanguageCatalog::builtin())
    }

    pub fn with_catalog(gateway: Arc<dyn TranslationGateway>, catalog: LanguageCatalog) -> Self {
        Self {
            state: SessionState::new(),
            gateway,
            catalog,
        }
    }

    /// Read access for the presentation layer
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Direct state access for scenario tests that need to model
    /// programmatic changes bypassing the triggers
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// The user edited the input field
    ///
    /// A manual edit invalidates any previously detected source language;
    /// the next translation re-detects.
    pub fn edit_input(&mut self, new_text: &str) {
        self.state.input_text = new_text.to_string();
        self.state.user_edited_input = true;
        self.state.source_lang = SourceSelection::Auto;
        self.state.last_detected_source = None;
    }

    /// The user triggered translation
    ///
    /// Empty or whitespace-only input is silently ignored: no state
    /// change, no gateway call. On success all result fields and the
    /// history update together; on failure only `output_text` is cleared
    /// and the error is returned for the presentation layer to surface.
    /// In particular `last_run_input` is not advanced on failure, so
    /// retrying the same text still forces re-detection.
    pub async fn translate(&mut self) -> GatewayResult<()> {
        let text = self.state.input_text.trim().to_string();
        if text.is_empty() {
            return Ok(());
        }

        // Any text change since the last successful run forces auto-detection,
        // covering edits that bypassed edit_input.
        let effective_source = if text != self.state.last_run_input {
            self.state.source_lang = SourceSelection::Auto;
            SourceSelection::Auto
        } else {
            self.state.source_lang.clone()
        };

        tracing::debug!(
            provider = self.gateway.provider_name(),
            source = %effective_source,
            target = %self.state.target_lang,
            "translate requested"
        );

        match self
            .gateway
            .translate(&text, &self.state.target_lang, &effective_source)
            .await
        {
            Ok(result) => {
                self.state.output_text = result.translated_text.clone();
                self.state.last_detected_source = Some(result.detected_source.clone());
                self.state.user_edited_input = false;
                self.state.last_run_input = text.clone();
                self.state.history.record(HistoryEntry::new(
                    self.catalog.display_name(&result.detected_source),
                    self.catalog.display_name(&self.state.target_lang),
                    text,
                    result.translated_text,
                ));

                tracing::info!(
                    detected = %result.detected_source,
                    "translation succeeded"
                );
                Ok(())
            }
            Err(err) => {
                self.state.output_text.clear();
                tracing::warn!(error = %err, "translation failed");
                Err(err)
            }
        }
    }

    /// The user triggered a language swap
    ///
    /// The new source selector always ends up with a concrete code: the
    /// detection memory when the old source was auto, else the old target
    /// as a fallback. The moved text counts as already current, so the
    /// next translate honors the user's explicit source choice instead of
    /// re-triggering auto-detection.
    pub fn swap(&mut self) {
        let resolved_source = match &self.state.source_lang {
            SourceSelection::Auto => self
                .state
                .last_detected_source
                .clone()
                .unwrap_or_else(|| self.state.target_lang.clone()),
            SourceSelection::Language(code) => code.clone(),
        };

        self.state.source_lang = SourceSelection::Language(self.state.target_lang.clone());
        self.state.target_lang = resolved_source;

        self.state.input_text = std::mem::take(&mut self.state.output_text);
        self.state.last_run_input = self.state.input_text.clone();

        self.state.last_detected_source = None;
        self.state.user_edited_input = false;

        tracing::debug!(
            source = %self.state.source_lang,
            target = %self.state.target_lang,
            "languages swapped"
        );
    }

    /// The user picked a source language from the selector
    ///
    /// Touches nothing but the selection. Explicit codes must be in the
    /// catalog; `Auto` is always accepted.
    pub fn select_source(&mut self, selection: SourceSelection) -> Result<(), SelectionError> {
        if let Some(code) = selection.as_code() {
            if !self.catalog.contains(code) {
                return Err(SelectionError {
                    code: code.to_string(),
                });
            }
        }
        self.state.source_lang = selection;
        Ok(())
    }

    /// The user picked a target language from the selector
    ///
    /// The target is always a concrete catalog code; there is no auto
    /// option on this side.
    pub fn select_target(&mut self, code: &str) -> Result<(), SelectionError> {
        if !self.catalog.contains(code) {
            return Err(SelectionError {
                code: code.to_string(),
            });
        }
        self.state.target_lang = code.to_string();
        Ok(())
    }
}
