//! Bounded translation history
//!
//! Most-recent-first record of successful translations. Presentation shows
//! only the first [`HistoryLog::DISPLAY_LIMIT`] entries; storage is capped
//! at [`HistoryLog::MAX_ENTRIES`], evicting the oldest. Entries are
//! immutable once recorded and never deduplicated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful translation, recorded at completion time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    /// Display name of the detected source language
    pub source_name: String,
    /// Display name of the target language
    pub target_name: String,
    pub input_text: String,
    pub output_text: String,
}

impl HistoryEntry {
    pub fn new(
        source_name: impl Into<String>,
        target_name: impl Into<String>,
        input_text: impl Into<String>,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            source_name: source_name.into(),
            target_name: target_name.into(),
            input_text: input_text.into(),
            output_text: output_text.into(),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.timestamp.format("%H:%M:%S"))?;
        writeln!(f, "{} → {}", self.source_name, self.target_name)?;
        writeln!(f, "Input: {}", self.input_text)?;
        write!(f, "Output: {}", self.output_text)
    }
}

/// Append-only, most-recent-first log of past translations
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// How many entries the presentation layer shows
    pub const DISPLAY_LIMIT: usize = 5;

    /// Storage cap; the oldest entry is evicted beyond this
    pub const MAX_ENTRIES: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new entry as the most recent
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(Self::MAX_ENTRIES);
    }

    /// The entries to display: up to `DISPLAY_LIMIT`, most recent first
    pub fn recent(&self) -> &[HistoryEntry] {
        &self.entries[..self.entries.len().min(Self::DISPLAY_LIMIT)]
    }

    /// All stored entries, most recent first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(input: &str) -> HistoryEntry {
        HistoryEntry::new("french", "english", input, format!("{}_en", input))
    }

    #[test]
    fn test_most_recent_first() {
        let mut log = HistoryLog::new();
        log.record(entry("one"));
        log.record(entry("two"));
        log.record(entry("three"));

        let inputs: Vec<&str> = log.entries().iter().map(|e| e.input_text.as_str()).collect();
        assert_eq!(inputs, vec!["three", "two", "one"]);
    }

    #[test]
    fn test_recent_caps_at_display_limit() {
        let mut log = HistoryLog::new();
        for i in 0..8 {
            log.record(entry(&format!("text{}", i)));
        }

        assert_eq!(log.len(), 8);
        assert_eq!(log.recent().len(), HistoryLog::DISPLAY_LIMIT);
        assert_eq!(log.recent()[0].input_text, "text7");
    }

    #[test]
    fn test_recent_with_fewer_entries() {
        let mut log = HistoryLog::new();
        log.record(entry("only"));
        assert_eq!(log.recent().len(), 1);
    }

    #[test]
    fn test_storage_cap_evicts_oldest() {
        let mut log = HistoryLog::new();
        for i in 0..(HistoryLog::MAX_ENTRIES + 10) {
            log.record(entry(&format!("text{}", i)));
        }

        assert_eq!(log.len(), HistoryLog::MAX_ENTRIES);
        // Newest survives, the very first entries are gone
        assert_eq!(log.entries()[0].input_text, "text109");
        assert!(!log.entries().iter().any(|e| e.input_text == "text0"));
    }

    #[test]
    fn test_duplicates_kept() {
        let mut log = HistoryLog::new();
        log.record(entry("same"));
        log.record(entry("same"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_display_format() {
        let e = HistoryEntry::new("french", "english", "bonjour", "hello");
        let rendered = e.to_string();
        assert!(rendered.contains("french → english"));
        assert!(rendered.contains("Input: bonjour"));
        assert!(rendered.contains("Output: hello"));
    }
}
