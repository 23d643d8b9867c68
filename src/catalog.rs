//! Language catalog: code to display-name lookups
//!
//! The catalog is the static dataset an interactive translator needs for
//! its selectors and history lines: which language codes are valid, and
//! what to call them on screen. Lookups never fail — an unknown code is
//! shown as-is, so history rendering degrades gracefully when a provider
//! reports a code the table does not carry.

use std::collections::HashMap;
use std::sync::LazyLock;

/// ISO-639-1 codes and display names, lowercase on both sides.
///
/// Same shape as the `googletrans` LANGUAGES table: a flat code → name
/// mapping with no region variants.
const LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("ar", "arabic"),
    ("bg", "bulgarian"),
    ("bn", "bengali"),
    ("ca", "catalan"),
    ("cs", "czech"),
    ("da", "danish"),
    ("de", "german"),
    ("el", "greek"),
    ("en", "english"),
    ("es", "spanish"),
    ("et", "estonian"),
    ("fa", "persian"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("gu", "gujarati"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hr", "croatian"),
    ("hu", "hungarian"),
    ("id", "indonesian"),
    ("it", "italian"),
    ("ja", "japanese"),
    ("kn", "kannada"),
    ("ko", "korean"),
    ("lt", "lithuanian"),
    ("lv", "latvian"),
    ("ml", "malayalam"),
    ("mr", "marathi"),
    ("ms", "malay"),
    ("nl", "dutch"),
    ("no", "norwegian"),
    ("pa", "punjabi"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("sr", "serbian"),
    ("sv", "swedish"),
    ("sw", "swahili"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("th", "thai"),
    ("tr", "turkish"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("vi", "vietnamese"),
    ("zh", "chinese"),
];

static DEFAULT_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LANGUAGES.iter().copied().collect());

/// Lookup table from language code to display name
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    names: HashMap<String, String>,
}

impl LanguageCatalog {
    /// Catalog backed by the built-in language table
    pub fn builtin() -> Self {
        Self {
            names: DEFAULT_TABLE
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    /// Catalog from an arbitrary code → name mapping
    pub fn from_table(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    /// Display name for `code`, or the code itself when unknown
    pub fn display_name(&self, code: &str) -> String {
        self.names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Whether `code` is a valid catalog code
    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    /// All valid codes, in no particular order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(|s| s.as_str())
    }

    /// Number of languages in the catalog
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
