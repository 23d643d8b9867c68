/// Translation Session Module
///
/// The state-transition core of the interactive translator: the session
/// record, the bounded history log, and the controller that applies the
/// four user triggers (edit input, translate, swap, selector change).
pub mod controller;
pub mod history;
pub mod state;

#[cfg(test)]
mod integration_tests;

pub use controller::{SelectionError, TranslationController};
pub use history::{HistoryEntry, HistoryLog};
pub use state::{SessionState, SourceSelection};
