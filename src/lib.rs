//! Interactive text-translation session core.
//!
//! `polyglot` models a single translation session the way an interactive
//! translator UI needs it: an input field, a source/target language pair
//! (source may be auto-detected), a translate action that calls a remote
//! provider, a swap action that exchanges the language roles, and a rolling
//! history of past translations. The crate owns the state-transition logic;
//! rendering and the translation algorithm itself stay outside.
//!
//! # Overview
//!
//! - [`gateway`] — the `TranslationGateway` trait with a Google Translate
//!   provider and a deterministic mock for tests.
//! - [`catalog`] — language-code to display-name lookups.
//! - [`session`] — `SessionState`, `HistoryLog`, and the
//!   `TranslationController` that applies the four user triggers.
//!
//! # Example
//!
//! ```ignore
//! use polyglot::gateway::{MockGateway, MockMode};
//! use polyglot::session::TranslationController;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = Arc::new(MockGateway::new(MockMode::Suffix));
//!     let mut session = TranslationController::new(gateway);
//!
//!     session.edit_input("bonjour tout le monde");
//!     session.translate().await?;
//!     println!("{}", session.state().output_text);
//!
//!     session.swap();
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod gateway;
pub mod session;

pub use catalog::LanguageCatalog;
pub use gateway::{GatewayError, GatewayResult, Translation, TranslationGateway};
pub use session::{
    HistoryEntry, HistoryLog, SessionState, SourceSelection, TranslationController,
};
