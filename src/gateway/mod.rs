/// Translation Gateway Module
///
/// Wraps the remote translation provider behind the `TranslationGateway`
/// trait: one request per user action, no caching, no retries. Failures
/// come back as a `Timeout` or `Service` error and the session decides
/// what to do with them.
pub mod error;
pub mod google;
pub mod mock;
pub mod translator;

pub use error::{GatewayError, GatewayResult};
pub use google::GoogleTranslateProvider;
pub use mock::{GatewayCall, MockGateway, MockMode};
pub use translator::{Translation, TranslationGateway, normalize_locale, validate_locale};
