/// Error types for the translation gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The remote provider did not answer within its deadline
    Timeout(String),
    /// Any other transport or provider failure
    Service(String),
    /// A language code the provider cannot accept
    InvalidLocale(String),
}

impl GatewayError {
    /// Human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            GatewayError::Timeout(msg)
            | GatewayError::Service(msg)
            | GatewayError::InvalidLocale(msg) => msg,
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Timeout(msg) => write!(f, "Translation timed out: {}", msg),
            GatewayError::Service(msg) => write!(f, "Translation failed: {}", msg),
            GatewayError::InvalidLocale(msg) => write!(f, "Invalid language code: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(err.to_string())
        } else {
            GatewayError::Service(err.to_string())
        }
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
