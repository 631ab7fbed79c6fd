use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Upstream answered HTTP 429.
    #[error("Rate limited by market data provider")]
    RateLimited,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, DomainError::RateLimited)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

impl From<regex::Error> for DomainError {
    fn from(e: regex::Error) -> Self {
        DomainError::Config(format!("invalid pattern: {e}"))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Parse(e.to_string())
    }
}
