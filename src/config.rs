use crate::domain::error::DomainError;
use crate::domain::values::alias_match::AliasMatch;
use crate::domain::values::currency::Currency;
use crate::infrastructure::coingecko::DEFAULT_BASE_URL;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub base_url: String,
    pub currency: Currency,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub alias_match: AliasMatch,
    /// Fixed RNG seed for reproducible replies; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            currency: Currency::default(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            alias_match: AliasMatch::default(),
            seed: None,
        }
    }
}

impl ChatConfig {
    /// Read `CRYPTOCHAT_*` variables over the defaults. Unset or empty
    /// variables keep the default; anything unparseable is an error.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("CRYPTOCHAT_BASE_URL") {
            config.base_url = url.trim().to_string();
        }
        if let Some(v) = get("CRYPTOCHAT_CURRENCY") {
            config.currency = parse("CRYPTOCHAT_CURRENCY", &v)?;
        }
        if let Some(v) = get("CRYPTOCHAT_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(parse("CRYPTOCHAT_CACHE_TTL_SECS", &v)?);
        }
        if let Some(v) = get("CRYPTOCHAT_TIMEOUT_SECS") {
            let secs: u64 = parse("CRYPTOCHAT_TIMEOUT_SECS", &v)?;
            if secs == 0 {
                return Err(DomainError::Config(
                    "CRYPTOCHAT_TIMEOUT_SECS must be greater than zero".into(),
                ));
            }
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(v) = get("CRYPTOCHAT_ALIAS_MATCH") {
            config.alias_match = parse("CRYPTOCHAT_ALIAS_MATCH", &v)?;
        }
        if let Some(v) = get("CRYPTOCHAT_SEED") {
            config.seed = Some(parse("CRYPTOCHAT_SEED", &v)?);
        }

        Ok(config)
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| DomainError::Config(format!("{key}={value}: {e}")))
}
