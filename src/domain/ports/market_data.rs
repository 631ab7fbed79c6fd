//! Market data port: one variant per upstream query type.

use crate::domain::error::DomainError;
use crate::domain::values::currency::Currency;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketQuery {
    /// Aggregate market stats.
    Global,
    /// Coins ordered by market cap, one page at a time.
    Markets {
        currency: Currency,
        per_page: u32,
        page: u32,
    },
    SimplePrice { id: String, currency: Currency },
    CoinDetail { id: String },
    Trending,
    /// Free-text coin search.
    Search { query: String },
}

impl MarketQuery {
    /// Cache key: operation name plus parameters.
    pub fn cache_key(&self) -> String {
        match self {
            MarketQuery::Global => "global".to_string(),
            MarketQuery::Markets {
                currency,
                per_page,
                page,
            } => format!("top_coins_{currency}_{per_page}_{page}"),
            MarketQuery::SimplePrice { id, currency } => format!("price_{id}_{currency}"),
            MarketQuery::CoinDetail { id } => format!("details_{id}"),
            MarketQuery::Trending => "trending".to_string(),
            MarketQuery::Search { query } => format!("search_{}", query.to_lowercase()),
        }
    }

    /// Operation name, for logging.
    pub fn operation(&self) -> &'static str {
        match self {
            MarketQuery::Global => "global",
            MarketQuery::Markets { .. } => "markets",
            MarketQuery::SimplePrice { .. } => "simple_price",
            MarketQuery::CoinDetail { .. } => "coin_detail",
            MarketQuery::Trending => "trending",
            MarketQuery::Search { .. } => "search",
        }
    }
}

/// Read-only upstream market data provider.
///
/// Implementations map HTTP 429 to [`DomainError::RateLimited`] and HTTP 404
/// to [`DomainError::NotFound`]; every other failure is
/// [`DomainError::Upstream`] or [`DomainError::Parse`].
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, query: &MarketQuery) -> Result<Value, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys_include_parameters() {
        let q = MarketQuery::Markets {
            currency: Currency::Inr,
            per_page: 100,
            page: 1,
        };
        assert_eq!(q.cache_key(), "top_coins_inr_100_1");
        let q = MarketQuery::SimplePrice {
            id: "bitcoin".into(),
            currency: Currency::Usd,
        };
        assert_eq!(q.cache_key(), "price_bitcoin_usd");
        let q = MarketQuery::Search { query: "PePe".into() };
        assert_eq!(q.cache_key(), "search_pepe");
    }
}
