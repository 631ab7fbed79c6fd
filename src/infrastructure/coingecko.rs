use crate::domain::error::DomainError;
use crate::domain::ports::market_data::{MarketDataSource, MarketQuery};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko public REST API (no key, roughly 10–30 calls/minute).
pub struct CoinGeckoSource {
    client: Client,
    base_url: Url,
}

impl CoinGeckoSource {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, DomainError> {
        let raw = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| DomainError::Config(format!("invalid base url {raw}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Config(format!("base url cannot take a path: {raw}")));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cryptochat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Config(format!("http client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Path segments and query parameters for one request. Segments are
    /// percent-encoded individually, so an id can never leave `/coins/`.
    fn endpoint(query: &MarketQuery) -> (Vec<String>, Vec<(&'static str, String)>) {
        let segments = |parts: &[&str]| parts.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        match query {
            MarketQuery::Global => (segments(&["global"]), vec![]),
            MarketQuery::Markets {
                currency,
                per_page,
                page,
            } => (
                segments(&["coins", "markets"]),
                vec![
                    ("vs_currency", currency.code().to_string()),
                    ("order", "market_cap_desc".into()),
                    ("per_page", per_page.to_string()),
                    ("page", page.to_string()),
                    ("sparkline", "false".into()),
                    ("price_change_percentage", "1h,24h,7d".into()),
                ],
            ),
            MarketQuery::SimplePrice { id, currency } => (
                segments(&["simple", "price"]),
                vec![
                    ("ids", id.clone()),
                    ("vs_currencies", currency.code().to_string()),
                    ("include_24hr_change", "true".into()),
                    ("include_24hr_vol", "true".into()),
                    ("include_market_cap", "true".into()),
                ],
            ),
            MarketQuery::CoinDetail { id } => (
                segments(&["coins", id.as_str()]),
                vec![
                    ("localization", "false".into()),
                    ("tickers", "false".into()),
                    ("market_data", "true".into()),
                    ("community_data", "false".into()),
                    ("developer_data", "false".into()),
                ],
            ),
            MarketQuery::Trending => (segments(&["search", "trending"]), vec![]),
            MarketQuery::Search { query } => (segments(&["search"]), vec![("query", query.clone())]),
        }
    }

    fn url(&self, query: &MarketQuery) -> Result<Url, DomainError> {
        let (segments, params) = Self::endpoint(query);
        if let Some(bad) = segments.iter().find(|s| matches!(s.as_str(), "" | "." | "..")) {
            return Err(DomainError::InvalidInput(format!("unusable path segment {bad:?}")));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::Config(format!("base url cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(&segments);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(&params);
        }
        Ok(url)
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoSource {
    fn name(&self) -> &str {
        "coingecko"
    }

    async fn fetch(&self, query: &MarketQuery) -> Result<Value, DomainError> {
        let url = self.url(query)?;
        debug!(operation = query.operation(), %url, "upstream request");

        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("CoinGecko request failed: {e}")))?;

        let status = resp.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(operation = query.operation(), "rate limited by CoinGecko");
                return Err(DomainError::RateLimited);
            }
            StatusCode::NOT_FOUND => {
                return Err(DomainError::NotFound(query.cache_key()));
            }
            s if !s.is_success() => {
                let body = resp.text().await.unwrap_or_default();
                return Err(DomainError::Upstream(format!("CoinGecko API {s}: {body}")));
            }
            _ => {}
        }

        resp.json::<Value>()
            .await
            .map_err(|e| DomainError::Parse(format!("CoinGecko response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::currency::Currency;

    fn source() -> CoinGeckoSource {
        CoinGeckoSource::new(Some("http://localhost:9000/api/v3/".into()), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_source_creation_trims_base_url() {
        let src = source();
        assert_eq!(src.name(), "coingecko");
        assert_eq!(src.base_url.as_str(), "http://localhost:9000/api/v3");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = CoinGeckoSource::new(Some("not a url".into()), Duration::from_secs(5)).err();
        assert!(matches!(err, Some(DomainError::Config(_))));
    }

    #[test]
    fn test_markets_url_params() {
        let url = source()
            .url(&MarketQuery::Markets {
                currency: Currency::Usd,
                per_page: 250,
                page: 1,
            })
            .unwrap();
        assert_eq!(url.path(), "/api/v3/coins/markets");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("vs_currency".into(), "usd".into())));
        assert!(pairs.contains(&("per_page".into(), "250".into())));
    }

    #[test]
    fn test_detail_url_embeds_id() {
        let url = source().url(&MarketQuery::CoinDetail { id: "bitcoin".into() }).unwrap();
        assert_eq!(url.path(), "/api/v3/coins/bitcoin");
    }

    #[test]
    fn test_detail_id_stays_one_segment() {
        for id in ["%2e%2e/simple/price", "../global", "a/b"] {
            let url = source().url(&MarketQuery::CoinDetail { id: id.into() }).unwrap();
            // Re-parse as the client would before sending.
            let sent = Url::parse(url.as_str()).unwrap();
            let segments: Vec<&str> = sent.path_segments().unwrap().collect();
            assert_eq!(segments.len(), 4, "id {id:?} escaped its segment: {sent}");
            assert_eq!(&segments[..3], &["api", "v3", "coins"]);
        }
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        for id in ["", ".", ".."] {
            let err = source().url(&MarketQuery::CoinDetail { id: id.into() }).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)), "id {id:?}");
        }
    }

    #[test]
    fn test_search_query_is_encoded() {
        let url = source().url(&MarketQuery::Search { query: "a&b=c".into() }).unwrap();
        assert_eq!(url.path(), "/api/v3/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("query".to_string(), "a&b=c".to_string())]);
    }
}
