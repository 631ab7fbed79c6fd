//! Cached data access layer.
//!
//! Every upstream query goes through [`MarketDataService::cached`]:
//! - fresh entry: served without a network call
//! - otherwise fetch; on success store and return
//! - on failure (including rate limiting) serve the entry of any age if one
//!   exists, else propagate the error
//!
//! Concurrent cold fetches for one key are coalesced behind a per-key gate.

use crate::domain::entities::market::{
    CoinDetail, GlobalStats, MarketCoin, Movers, SearchHit, SimplePrice, TrendingCoin,
};
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::{MarketDataSource, MarketQuery};
use crate::domain::values::currency::Currency;
use crate::infrastructure::cache::TtlCache;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Snapshot size behind gainers/losers.
pub const MOVERS_SNAPSHOT: u32 = 100;
/// Snapshot size behind two-coin comparison.
pub const COMPARE_SNAPSHOT: u32 = 250;
/// Search hits kept per query.
pub const SEARCH_LIMIT: usize = 5;

pub struct MarketDataService {
    source: Arc<dyn MarketDataSource>,
    cache: TtlCache,
    gates: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
    currency: Currency,
}

impl MarketDataService {
    pub fn new(source: Arc<dyn MarketDataSource>, cache: TtlCache, currency: Currency) -> Self {
        Self {
            source,
            cache,
            gates: Mutex::new(HashMap::new()),
            currency,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub async fn cached(&self, query: MarketQuery) -> Result<Value, DomainError> {
        let key = query.cache_key();
        if let Some(payload) = self.cache.fresh(&key) {
            debug!(%key, "cache hit");
            return Ok(payload);
        }

        let gate = self.gate(&key);
        let result = {
            let _guard = gate.lock().await;
            self.refresh(&key, &query).await
        };
        self.release(&key, gate);
        result
    }

    /// Fetch under the key's gate, falling back to a stale entry on failure.
    async fn refresh(&self, key: &str, query: &MarketQuery) -> Result<Value, DomainError> {
        // Another caller may have refreshed the key while we waited.
        if let Some(payload) = self.cache.fresh(key) {
            debug!(%key, "cache hit after wait");
            return Ok(payload);
        }

        debug!(%key, source = self.source.name(), "cache miss");
        match self.source.fetch(query).await {
            Ok(payload) => {
                self.cache.store(key, payload.clone());
                Ok(payload)
            }
            Err(e) => match self.cache.any(key) {
                Some(stale) => {
                    warn!(%key, error = %e, "upstream failed, serving stale entry");
                    Ok(stale)
                }
                None => Err(e),
            },
        }
    }

    fn gate(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        self.gates
            .lock()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// Drop our handle and forget the gate once no other caller holds it,
    /// so free-text search keys do not accumulate.
    fn release(&self, key: &str, gate: Arc<tokio::sync::Mutex<()>>) {
        let mut gates = self.gates.lock();
        drop(gate);
        if gates.get(key).is_some_and(|g| Arc::strong_count(g) == 1) {
            gates.remove(key);
        }
    }

    pub async fn global_stats(&self) -> Result<GlobalStats, DomainError> {
        let payload = self.cached(MarketQuery::Global).await?;
        GlobalStats::from_payload(&payload, self.currency)
    }

    pub async fn top_coins(&self, per_page: u32, page: u32) -> Result<Vec<MarketCoin>, DomainError> {
        let payload = self
            .cached(MarketQuery::Markets {
                currency: self.currency,
                per_page,
                page,
            })
            .await?;
        MarketCoin::list_from_payload(&payload)
    }

    /// `Ok(None)` when the upstream has no price for `id`.
    pub async fn coin_price(&self, id: &str) -> Result<Option<SimplePrice>, DomainError> {
        let payload = self
            .cached(MarketQuery::SimplePrice {
                id: id.to_string(),
                currency: self.currency,
            })
            .await?;
        Ok(SimplePrice::from_payload(&payload, id, self.currency))
    }

    pub async fn coin_details(&self, id: &str) -> Result<CoinDetail, DomainError> {
        let payload = self
            .cached(MarketQuery::CoinDetail { id: id.to_string() })
            .await?;
        CoinDetail::from_payload(&payload, self.currency)
    }

    pub async fn trending(&self) -> Result<Vec<TrendingCoin>, DomainError> {
        let payload = self.cached(MarketQuery::Trending).await?;
        Ok(TrendingCoin::list_from_payload(&payload))
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        let payload = self
            .cached(MarketQuery::Search {
                query: query.to_string(),
            })
            .await?;
        Ok(SearchHit::list_from_payload(&payload, SEARCH_LIMIT))
    }

    /// Gainers and losers ranked locally from one market snapshot.
    pub async fn gainers_losers(&self, count: usize) -> Result<Movers, DomainError> {
        let coins = self.top_coins(MOVERS_SNAPSHOT, 1).await?;
        Ok(Movers::rank(coins, count))
    }

    /// Both coins looked up in one snapshot; either may be absent.
    pub async fn compare(
        &self,
        id1: &str,
        id2: &str,
    ) -> Result<(Option<MarketCoin>, Option<MarketCoin>), DomainError> {
        let coins = self.top_coins(COMPARE_SNAPSHOT, 1).await?;
        let find = |id: &str| coins.iter().find(|c| c.id == id).cloned();
        Ok((find(id1), find(id2)))
    }

    /// Look one coin up in the comparison snapshot.
    pub async fn snapshot_coin(&self, id: &str) -> Result<Option<MarketCoin>, DomainError> {
        let coins = self.top_coins(COMPARE_SNAPSHOT, 1).await?;
        Ok(coins.into_iter().find(|c| c.id == id))
    }
}
