//! One response handler per intent.
//!
//! Handlers never return errors: every data-layer failure is turned into a
//! complete sentence here so that the dialogue layer only ever sees text.

pub mod advice;
pub mod coin;
pub mod format;
pub mod knowledge;
pub mod market;

use crate::application::extractor::EntityExtractor;
use crate::application::knowledge::KnowledgeIndex;
use crate::application::market_data::MarketDataService;
use crate::application::resolver::AliasResolver;
use crate::domain::entities::market::{CoinDetail, SearchHit, SimplePrice};
use crate::domain::error::DomainError;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::info;

/// A lookup result, remembering whether it needed the fuzzy-search retry.
#[derive(Debug, Clone)]
pub struct Found<T> {
    pub value: T,
    pub via_search: Option<SearchHit>,
}

pub struct ResponseHandlers {
    market: Arc<MarketDataService>,
    resolver: AliasResolver,
    extractor: EntityExtractor,
    knowledge: KnowledgeIndex,
    rng: Mutex<StdRng>,
}

impl ResponseHandlers {
    pub fn new(
        market: Arc<MarketDataService>,
        resolver: AliasResolver,
        extractor: EntityExtractor,
        knowledge: KnowledgeIndex,
        rng: StdRng,
    ) -> Self {
        Self {
            market,
            resolver,
            extractor,
            knowledge,
            rng: Mutex::new(rng),
        }
    }

    pub fn resolver(&self) -> &AliasResolver {
        &self.resolver
    }

    pub fn extractor(&self) -> &EntityExtractor {
        &self.extractor
    }

    pub fn knowledge(&self) -> &KnowledgeIndex {
        &self.knowledge
    }

    pub fn market(&self) -> &MarketDataService {
        &self.market
    }

    fn pick<'a>(&self, options: &'a [&'a str]) -> &'a str {
        options.choose(&mut *self.rng.lock()).copied().unwrap_or_default()
    }

    /// Simple price for `id`; on a miss, one search with the raw text and
    /// one retry with the top hit.
    async fn price_with_retry(
        &self,
        raw: &str,
        id: &str,
    ) -> Result<Option<Found<SimplePrice>>, DomainError> {
        if let Some(value) = self.market.coin_price(id).await? {
            return Ok(Some(Found {
                value,
                via_search: None,
            }));
        }

        let Some(hit) = self.first_search_hit(raw).await? else {
            return Ok(None);
        };
        Ok(self.market.coin_price(&hit.id).await?.map(|value| Found {
            value,
            via_search: Some(hit),
        }))
    }

    /// Coin detail for `id`; a not-found miss gets the same single search
    /// retry as [`Self::price_with_retry`].
    async fn details_with_retry(
        &self,
        raw: &str,
        id: &str,
    ) -> Result<Option<Found<CoinDetail>>, DomainError> {
        match self.market.coin_details(id).await {
            Ok(value) => {
                return Ok(Some(Found {
                    value,
                    via_search: None,
                }))
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        let Some(hit) = self.first_search_hit(raw).await? else {
            return Ok(None);
        };
        match self.market.coin_details(&hit.id).await {
            Ok(value) => Ok(Some(Found {
                value,
                via_search: Some(hit),
            })),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn first_search_hit(&self, raw: &str) -> Result<Option<SearchHit>, DomainError> {
        let hit = self.market.search(raw).await?.into_iter().next();
        if let Some(h) = &hit {
            info!(query = raw, candidate = %h.id, "fuzzy search retry");
        }
        Ok(hit)
    }
}
