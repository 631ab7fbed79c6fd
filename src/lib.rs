pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::classifier::{Classification, IntentClassifier};
use crate::application::dialogue::DialogueOrchestrator;
use crate::application::extractor::EntityExtractor;
use crate::application::handlers::ResponseHandlers;
use crate::application::knowledge::KnowledgeIndex;
use crate::application::market_data::MarketDataService;
use crate::application::resolver::AliasResolver;
use crate::config::ChatConfig;
use crate::domain::entities::knowledge::{EducationEntry, ReportEntry, ScoredReport};
use crate::domain::entities::market::{GlobalStats, Movers};
use crate::domain::error::DomainError;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::market_data::MarketDataSource;
use crate::infrastructure::cache::TtlCache;
use crate::infrastructure::catalog;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::coingecko::CoinGeckoSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

pub struct CryptoChat {
    orchestrator: DialogueOrchestrator,
    market: Arc<MarketDataService>,
}

impl CryptoChat {
    pub fn new(config: ChatConfig) -> Result<Self, DomainError> {
        let source: Arc<dyn MarketDataSource> = Arc::new(CoinGeckoSource::new(
            Some(config.base_url.clone()),
            config.request_timeout,
        )?);
        Self::with_source(source, Arc::new(SystemClock), config)
    }

    /// Wire everything around a caller-supplied data source and clock.
    pub fn with_source(
        source: Arc<dyn MarketDataSource>,
        clock: Arc<dyn Clock>,
        config: ChatConfig,
    ) -> Result<Self, DomainError> {
        let ttl = chrono::Duration::from_std(config.cache_ttl)
            .map_err(|e| DomainError::Config(format!("cache ttl out of range: {e}")))?;
        let market = Arc::new(MarketDataService::new(
            source,
            TtlCache::new(ttl, clock),
            config.currency,
        ));

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let handlers = ResponseHandlers::new(
            market.clone(),
            AliasResolver::new(),
            EntityExtractor::new(config.alias_match)?,
            KnowledgeIndex::new(catalog::education(), catalog::reports()),
            rng,
        );
        let orchestrator = DialogueOrchestrator::new(IntentClassifier::new()?, handlers);

        Ok(Self {
            orchestrator,
            market,
        })
    }

    /// Answer one message. Never fails; upstream problems become apologies.
    pub async fn ask(&self, message: &str) -> String {
        self.orchestrator.respond(message).await
    }

    pub fn classify(&self, message: &str) -> Classification {
        self.orchestrator.classify(message)
    }

    /// Canonical upstream id for a coin name or ticker.
    pub fn resolve(&self, name: &str) -> String {
        self.orchestrator.handlers().resolver().resolve(name)
    }

    pub fn search_education(&self, query: &str) -> Vec<EducationEntry> {
        self.knowledge()
            .search_education(query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn search_reports(&self, query: &str) -> Vec<ScoredReport> {
        self.knowledge().search_reports(query)
    }

    pub fn reports(&self) -> &[ReportEntry] {
        self.knowledge().reports()
    }

    pub async fn global_stats(&self) -> Result<GlobalStats, DomainError> {
        self.market.global_stats().await
    }

    pub async fn movers(&self, count: usize) -> Result<Movers, DomainError> {
        self.market.gainers_losers(count).await
    }

    fn knowledge(&self) -> &KnowledgeIndex {
        self.orchestrator.handlers().knowledge()
    }
}
