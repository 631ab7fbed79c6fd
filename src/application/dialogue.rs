use crate::application::classifier::{Classification, IntentClassifier};
use crate::application::handlers::knowledge::EMPTY_PROMPT;
use crate::application::handlers::ResponseHandlers;
use crate::domain::values::intent::Intent;
use tracing::debug;

/// Entry point: classify, dispatch, and escalate when the classifier is
/// inconclusive.
///
/// Stateless across calls. Multi-turn context, if ever needed, belongs in an
/// explicit session value passed to [`DialogueOrchestrator::respond`].
pub struct DialogueOrchestrator {
    classifier: IntentClassifier,
    handlers: ResponseHandlers,
}

impl DialogueOrchestrator {
    pub fn new(classifier: IntentClassifier, handlers: ResponseHandlers) -> Self {
        Self {
            classifier,
            handlers,
        }
    }

    pub fn classify(&self, message: &str) -> Classification {
        self.classifier.classify(message)
    }

    pub fn handlers(&self) -> &ResponseHandlers {
        &self.handlers
    }

    pub async fn respond(&self, message: &str) -> String {
        if message.trim().is_empty() {
            return EMPTY_PROMPT.to_string();
        }

        let Classification {
            intent, normalized, ..
        } = self.classifier.classify(message);
        let raw = normalized.as_str();
        let h = &self.handlers;

        match intent {
            Intent::Greeting => h.greeting(),
            Intent::Help => h.help(),
            Intent::MarketOverview => h.market_overview().await,
            Intent::PriceCheck => h.price_check(raw).await,
            Intent::TopGainers => h.top_gainers().await,
            Intent::TopLosers => h.top_losers().await,
            Intent::Trending => h.trending().await,
            Intent::Compare => h.compare(raw).await,
            Intent::CoinInfo => h.coin_info(raw).await,
            Intent::Report => h.report(raw),
            Intent::Dominance => h.dominance().await,
            Intent::Investment => h.investment(raw).await,
            Intent::Prediction => h.prediction(raw).await,
            Intent::BestCoin => h.best_coin().await,
            Intent::Education => match h.education(raw) {
                Some(answer) => answer,
                None => {
                    debug!("no glossary entry, treating as coin_info");
                    h.coin_info(raw).await
                }
            },
            Intent::Unknown => self.escalate(raw).await,
        }
    }

    /// Fallback chain for unclassified text, most to least confident:
    /// glossary, direct coin name, coin mentioned in a sentence, then a
    /// "didn't understand" reply.
    async fn escalate(&self, raw: &str) -> String {
        let h = &self.handlers;

        if let Some(answer) = h.education(raw) {
            return answer;
        }

        let known = |name: Option<String>| name.is_some_and(|n| h.resolver().is_known(&n));

        if known(h.extractor().coin_name(raw)) {
            debug!("unknown intent escalated to price_check");
            return h.price_check(raw).await;
        }
        if known(h.extractor().from_sentence(raw)) {
            debug!("unknown intent escalated to investment");
            return h.investment(raw).await;
        }

        h.unknown()
    }
}
