//! Rule-based intent classification.
//!
//! [`INTENT_TABLE`] is a priority list: rows are tried top to bottom and,
//! within a row, patterns left to right. The first hit wins, so a later row
//! never overrides an earlier match for the same text. Adding an intent means
//! adding a row; the matching loop never changes.
//!
//! "what is X" / "explain X" phrasing lives only in the `Education` row. The
//! dialogue layer falls back from education to coin info when the glossary
//! has no entry, which makes that priority explicit instead of depending on
//! which row happens to come first.

use crate::domain::error::DomainError;
use crate::domain::values::intent::Intent;
use regex::Regex;
use tracing::debug;

pub const INTENT_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &[r"^(hi|hello|hey|howdy|sup|yo|hola|good\s*(morning|evening|afternoon|night)|namaste)\b"],
    ),
    (
        Intent::Help,
        &[r"\b(help|what can you do|commands|features|menu|options)\b"],
    ),
    (
        Intent::MarketOverview,
        &[
            r"\b(market|overall)\s*(overview|summary|status|update|today|now|doing|look)",
            r"\bhow('?s| is| are)\s*(the )?(market|crypto|things)",
            r"\b(green|red)\s*day",
            r"\bmarket\s*(cap|sentiment|mood)",
            r"\bwhat'?s\s*(happening|going on|up)\s*(in|with)?\s*(the )?(market|crypto)",
        ],
    ),
    (
        Intent::PriceCheck,
        &[
            r"\b(price|cost|value|rate|worth)\s*(of|for)?\s+(\w[\w\s]*)",
            r"\bhow\s*much\s*(is|does|for)\s+(\w[\w\s]*)",
            r"\b(\w+)\s*(price|cost|value|rate|kya hai|kitna)",
            r"^(btc|eth|sol|bnb|xrp|ada|doge|dot|matic|avax|link|shib|ltc|uni|atom|pepe|ton|trx|sui|near|apt|arb|op)\s*\??$",
        ],
    ),
    (
        Intent::TopGainers,
        &[
            r"\b(top|best|biggest|highest)\s*(gainer|winner|performer|pump)",
            r"\bwho\s*(gained|pumped|went up|mooned|rallied)",
            r"\bgain(ed|ing|s)?\s*(the )?(most|highest|biggest)",
            r"\bwhich\s*(coin|crypto)\s*(gained|pumped|up|rallied)",
            r"\bpump(ed|ing)?\s*(the most|today|hard)",
        ],
    ),
    (
        Intent::TopLosers,
        &[
            r"\b(top|worst|biggest|highest)\s*(loser|dump|decline|drop|crash)",
            r"\bwho\s*(lost|dumped|dropped|crashed|went down|tanked)",
            r"\blos(t|ing|e|es)\s*(the )?(most|highest|biggest)",
            r"\bwhich\s*(coin|crypto)\s*(lost|dumped|dropped|crashed|tanked)",
            r"\bdump(ed|ing)?\s*(the most|today|hard)",
        ],
    ),
    (
        Intent::Trending,
        &[
            r"\b(trending|hot|popular|buzzing|viral|hype)",
            r"\bwhat'?s\s*(trending|hot|popular)",
            r"\btrend(s|ing)?\s*(today|now|right now|coins?)",
        ],
    ),
    (
        Intent::Compare,
        &[
            r"\bcompare\s+(\w+)\s*(\s(and|vs|versus|with|or)\s|&)\s*(\w+)",
            r"\b(\w+)\s+(vs\.?|versus|compared to|or)\s+(\w+)",
        ],
    ),
    (
        Intent::CoinInfo,
        &[r"\b(tell|info|about|details)\s*(me )?(about )?\s*(\w[\w\s]*)"],
    ),
    (
        Intent::Report,
        &[
            r"\b(report|analysis|vector|on-?chain|week\s*on|blog|research|article)\b",
            r"\blatest\s*(report|analysis|research)",
            r"\bwhat\s*(did|does|do)\s*(the )?(report|analysis|vector|blog)",
        ],
    ),
    (
        Intent::Dominance,
        &[r"\b(btc|bitcoin|eth|ethereum)?\s*dominance"],
    ),
    (
        Intent::Investment,
        &[
            r"\b(should\s*i|is\s*it\s*(good|wise|safe|smart|right)\s*to)\s*(buy|sell|invest|hold|trade|put money)",
            r"\b(invest|put money|put ₹|put rs|put \$)\s*(in|into|on)\s+",
            r"\b(profit|loss|return|gain|earn|make money|lose money)\s*(if|when|from|on|by)\s*(i )?(invest|buy|sell|hold|put)",
            r"\bhow\s*much\s*(profit|loss|return|gain|money|will i)\s*(will|can|do|if|from|on)",
            r"\b(will|can|could)\s*(i )?(make|earn|gain|lose|get)\s*(money|profit|return|₹|\$|rs)",
            r"\b(good|best|right|safe|wise)\s*(time|moment|opportunity)\s*to\s*(buy|sell|invest|enter|exit)",
            r"\bworth\s*(buying|selling|investing|holding)",
            r"\b(buy|sell|hold)\s*(or\s*(buy|sell|hold))?\s*\?",
        ],
    ),
    (
        Intent::Prediction,
        &[
            r"\b(will|can|could|shall)\s+(\w+)\s*(go|reach|hit|cross|touch|pump|dump|crash|moon|rise|fall|drop)",
            r"\b(\w+)\s*(price\s*)?(prediction|forecast|target|potential|future|outlook)",
            r"\b(where|what)\s*(will|would|could)\s+(\w+)\s*(be|go|reach|price)",
            r"\bwhen\s*(will|would|could)\s+(\w+)\s*(reach|hit|cross|touch|go to|moon)",
            r"\b(moon|lambo|100x|10x|1000x)\b",
        ],
    ),
    (
        Intent::BestCoin,
        &[
            r"\b(best|top|good|safest|most promising)\s*(coin|crypto|token|investment)\s*(to\s*(buy|invest|hold))?",
            r"\bwhich\s*(coin|crypto|token)\s*(should|to|can|do)\s*(i )?(buy|invest|hold|pick)",
            r"\bwhat\s*(should|to|can)\s*(i )?(buy|invest in|hold|pick)",
            r"\brecommend\s*(a )?(coin|crypto|token|investment)",
            r"\bsuggest\s*(a )?(coin|crypto|token)",
        ],
    ),
    (
        Intent::Education,
        &[r"\b(what\s*(is|are|does)|explain|meaning\s*of|define|eli5)\s+(.+)"],
    ),
];

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    /// Text matched by the winning pattern; `None` for `Unknown`.
    pub matched: Option<String>,
    /// The normalized message that was classified.
    pub normalized: String,
}

struct IntentRule {
    intent: Intent,
    patterns: Vec<Regex>,
}

pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    pub fn new() -> Result<Self, DomainError> {
        Self::from_table(INTENT_TABLE)
    }

    /// Build from an arbitrary priority table.
    pub fn from_table(table: &[(Intent, &[&str])]) -> Result<Self, DomainError> {
        let rules = table
            .iter()
            .map(|(intent, patterns)| {
                Ok(IntentRule {
                    intent: *intent,
                    patterns: patterns
                        .iter()
                        .map(|p| Regex::new(p))
                        .collect::<Result<_, _>>()?,
                })
            })
            .collect::<Result<_, DomainError>>()?;
        Ok(Self { rules })
    }

    pub fn classify(&self, message: &str) -> Classification {
        let normalized = normalize(message);

        for rule in &self.rules {
            for pattern in &rule.patterns {
                if let Some(m) = pattern.find(&normalized) {
                    debug!(intent = %rule.intent, pattern = pattern.as_str(), "classified");
                    return Classification {
                        intent: rule.intent,
                        matched: Some(m.as_str().to_string()),
                        normalized,
                    };
                }
            }
        }

        debug!(intent = %Intent::Unknown, "no pattern matched");
        Classification {
            intent: Intent::Unknown,
            matched: None,
            normalized,
        }
    }
}

/// Trim and lowercase.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}
