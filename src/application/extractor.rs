//! Pull a candidate coin name out of free text.
//!
//! Two strategies serve different phrasings:
//! - [`EntityExtractor::coin_name`] strips filler from direct queries such as
//!   "price of solana".
//! - [`EntityExtractor::from_sentence`] scans free-form sentences such as
//!   "should I invest in toncoin right now?" for a known alias first.
//!
//! Results are unresolved candidates; run them through the alias resolver.

use crate::domain::error::DomainError;
use crate::domain::values::alias_match::AliasMatch;
use regex::Regex;

/// Aliases scanned by sentence extraction, in priority order. Longer names
/// precede their tickers so that "ethereum" wins over "eth".
const KNOWN_COINS: &[&str] = &[
    "bitcoin", "btc", "ethereum", "eth", "solana", "sol", "bnb", "binance", "xrp", "ripple",
    "cardano", "ada", "dogecoin", "doge", "polkadot", "dot", "polygon", "matic", "avalanche",
    "avax", "chainlink", "link", "shiba", "shib", "uniswap", "uni", "litecoin", "ltc", "cosmos",
    "atom", "near", "stellar", "xlm", "algorand", "algo", "aptos", "apt", "arbitrum", "arb",
    "optimism", "op", "sui", "ton", "toncoin", "tether", "usdt", "usdc", "pepe", "tron", "trx",
    "wif", "dogwifhat",
];

const NAME_FILLER: &str = r"\b(what'?s|how'?s|what|is|the|price|of|for|how|much|does|cost|tell|me|about|info|details|coin|crypto|token|check|get|show|current|today|now|please|can|you)\b";

const SENTENCE_FILLER: &str = r"\b(should|would|could|will|can|do|did|does|is|are|was|were|i|we|you|they|it|if|the|a|an|in|on|at|to|of|for|and|or|but|how|much|many|what|when|where|which|who|why|not|no|yes|my|this|that|right now|right|now|today|tomorrow|currently|invest|investment|investing|buy|buying|sell|selling|hold|holding|trade|trading|put|money|profit|loss|return|gain|earn|make|lose|get|good|bad|best|worst|safe|wise|smart|time|moment|go up|go down|reach|hit|cross|moon|pump|dump|crash|rise|fall|drop|price|prediction|forecast|target|worth|think|believe|suggest|recommend)\b";

const COMPARE_PATTERNS: &[&str] = &[
    r"\bcompare\s+(\w+)\s*(?:\s(?:and|vs|versus|with|or)\s|&)\s*(\w+)",
    r"\b(\w+)\s+(?:vs\.?|versus|compared\s+to)\s+(\w+)",
];

/// Longest candidate accepted from filler stripping.
pub const MAX_NAME_LEN: usize = 29;
/// Longest candidate accepted from sentence stripping.
pub const MAX_SENTENCE_NAME_LEN: usize = 24;

pub struct EntityExtractor {
    strategy: AliasMatch,
    name_filler: Regex,
    sentence_filler: Regex,
    name_punct: Regex,
    sentence_punct: Regex,
    whitespace: Regex,
    compare: Vec<Regex>,
}

impl EntityExtractor {
    pub fn new(strategy: AliasMatch) -> Result<Self, DomainError> {
        Ok(Self {
            strategy,
            name_filler: Regex::new(NAME_FILLER)?,
            sentence_filler: Regex::new(SENTENCE_FILLER)?,
            name_punct: Regex::new(r"[?.!,']")?,
            sentence_punct: Regex::new(r"[?.!,₹$]")?,
            whitespace: Regex::new(r"\s+")?,
            compare: COMPARE_PATTERNS
                .iter()
                .map(|p| Regex::new(p))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Filler-stripping extraction for direct queries.
    pub fn coin_name(&self, message: &str) -> Option<String> {
        let msg = message.trim().to_lowercase();
        let stripped = self.name_filler.replace_all(&msg, "");
        let collapsed = self.whitespace.replace_all(stripped.trim(), " ");
        let cleaned = self.name_punct.replace_all(&collapsed, "");
        bounded(cleaned.trim(), MAX_NAME_LEN)
    }

    /// Alias-scan extraction for free-form sentences, falling back to a
    /// broader filler strip when no known alias appears.
    pub fn from_sentence(&self, message: &str) -> Option<String> {
        let msg = message.trim().to_lowercase();

        if let Some(alias) = self.scan_alias(&msg) {
            return Some(alias.to_string());
        }

        let stripped = self.sentence_filler.replace_all(&msg, "");
        let cleaned = self.sentence_punct.replace_all(&stripped, "");
        let collapsed = self.whitespace.replace_all(cleaned.trim(), " ");
        bounded(collapsed.trim(), MAX_SENTENCE_NAME_LEN)
    }

    /// First known alias present in `message` under the configured strategy.
    pub fn scan_alias(&self, message: &str) -> Option<&'static str> {
        KNOWN_COINS
            .iter()
            .copied()
            .find(|coin| self.strategy.matches(message, coin))
    }

    /// Two raw coin names from "compare X and Y" / "X vs Y" phrasing.
    pub fn compare_pair(&self, message: &str) -> Option<(String, String)> {
        let msg = message.to_lowercase();
        self.compare.iter().find_map(|re| {
            let caps = re.captures(&msg)?;
            Some((caps[1].to_string(), caps[2].to_string()))
        })
    }
}

fn bounded(candidate: &str, max_len: usize) -> Option<String> {
    let len = candidate.chars().count();
    if (1..=max_len).contains(&len) {
        Some(candidate.to_string())
    } else {
        None
    }
}
