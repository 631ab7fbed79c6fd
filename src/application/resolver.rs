use std::collections::HashMap;

/// Common names and tickers mapped to upstream canonical IDs.
const COIN_ALIASES: &[(&str, &str)] = &[
    ("btc", "bitcoin"),
    ("bitcoin", "bitcoin"),
    ("eth", "ethereum"),
    ("ether", "ethereum"),
    ("ethereum", "ethereum"),
    ("sol", "solana"),
    ("solana", "solana"),
    ("bnb", "binancecoin"),
    ("binance", "binancecoin"),
    ("xrp", "ripple"),
    ("ripple", "ripple"),
    ("ada", "cardano"),
    ("cardano", "cardano"),
    ("doge", "dogecoin"),
    ("dogecoin", "dogecoin"),
    ("dot", "polkadot"),
    ("polkadot", "polkadot"),
    ("matic", "matic-network"),
    ("polygon", "matic-network"),
    ("avax", "avalanche-2"),
    ("avalanche", "avalanche-2"),
    ("link", "chainlink"),
    ("chainlink", "chainlink"),
    ("shib", "shiba-inu"),
    ("shiba inu", "shiba-inu"),
    ("shiba", "shiba-inu"),
    ("uni", "uniswap"),
    ("uniswap", "uniswap"),
    ("ltc", "litecoin"),
    ("litecoin", "litecoin"),
    ("atom", "cosmos"),
    ("cosmos", "cosmos"),
    ("near", "near"),
    ("near protocol", "near"),
    ("xlm", "stellar"),
    ("stellar", "stellar"),
    ("algo", "algorand"),
    ("algorand", "algorand"),
    ("apt", "aptos"),
    ("aptos", "aptos"),
    ("arb", "arbitrum"),
    ("arbitrum", "arbitrum"),
    ("op", "optimism"),
    ("optimism", "optimism"),
    ("sui", "sui"),
    ("ton", "the-open-network"),
    ("toncoin", "the-open-network"),
    ("usdt", "tether"),
    ("tether", "tether"),
    ("usdc", "usd-coin"),
    ("pepe", "pepe"),
    ("wif", "dogwifhat"),
    ("dogwifhat", "dogwifhat"),
    ("trx", "tron"),
    ("tron", "tron"),
];

/// Case-insensitive alias → canonical ID table. Pure, no I/O.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    aliases: HashMap<&'static str, &'static str>,
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasResolver {
    pub fn new() -> Self {
        Self {
            aliases: COIN_ALIASES.iter().copied().collect(),
        }
    }

    /// Best-effort resolution: the canonical ID when the alias is known,
    /// otherwise the normalized input itself. The result is not validated.
    pub fn resolve(&self, input: &str) -> String {
        let key = input.trim().to_lowercase();
        match self.aliases.get(key.as_str()) {
            Some(id) => (*id).to_string(),
            None => key,
        }
    }

    /// Strict lookup: `Some` only for aliases in the table.
    pub fn lookup(&self, input: &str) -> Option<&'static str> {
        self.aliases.get(input.trim().to_lowercase().as_str()).copied()
    }

    pub fn is_known(&self, input: &str) -> bool {
        self.lookup(input).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_and_name_resolve_to_same_id() {
        let r = AliasResolver::new();
        assert_eq!(r.resolve("btc"), "bitcoin");
        assert_eq!(r.resolve("bitcoin"), "bitcoin");
        assert_eq!(r.resolve("  BTC "), "bitcoin");
    }

    #[test]
    fn test_unknown_input_passes_through() {
        let r = AliasResolver::new();
        assert_eq!(r.resolve("unknowntoken"), "unknowntoken");
        assert!(r.lookup("unknowntoken").is_none());
        assert!(!r.is_known("unknowntoken"));
    }

    #[test]
    fn test_multi_word_alias() {
        let r = AliasResolver::new();
        assert_eq!(r.lookup("Shiba Inu"), Some("shiba-inu"));
        assert_eq!(r.resolve("near protocol"), "near");
    }
}
