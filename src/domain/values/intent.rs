use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classified purpose of a user message.
///
/// Variant order mirrors the classifier's priority table; `Unknown` is the
/// catch-all when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Help,
    MarketOverview,
    PriceCheck,
    TopGainers,
    TopLosers,
    Trending,
    Compare,
    CoinInfo,
    Report,
    Dominance,
    Investment,
    Prediction,
    BestCoin,
    Education,
    Unknown,
}

impl Intent {
    pub const ALL: [Intent; 16] = [
        Intent::Greeting,
        Intent::Help,
        Intent::MarketOverview,
        Intent::PriceCheck,
        Intent::TopGainers,
        Intent::TopLosers,
        Intent::Trending,
        Intent::Compare,
        Intent::CoinInfo,
        Intent::Report,
        Intent::Dominance,
        Intent::Investment,
        Intent::Prediction,
        Intent::BestCoin,
        Intent::Education,
        Intent::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::MarketOverview => "market_overview",
            Intent::PriceCheck => "price_check",
            Intent::TopGainers => "top_gainers",
            Intent::TopLosers => "top_losers",
            Intent::Trending => "trending",
            Intent::Compare => "compare",
            Intent::CoinInfo => "coin_info",
            Intent::Report => "report",
            Intent::Dominance => "dominance",
            Intent::Investment => "investment",
            Intent::Prediction => "prediction",
            Intent::BestCoin => "best_coin",
            Intent::Education => "education",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Intent::ALL
            .into_iter()
            .find(|i| i.as_str() == tag)
            .ok_or_else(|| format!("Unknown intent: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip_covers_every_variant() {
        for intent in Intent::ALL {
            assert_eq!(intent.to_string().parse::<Intent>().unwrap(), intent);
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!("weather".parse::<Intent>().is_err());
    }
}
