//! Fixed-threshold bands used when narrating market data.

/// BTC dominance above this reads as money concentrated in Bitcoin.
pub const DOMINANCE_HIGH: f64 = 55.0;
/// BTC dominance below this reads as a possible alt season.
pub const DOMINANCE_LOW: f64 = 45.0;
/// 24h move (in percent) separating "slight" from "strong" momentum.
pub const MOMENTUM_STRONG: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominanceBand {
    BtcConcentrated,
    Balanced,
    AltSeason,
}

impl DominanceBand {
    pub fn classify(btc_dominance: f64) -> Self {
        if btc_dominance > DOMINANCE_HIGH {
            DominanceBand::BtcConcentrated
        } else if btc_dominance < DOMINANCE_LOW {
            DominanceBand::AltSeason
        } else {
            DominanceBand::Balanced
        }
    }

    pub fn narrative(&self) -> &'static str {
        match self {
            DominanceBand::BtcConcentrated => {
                "BTC dominance is high — money is concentrated in Bitcoin. Altcoins may underperform until dominance drops."
            }
            DominanceBand::AltSeason => {
                "BTC dominance is low — could signal alt season! Altcoins might be gaining traction."
            }
            DominanceBand::Balanced => {
                "BTC dominance is moderate — the market is relatively balanced between BTC and alts."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Momentum {
    StrongBullish,
    MildPositive,
    MildNegative,
    StrongBearish,
}

impl Momentum {
    pub fn classify(change_24h: f64) -> Self {
        if change_24h > MOMENTUM_STRONG {
            Momentum::StrongBullish
        } else if change_24h > 0.0 {
            Momentum::MildPositive
        } else if change_24h > -MOMENTUM_STRONG {
            Momentum::MildNegative
        } else {
            Momentum::StrongBearish
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Momentum::StrongBullish => "strong bullish momentum",
            Momentum::MildPositive => "slight positive movement",
            Momentum::MildNegative => "slight negative movement",
            Momentum::StrongBearish => "strong bearish pressure",
        }
    }
}

/// Whether short, medium and long windows agree on direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendAlignment {
    ConsistentlyUp,
    ConsistentlyDown,
    Mixed,
}

impl TrendAlignment {
    pub fn classify(change_24h: f64, change_7d: f64, change_30d: f64) -> Self {
        let changes = [change_24h, change_7d, change_30d];
        if changes.iter().all(|c| *c > 0.0) {
            TrendAlignment::ConsistentlyUp
        } else if changes.iter().all(|c| *c < 0.0) {
            TrendAlignment::ConsistentlyDown
        } else {
            TrendAlignment::Mixed
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TrendAlignment::ConsistentlyUp => {
                "🟢 All timeframes are positive — the trend has been consistently upward recently."
            }
            TrendAlignment::ConsistentlyDown => {
                "🔴 All timeframes are negative — the trend has been consistently downward recently."
            }
            TrendAlignment::Mixed => "🟡 Mixed signals across timeframes — the trend is uncertain.",
        }
    }
}
