use super::format::{apology, percent, rank, share};
use super::ResponseHandlers;
use crate::domain::entities::market::{MarketCoin, TrendingCoin};
use crate::domain::values::signal::DominanceBand;

/// Rows shown for gainers and losers.
pub const MOVERS_SHOWN: usize = 5;
/// Rows shown for the trending list.
pub const TRENDING_SHOWN: usize = 7;
/// Rows per section in the best-coin digest.
pub const DIGEST_SHOWN: usize = 3;
/// Coins considered by the market overview.
pub const OVERVIEW_COINS: u32 = 10;

impl ResponseHandlers {
    pub async fn market_overview(&self) -> String {
        let result = tokio::try_join!(
            self.market.global_stats(),
            self.market.top_coins(OVERVIEW_COINS, 1)
        );
        let (global, coins) = match result {
            Ok(pair) => pair,
            Err(e) => return apology(&e, "Couldn't fetch market data right now. Try again in a moment!"),
        };
        let cur = self.market.currency();

        let sentiment = if global.market_cap_change_24h.unwrap_or(0.0) >= 0.0 {
            "green 🟢"
        } else {
            "red 🔴"
        };

        let mut lines = vec![
            format!("The market is **{sentiment}** today."),
            String::new(),
            format!(
                "📊 **Total Market Cap:** {} ({} 24h)",
                cur.format_amount(global.total_market_cap),
                percent(global.market_cap_change_24h)
            ),
            format!("₿ **BTC Dominance:** {}", share(global.btc_dominance)),
        ];

        for (id, label) in [("bitcoin", "Bitcoin"), ("ethereum", "Ethereum")] {
            if let Some(c) = coins.iter().find(|c| c.id == id) {
                lines.push(format!(
                    "**{label}:** {} ({})",
                    cur.format_amount(c.current_price),
                    percent(c.price_change_percentage_24h)
                ));
            }
        }

        // First coin wins a tie on absolute change.
        let top_mover = coins.iter().fold(None::<&MarketCoin>, |best, c| match best {
            Some(b) if b.change_24h().abs() >= c.change_24h().abs() => Some(b),
            _ => Some(c),
        });
        if let Some(m) = top_mover {
            lines.push(String::new());
            lines.push(format!(
                "🔥 **Biggest mover in top {OVERVIEW_COINS}:** {} ({})",
                m.name,
                percent(m.price_change_percentage_24h)
            ));
        }

        lines.join("\n")
    }

    pub async fn top_gainers(&self) -> String {
        match self.market.gainers_losers(MOVERS_SHOWN).await {
            Ok(movers) => format!(
                "🚀 **Top {MOVERS_SHOWN} Gainers (24h):**\n\n{}",
                self.mover_list(&movers.gainers)
            ),
            Err(e) => apology(&e, "Couldn't fetch gainers right now. Try again in a moment!"),
        }
    }

    pub async fn top_losers(&self) -> String {
        match self.market.gainers_losers(MOVERS_SHOWN).await {
            Ok(movers) => format!(
                "📉 **Top {MOVERS_SHOWN} Losers (24h):**\n\n{}",
                self.mover_list(&movers.losers)
            ),
            Err(e) => apology(&e, "Couldn't fetch losers right now. Try again in a moment!"),
        }
    }

    fn mover_list(&self, coins: &[MarketCoin]) -> String {
        let cur = self.market.currency();
        coins
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "{}. **{}** ({}) — {} ({})",
                    i + 1,
                    c.name,
                    c.symbol.to_uppercase(),
                    cur.format_amount(c.current_price),
                    percent(c.price_change_percentage_24h)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub async fn trending(&self) -> String {
        match self.market.trending().await {
            Ok(coins) if coins.is_empty() => "No trending data available right now.".to_string(),
            Ok(coins) => format!(
                "🔥 **Trending Coins Right Now:**\n\n{}",
                trending_list(&coins, TRENDING_SHOWN)
            ),
            Err(e) => apology(&e, "Couldn't fetch trending coins. Try again shortly!"),
        }
    }

    pub async fn dominance(&self) -> String {
        let global = match self.market.global_stats().await {
            Ok(g) => g,
            Err(e) => return apology(&e, "Couldn't fetch dominance data right now."),
        };
        let others = global
            .btc_dominance
            .zip(global.eth_dominance)
            .map(|(btc, eth)| 100.0 - btc - eth);
        let band = global
            .btc_dominance
            .map_or(DominanceBand::Balanced, DominanceBand::classify);

        format!(
            "📊 **Market Dominance:**\n₿ Bitcoin: **{}**\nΞ Ethereum: **{}**\n🪙 Others: **{}**\n\n{}",
            share(global.btc_dominance),
            share(global.eth_dominance),
            share(others),
            band.narrative()
        )
    }

    pub async fn best_coin(&self) -> String {
        let result = tokio::try_join!(
            self.market.trending(),
            self.market.gainers_losers(DIGEST_SHOWN)
        );
        let (trending, movers) = match result {
            Ok(pair) => pair,
            Err(e) => return apology(&e, "Couldn't fetch market data right now. Try again in a moment!"),
        };

        let trend_list = if trending.is_empty() {
            "No trending data".to_string()
        } else {
            trending_list(&trending, DIGEST_SHOWN)
        };
        let gainer_list = movers
            .gainers
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "{}. **{}** ({}) — {}",
                    i + 1,
                    c.name,
                    c.symbol.to_uppercase(),
                    percent(c.price_change_percentage_24h)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "I can't recommend specific investments, but here's what the data shows right now:\n\n\
             🔥 **Trending Coins:**\n{trend_list}\n\n\
             🚀 **Today's Top Gainers:**\n{gainer_list}\n\n\
             **⚠️ Important:** Trending or gaining doesn't mean \"best to buy.\" High performers today could drop tomorrow. Always:\n\
             • Do your own research (DYOR)\n\
             • Never invest more than you can lose\n\
             • Consider the project's fundamentals, not just price\n\n\
             Want to research a specific coin? Try \"Tell me about [coin name]\""
        )
    }
}

fn trending_list(coins: &[TrendingCoin], limit: usize) -> String {
    coins
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{}. **{}** ({}) — Rank {}",
                i + 1,
                c.name,
                c.symbol.to_uppercase(),
                rank(c.market_cap_rank)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
