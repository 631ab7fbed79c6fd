use super::format::{apology, percent, rank};
use super::ResponseHandlers;
use crate::domain::values::signal::{Momentum, TrendAlignment};

const INVESTMENT_GUIDE: &str = "I can't predict profits or tell you what to invest in — no one can with certainty! 🎯

But I **can** help you research. Try:
• \"Price of BTC\" — check current price and 24h trend
• \"Compare ETH vs SOL\" — side-by-side comparison
• \"Top gainers today\" — see what's performing well
• \"What's trending?\" — see what the market is buzzing about

**⚠️ Disclaimer:** I'm a data bot, not a financial advisor. Always do your own research (DYOR) before investing.";

const PREDICTION_GUIDE: &str = "I can't predict future prices — and honestly, no one reliably can! 🔮

What I **can** do is show you current data to help you form your own view:
• \"Price of BTC\" — current price + 24h trend
• \"Top gainers today\" — what's performing right now
• \"Bitcoin dominance\" — market structure overview

**⚠️ Be cautious** of anyone claiming to know exactly where a coin is going.";

impl ResponseHandlers {
    /// Current snapshot plus a momentum band; never a recommendation.
    pub async fn investment(&self, message: &str) -> String {
        let Some(name) = self.extractor.from_sentence(message) else {
            return INVESTMENT_GUIDE.to_string();
        };
        let id = self.resolver.resolve(&name);

        let found = match self.price_with_retry(&name, &id).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                return format!(
                    "Couldn't find data for \"{name}\". Try using the full coin name or symbol!\n\n\
                     **⚠️ Disclaimer:** I can show you data, but I can't predict future prices or profits."
                )
            }
            Err(e) => return apology(&e, "Couldn't fetch that data right now. Try again in a moment!"),
        };

        let cur = self.market.currency();
        let label = match &found.via_search {
            Some(hit) => hit.name.clone(),
            None => name.to_uppercase(),
        };
        let p = &found.value;
        let change = p.change_24h.unwrap_or(0.0);
        let trend = if change >= 0.0 { "up 📈" } else { "down 📉" };

        format!(
            "I can't predict future profits, but here's what **{label}** looks like right now:\n\n\
             💰 **Current Price:** {}\n\
             📈 **24h Change:** {} (trending {trend})\n\
             📊 **Market Cap:** {}\n\
             💹 **24h Volume:** {}\n\n\
             📋 **Current Momentum:** {}\n\n\
             **⚠️ Important:** Crypto is highly volatile. Past performance doesn't guarantee future returns. \
             Never invest more than you can afford to lose. This is data, not financial advice — always DYOR!\n\n\
             Want deeper research? Try:\n\
             • \"Tell me about {name}\" — for detailed coin info\n\
             • \"Compare {name} vs BTC\" — benchmark against Bitcoin",
            cur.format_amount(p.price),
            percent(p.change_24h),
            cur.format_amount(p.market_cap),
            cur.format_amount(p.volume_24h),
            Momentum::classify(change).describe(),
        )
    }

    /// Recent trend across 24h/7d/30d; never a forecast.
    pub async fn prediction(&self, message: &str) -> String {
        let Some(name) = self.extractor.from_sentence(message) else {
            return PREDICTION_GUIDE.to_string();
        };
        let id = self.resolver.resolve(&name);

        let detail = match self.details_with_retry(&name, &id).await {
            Ok(Some(found)) => found.value,
            Ok(None) => {
                return format!(
                    "Couldn't find data for \"{name}\".\n\n🔮 Even if I could, price predictions are unreliable — always DYOR!"
                )
            }
            Err(e) => return apology(&e, "Couldn't fetch trend data right now. Try again shortly!"),
        };

        let cur = self.market.currency();
        let d24 = detail.change_24h.unwrap_or(0.0);
        let d7 = detail.change_7d.unwrap_or(0.0);
        let d30 = detail.change_30d.unwrap_or(0.0);

        format!(
            "I can't predict where **{}** will go, but here's the recent trend data:\n\n\
             💰 **Price:** {}\n\
             📈 **24h:** {}\n\
             📅 **7d:** {}\n\
             📆 **30d:** {}\n\
             📊 **Rank:** {}\n\n\
             {}\n\n\
             **⚠️ Remember:** Past trends don't predict the future. Crypto is volatile and unpredictable. This is data, not a forecast!",
            detail.name,
            cur.format_amount(detail.price),
            percent(Some(d24)),
            percent(Some(d7)),
            percent(Some(d30)),
            rank(detail.market_cap_rank),
            TrendAlignment::classify(d24, d7, d30).describe(),
        )
    }
}
