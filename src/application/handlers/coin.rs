use super::format::{apology, count, percent, rank};
use super::{Found, ResponseHandlers};
use crate::domain::entities::market::{CoinDetail, MarketCoin, SimplePrice};
use crate::domain::error::DomainError;
use tracing::info;

impl ResponseHandlers {
    pub async fn price_check(&self, message: &str) -> String {
        let Some(name) = self.extractor.coin_name(message) else {
            return "Which coin's price would you like to check? Try something like 'price of BTC' or 'ETH price'.".to_string();
        };
        let id = self.resolver.resolve(&name);

        match self.price_with_retry(&name, &id).await {
            Ok(Some(found)) => self.price_card(&name, &found),
            Ok(None) => format!(
                "Couldn't find \"{name}\". Try the full name (e.g., \"bitcoin\") or symbol (e.g., \"BTC\")."
            ),
            Err(e) => apology(&e, "Couldn't fetch the price right now. Please try again!"),
        }
    }

    fn price_card(&self, name: &str, found: &Found<SimplePrice>) -> String {
        let cur = self.market.currency();
        let header = match &found.via_search {
            Some(hit) => format!("{} ({})", hit.name, hit.symbol.to_uppercase()),
            None => name.to_uppercase(),
        };
        let p = &found.value;
        format!(
            "**{header}**\n💰 Price: {}\n📈 24h Change: {}\n📊 Market Cap: {}\n💹 24h Volume: {}",
            cur.format_amount(p.price),
            percent(p.change_24h),
            cur.format_amount(p.market_cap),
            cur.format_amount(p.volume_24h)
        )
    }

    pub async fn coin_info(&self, message: &str) -> String {
        let Some(name) = self.extractor.coin_name(message) else {
            return "Which coin would you like to know about?".to_string();
        };

        // Glossary terms win over coin lookups unless the name is a known coin.
        if !self.resolver.is_known(&name) {
            if let Some(entry) = self.knowledge.search_education(&name).first() {
                return format!("📖 **{}**\n\n{}", entry.term, entry.answer);
            }
        }

        let id = self.resolver.resolve(&name);
        match self.details_with_retry(&name, &id).await {
            Ok(Some(found)) => self.detail_card(&found.value),
            Ok(None) => format!(
                "Couldn't find detailed info for \"{name}\". Try the full name or symbol!"
            ),
            Err(e) => apology(&e, &format!("Couldn't fetch info for \"{name}\". Try the exact coin name!")),
        }
    }

    fn detail_card(&self, d: &CoinDetail) -> String {
        let cur = self.market.currency();
        format!(
            "**{} ({})**\n\n\
             💰 Price: {}\n\
             📈 24h: {}\n\
             📅 7d: {}\n\
             📊 Market Cap: {} (Rank {})\n\
             💹 24h Volume: {}\n\
             📦 Circulating: {}\n\
             🔒 Max Supply: {}\n\n\
             📝 {}",
            d.name,
            d.symbol.to_uppercase(),
            cur.format_amount(d.price),
            percent(d.change_24h),
            percent(d.change_7d),
            cur.format_amount(d.market_cap),
            rank(d.market_cap_rank),
            cur.format_amount(d.total_volume),
            count(d.circulating_supply).unwrap_or_else(|| "N/A".to_string()),
            count(d.max_supply).unwrap_or_else(|| "∞".to_string()),
            d.short_description()
        )
    }

    pub async fn compare(&self, message: &str) -> String {
        let Some((name1, name2)) = self.extractor.compare_pair(message) else {
            return "Try: \"Compare BTC vs ETH\" or \"SOL vs AVAX\"".to_string();
        };
        let id1 = self.resolver.resolve(&name1);
        let id2 = self.resolver.resolve(&name2);
        let generic = "Couldn't compare those coins right now. Try again shortly!";

        let (coin1, coin2) = match self.market.compare(&id1, &id2).await {
            Ok(pair) => pair,
            Err(e) => return apology(&e, generic),
        };
        let coin1 = match coin1 {
            Some(c) => Some(c),
            None => match self.snapshot_retry(&name1).await {
                Ok(c) => c,
                Err(e) => return apology(&e, generic),
            },
        };
        let coin2 = match coin2 {
            Some(c) => Some(c),
            None => match self.snapshot_retry(&name2).await {
                Ok(c) => c,
                Err(e) => return apology(&e, generic),
            },
        };

        match (coin1, coin2) {
            (None, None) => format!(
                "Couldn't find data for either {name1} or {name2}. Make sure you're using the correct coin names."
            ),
            (None, Some(_)) => format!("Couldn't find {name1}. Try the full name or symbol."),
            (Some(_), None) => format!("Couldn't find {name2}. Try the full name or symbol."),
            (Some(a), Some(b)) => self.compare_table(&a, &b),
        }
    }

    /// One search retry for a coin missing from the comparison snapshot.
    async fn snapshot_retry(&self, raw: &str) -> Result<Option<MarketCoin>, DomainError> {
        let Some(hit) = self.first_search_hit(raw).await? else {
            return Ok(None);
        };
        let coin = self.market.snapshot_coin(&hit.id).await?;
        if coin.is_none() {
            info!(candidate = %hit.id, "search candidate not in snapshot");
        }
        Ok(coin)
    }

    fn compare_table(&self, a: &MarketCoin, b: &MarketCoin) -> String {
        let cur = self.market.currency();
        let verdict = match a.change_24h().partial_cmp(&b.change_24h()) {
            Some(std::cmp::Ordering::Greater) => {
                format!("📈 {} is outperforming {} today.", a.name, b.name)
            }
            Some(std::cmp::Ordering::Less) => {
                format!("📈 {} is outperforming {} today.", b.name, a.name)
            }
            _ => format!("⚖️ {} and {} are moving in lockstep today.", a.name, b.name),
        };

        format!(
            "⚖️ **{} vs {}**\n\n\
             | | {} | {} |\n\
             |---|---|---|\n\
             | **Price** | {} | {} |\n\
             | **24h Change** | {} | {} |\n\
             | **Market Cap** | {} | {} |\n\
             | **Volume** | {} | {} |\n\
             | **Rank** | {} | {} |\n\n\
             {verdict}",
            a.name,
            b.name,
            a.symbol.to_uppercase(),
            b.symbol.to_uppercase(),
            cur.format_amount(a.current_price),
            cur.format_amount(b.current_price),
            percent(a.price_change_percentage_24h),
            percent(b.price_change_percentage_24h),
            cur.format_amount(a.market_cap),
            cur.format_amount(b.market_cap),
            cur.format_amount(a.total_volume),
            cur.format_amount(b.total_volume),
            rank(a.market_cap_rank),
            rank(b.market_cap_rank),
        )
    }
}
