//! Typed views over upstream market payloads.
//!
//! The cache stores raw JSON so that every query type shares one storage
//! shape; these types are parsed on the way out.

use crate::domain::error::DomainError;
use crate::domain::values::currency::Currency;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Characters of coin description kept in answers.
pub const DESCRIPTION_LIMIT: usize = 300;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GlobalStats {
    pub total_market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub btc_dominance: Option<f64>,
    pub eth_dominance: Option<f64>,
    pub active_cryptocurrencies: Option<u64>,
}

impl GlobalStats {
    pub fn from_payload(payload: &Value, currency: Currency) -> Result<Self, DomainError> {
        let g = payload
            .get("data")
            .ok_or_else(|| DomainError::Parse("global payload missing data".into()))?;
        let code = currency.code();
        Ok(Self {
            total_market_cap: g["total_market_cap"][code].as_f64(),
            total_volume: g["total_volume"][code].as_f64(),
            market_cap_change_24h: g["market_cap_change_percentage_24h_usd"].as_f64(),
            btc_dominance: g["market_cap_percentage"]["btc"].as_f64(),
            eth_dominance: g["market_cap_percentage"]["eth"].as_f64(),
            active_cryptocurrencies: g["active_cryptocurrencies"].as_u64(),
        })
    }
}

/// One row of the market-cap ordered listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketCoin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
}

impl MarketCoin {
    pub fn list_from_payload(payload: &Value) -> Result<Vec<Self>, DomainError> {
        Ok(serde_json::from_value(payload.clone())?)
    }

    /// 24h change with a missing value counted as flat.
    pub fn change_24h(&self) -> f64 {
        self.price_change_percentage_24h.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimplePrice {
    pub price: Option<f64>,
    pub change_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
}

impl SimplePrice {
    /// `None` when the payload has no priced entry for `id`, which is how the
    /// upstream reports an unknown coin.
    pub fn from_payload(payload: &Value, id: &str, currency: Currency) -> Option<Self> {
        let entry = payload.get(id)?;
        let code = currency.code();
        let price = entry.get(code).and_then(Value::as_f64)?;
        Some(Self {
            price: Some(price),
            change_24h: entry[format!("{code}_24h_change")].as_f64(),
            market_cap: entry[format!("{code}_market_cap")].as_f64(),
            volume_24h: entry[format!("{code}_24h_vol")].as_f64(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub change_24h: Option<f64>,
    pub change_7d: Option<f64>,
    pub change_30d: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub max_supply: Option<f64>,
}

#[derive(Deserialize)]
struct RawCoinDetail {
    id: String,
    name: String,
    symbol: String,
    #[serde(default)]
    market_cap_rank: Option<u32>,
    #[serde(default)]
    description: HashMap<String, Option<String>>,
    #[serde(default)]
    market_data: Option<RawMarketData>,
}

#[derive(Deserialize)]
struct RawMarketData {
    #[serde(default)]
    current_price: HashMap<String, Option<f64>>,
    #[serde(default)]
    market_cap: HashMap<String, Option<f64>>,
    #[serde(default)]
    total_volume: HashMap<String, Option<f64>>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    price_change_percentage_30d: Option<f64>,
    #[serde(default)]
    circulating_supply: Option<f64>,
    #[serde(default)]
    max_supply: Option<f64>,
}

impl CoinDetail {
    /// Parse a coin detail payload. A payload without market data counts as
    /// not found: there is nothing to answer with.
    pub fn from_payload(payload: &Value, currency: Currency) -> Result<Self, DomainError> {
        let raw: RawCoinDetail = serde_json::from_value(payload.clone())?;
        let md = raw
            .market_data
            .ok_or_else(|| DomainError::NotFound(format!("no market data for {}", raw.id)))?;
        let code = currency.code();
        let pick = |m: &HashMap<String, Option<f64>>| m.get(code).copied().flatten();

        let description = raw
            .description
            .get("en")
            .cloned()
            .flatten()
            .map(|d| strip_tags(&d))
            .filter(|d| !d.trim().is_empty());

        Ok(Self {
            id: raw.id,
            name: raw.name,
            symbol: raw.symbol,
            market_cap_rank: raw.market_cap_rank,
            description,
            price: pick(&md.current_price),
            market_cap: pick(&md.market_cap),
            total_volume: pick(&md.total_volume),
            change_24h: md.price_change_percentage_24h,
            change_7d: md.price_change_percentage_7d,
            change_30d: md.price_change_percentage_30d,
            circulating_supply: md.circulating_supply,
            max_supply: md.max_supply,
        })
    }

    /// Description cut to [`DESCRIPTION_LIMIT`] characters.
    pub fn short_description(&self) -> String {
        match &self.description {
            Some(d) => format!("{}...", d.chars().take(DESCRIPTION_LIMIT).collect::<String>()),
            None => "No description available.".to_string(),
        }
    }
}

/// Remove `<...>` markup. An unterminated `<` is kept as text.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub price_btc: Option<f64>,
}

impl TrendingCoin {
    pub fn list_from_payload(payload: &Value) -> Vec<Self> {
        payload["coins"]
            .as_array()
            .map(|coins| {
                coins
                    .iter()
                    .filter_map(|c| {
                        let item = c.get("item")?;
                        Some(Self {
                            id: item["id"].as_str()?.to_string(),
                            name: item["name"].as_str()?.to_string(),
                            symbol: item["symbol"].as_str().unwrap_or_default().to_string(),
                            market_cap_rank: item["market_cap_rank"].as_u64().map(|r| r as u32),
                            price_btc: item["price_btc"].as_f64(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
}

impl SearchHit {
    pub fn list_from_payload(payload: &Value, limit: usize) -> Vec<Self> {
        payload["coins"]
            .as_array()
            .map(|coins| {
                coins
                    .iter()
                    .filter_map(|c| {
                        Some(Self {
                            id: c["id"].as_str()?.to_string(),
                            name: c["name"].as_str().unwrap_or_default().to_string(),
                            symbol: c["symbol"].as_str().unwrap_or_default().to_string(),
                            market_cap_rank: c["market_cap_rank"].as_u64().map(|r| r as u32),
                        })
                    })
                    .take(limit)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Top and bottom of a 24h-change ranking.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Movers {
    pub gainers: Vec<MarketCoin>,
    pub losers: Vec<MarketCoin>,
}

impl Movers {
    /// Stable-sort by 24h change descending; the first `count` are gainers,
    /// the last `count` reversed are losers (most negative first).
    pub fn rank(mut coins: Vec<MarketCoin>, count: usize) -> Self {
        coins.sort_by(|a, b| {
            b.change_24h()
                .partial_cmp(&a.change_24h())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let gainers = coins.iter().take(count).cloned().collect();
        let losers = coins.iter().rev().take(count).cloned().collect();
        Self { gainers, losers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<a href=\"x\">Bitcoin</a> is <b>digital</b>"), "Bitcoin is digital");
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
    }

    #[test]
    fn test_simple_price_missing_id_is_none() {
        let payload = json!({});
        assert!(SimplePrice::from_payload(&payload, "bitcoin", Currency::Inr).is_none());
    }

    #[test]
    fn test_simple_price_reads_currency_keys() {
        let payload = json!({"bitcoin": {"usd": 64000.0, "usd_24h_change": -1.5, "usd_market_cap": 1.2e12, "usd_24h_vol": 3.0e10}});
        let p = SimplePrice::from_payload(&payload, "bitcoin", Currency::Usd).unwrap();
        assert_eq!(p.price, Some(64000.0));
        assert_eq!(p.change_24h, Some(-1.5));
        assert!(SimplePrice::from_payload(&payload, "bitcoin", Currency::Inr).is_none());
    }

    #[test]
    fn test_coin_detail_without_market_data_is_not_found() {
        let payload = json!({"id": "x", "name": "X", "symbol": "x"});
        let err = CoinDetail::from_payload(&payload, Currency::Inr).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_movers_rank_treats_missing_change_as_flat() {
        let coin = |id: &str, change: Option<f64>| MarketCoin {
            id: id.into(),
            symbol: id.into(),
            name: id.into(),
            current_price: Some(1.0),
            market_cap: None,
            market_cap_rank: None,
            total_volume: None,
            price_change_percentage_24h: change,
            price_change_percentage_1h_in_currency: None,
            price_change_percentage_7d_in_currency: None,
        };
        let movers = Movers::rank(vec![coin("a", Some(-1.0)), coin("b", None), coin("c", Some(2.0))], 1);
        assert_eq!(movers.gainers[0].id, "c");
        assert_eq!(movers.losers[0].id, "a");
    }
}
