//! Shared test helpers: a scripted market data source and a manual clock.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use cryptochat::config::ChatConfig;
use cryptochat::domain::error::DomainError;
use cryptochat::domain::ports::clock::Clock;
use cryptochat::domain::ports::market_data::{MarketDataSource, MarketQuery};
use cryptochat::domain::values::currency::Currency;
use cryptochat::CryptoChat;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Scripted upstream reply for one cache key.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    RateLimited,
    NotFound,
    Upstream,
}

impl Reply {
    fn into_result(self) -> Result<Value, DomainError> {
        match self {
            Reply::Json(v) => Ok(v),
            Reply::RateLimited => Err(DomainError::RateLimited),
            Reply::NotFound => Err(DomainError::NotFound("scripted 404".into())),
            Reply::Upstream => Err(DomainError::Upstream("scripted failure".into())),
        }
    }
}

/// Market data source answering from a per-key script and counting calls.
/// Unscripted keys fail as upstream errors.
#[derive(Default)]
pub struct FakeSource {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<HashMap<String, usize>>,
    delay_ms: Mutex<u64>,
}

impl FakeSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script(&self, key: &str, reply: Reply) {
        self.replies.lock().insert(key.to_string(), reply);
    }

    pub fn json(&self, key: &str, payload: Value) {
        self.script(key, Reply::Json(payload));
    }

    /// Make every fetch sleep first, so concurrent callers overlap.
    pub fn set_delay_ms(&self, ms: u64) {
        *self.delay_ms.lock() = ms;
    }

    pub fn calls(&self, key: &str) -> usize {
        self.calls.lock().get(key).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().values().sum()
    }
}

#[async_trait]
impl MarketDataSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch(&self, query: &MarketQuery) -> Result<Value, DomainError> {
        let key = query.cache_key();
        *self.calls.lock().entry(key.clone()).or_insert(0) += 1;

        let delay = *self.delay_ms.lock();
        if delay > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }

        let reply = self.replies.lock().get(&key).cloned();
        reply.unwrap_or(Reply::Upstream).into_result()
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

pub fn test_config() -> ChatConfig {
    ChatConfig {
        currency: Currency::Usd,
        seed: Some(7),
        ..ChatConfig::default()
    }
}

pub fn setup() -> (CryptoChat, Arc<FakeSource>, Arc<ManualClock>) {
    let source = FakeSource::new();
    let clock = ManualClock::new();
    let chat = CryptoChat::with_source(source.clone(), clock.clone(), test_config()).unwrap();
    (chat, source, clock)
}

pub fn market_coin(id: &str, symbol: &str, name: &str, price: f64, change_24h: f64, rank: u32) -> Value {
    json!({
        "id": id,
        "symbol": symbol,
        "name": name,
        "current_price": price,
        "market_cap": price * 1_000_000.0,
        "market_cap_rank": rank,
        "total_volume": price * 10_000.0,
        "price_change_percentage_24h": change_24h,
    })
}

pub fn simple_price(id: &str, price: f64, change_24h: f64) -> Value {
    json!({
        id: {
            "usd": price,
            "usd_24h_change": change_24h,
            "usd_market_cap": price * 1_000_000.0,
            "usd_24h_vol": price * 10_000.0,
        }
    })
}

pub fn coin_detail(id: &str, symbol: &str, name: &str, price: f64) -> Value {
    json!({
        "id": id,
        "symbol": symbol,
        "name": name,
        "market_cap_rank": 12,
        "description": { "en": format!("<p>{name} is a <b>test</b> coin.</p>") },
        "market_data": {
            "current_price": { "usd": price },
            "market_cap": { "usd": price * 1_000_000.0 },
            "total_volume": { "usd": price * 10_000.0 },
            "price_change_percentage_24h": 1.5,
            "price_change_percentage_7d": 4.0,
            "price_change_percentage_30d": 10.0,
            "circulating_supply": 1_000_000.0,
            "max_supply": null
        }
    })
}

pub fn search_hits(hits: &[(&str, &str, &str)]) -> Value {
    let coins: Vec<Value> = hits
        .iter()
        .map(|(id, name, symbol)| json!({ "id": id, "name": name, "symbol": symbol, "market_cap_rank": 50 }))
        .collect();
    json!({ "coins": coins })
}

/// A 250-coin style snapshot with the given coins as (id, symbol, name, 24h change).
pub fn snapshot(coins: &[(&str, &str, &str, f64)]) -> Value {
    Value::Array(
        coins
            .iter()
            .enumerate()
            .map(|(i, (id, sym, name, ch))| market_coin(id, sym, name, 100.0 * (i + 1) as f64, *ch, i as u32 + 1))
            .collect(),
    )
}
