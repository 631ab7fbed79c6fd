//! Cached data access: freshness, stale fallback, rate limits, coalescing.

mod common;

use chrono::Duration;
use common::{snapshot, FakeSource, ManualClock, Reply};
use cryptochat::application::market_data::MarketDataService;
use cryptochat::domain::error::DomainError;
use cryptochat::domain::values::currency::Currency;
use cryptochat::infrastructure::cache::TtlCache;
use serde_json::json;
use std::sync::Arc;

const GLOBAL: &str = "global";
const MOVERS_KEY: &str = "top_coins_usd_100_1";

fn service(source: Arc<FakeSource>, clock: Arc<ManualClock>) -> MarketDataService {
    MarketDataService::new(source, TtlCache::new(Duration::seconds(60), clock), Currency::Usd)
}

fn global_payload(cap: f64) -> serde_json::Value {
    json!({
        "data": {
            "total_market_cap": { "usd": cap },
            "total_volume": { "usd": cap / 20.0 },
            "market_cap_change_percentage_24h_usd": 1.2,
            "market_cap_percentage": { "btc": 56.1, "eth": 17.3 },
            "active_cryptocurrencies": 12000
        }
    })
}

#[tokio::test]
async fn test_fresh_entry_served_without_refetch() {
    let source = FakeSource::new();
    let clock = ManualClock::new();
    source.json(GLOBAL, global_payload(2.5e12));
    let svc = service(source.clone(), clock.clone());

    let first = svc.global_stats().await.unwrap();
    clock.advance(Duration::seconds(59));
    let second = svc.global_stats().await.unwrap();

    assert_eq!(source.calls(GLOBAL), 1);
    assert_eq!(first.total_market_cap, second.total_market_cap);
    assert_eq!(second.btc_dominance, Some(56.1));
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let source = FakeSource::new();
    let clock = ManualClock::new();
    source.json(GLOBAL, global_payload(2.5e12));
    let svc = service(source.clone(), clock.clone());

    svc.global_stats().await.unwrap();
    clock.advance(Duration::seconds(60));
    source.json(GLOBAL, global_payload(3.0e12));
    let stats = svc.global_stats().await.unwrap();

    assert_eq!(source.calls(GLOBAL), 2);
    assert_eq!(stats.total_market_cap, Some(3.0e12));
}

#[tokio::test]
async fn test_stale_entry_served_when_upstream_fails() {
    let source = FakeSource::new();
    let clock = ManualClock::new();
    source.json(GLOBAL, global_payload(2.5e12));
    let svc = service(source.clone(), clock.clone());

    svc.global_stats().await.unwrap();
    clock.advance(Duration::minutes(30));
    source.script(GLOBAL, Reply::Upstream);

    let stats = svc.global_stats().await.unwrap();
    assert_eq!(stats.total_market_cap, Some(2.5e12));
    assert_eq!(source.calls(GLOBAL), 2);
}

#[tokio::test]
async fn test_stale_entry_served_when_rate_limited() {
    let source = FakeSource::new();
    let clock = ManualClock::new();
    source.json(GLOBAL, global_payload(2.5e12));
    let svc = service(source.clone(), clock.clone());

    svc.global_stats().await.unwrap();
    clock.advance(Duration::minutes(5));
    source.script(GLOBAL, Reply::RateLimited);

    assert!(svc.global_stats().await.is_ok());
}

#[tokio::test]
async fn test_rate_limit_without_cache_is_distinct_error() {
    let source = FakeSource::new();
    source.script(GLOBAL, Reply::RateLimited);
    let svc = service(source.clone(), ManualClock::new());

    let err = svc.global_stats().await.unwrap_err();
    assert!(err.is_rate_limited());

    source.script(GLOBAL, Reply::Upstream);
    let err = svc.global_stats().await.unwrap_err();
    assert!(matches!(err, DomainError::Upstream(_)));
}

#[tokio::test]
async fn test_concurrent_cold_fetches_coalesce() {
    let source = FakeSource::new();
    source.json(GLOBAL, global_payload(2.5e12));
    source.set_delay_ms(50);
    let svc = Arc::new(service(source.clone(), ManualClock::new()));

    let a = tokio::spawn({
        let svc = svc.clone();
        async move { svc.global_stats().await }
    });
    let b = tokio::spawn({
        let svc = svc.clone();
        async move { svc.global_stats().await }
    });

    assert!(a.await.unwrap().is_ok());
    assert!(b.await.unwrap().is_ok());
    assert_eq!(source.calls(GLOBAL), 1);
}

#[tokio::test]
async fn test_keys_differ_by_parameters() {
    let source = FakeSource::new();
    source.json("price_bitcoin_usd", common::simple_price("bitcoin", 97000.0, 1.0));
    source.json("price_ethereum_usd", common::simple_price("ethereum", 3400.0, -2.0));
    let svc = service(source.clone(), ManualClock::new());

    let btc = svc.coin_price("bitcoin").await.unwrap().unwrap();
    let eth = svc.coin_price("ethereum").await.unwrap().unwrap();

    assert_eq!(btc.price, Some(97000.0));
    assert_eq!(eth.price, Some(3400.0));
    assert_eq!(source.total_calls(), 2);
}

#[tokio::test]
async fn test_unknown_coin_price_is_none() {
    let source = FakeSource::new();
    source.json("price_notacoin_usd", json!({}));
    let svc = service(source, ManualClock::new());

    assert!(svc.coin_price("notacoin").await.unwrap().is_none());
}

#[tokio::test]
async fn test_gainers_losers_ordering() {
    let source = FakeSource::new();
    source.json(
        MOVERS_KEY,
        snapshot(&[
            ("bitcoin", "btc", "Bitcoin", 1.0),
            ("ethereum", "eth", "Ethereum", -4.0),
            ("solana", "sol", "Solana", 9.5),
            ("dogecoin", "doge", "Dogecoin", -11.0),
            ("cardano", "ada", "Cardano", 3.0),
        ]),
    );
    let svc = service(source, ManualClock::new());

    let movers = svc.gainers_losers(2).await.unwrap();
    let gainers: Vec<&str> = movers.gainers.iter().map(|c| c.id.as_str()).collect();
    let losers: Vec<&str> = movers.losers.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(gainers, vec!["solana", "cardano"]);
    assert_eq!(losers, vec!["dogecoin", "ethereum"]);
}

#[tokio::test]
async fn test_compare_reports_missing_coin() {
    let source = FakeSource::new();
    source.json(
        "top_coins_usd_250_1",
        snapshot(&[("bitcoin", "btc", "Bitcoin", 1.0), ("ethereum", "eth", "Ethereum", 2.0)]),
    );
    let svc = service(source.clone(), ManualClock::new());

    let (a, b) = svc.compare("bitcoin", "notacoin").await.unwrap();
    assert_eq!(a.map(|c| c.id).as_deref(), Some("bitcoin"));
    assert!(b.is_none());

    svc.snapshot_coin("ethereum").await.unwrap().unwrap();
    assert_eq!(source.calls("top_coins_usd_250_1"), 1);
}
