//! Canonical phrasings map to their intents; priority order holds.

use cryptochat::application::classifier::IntentClassifier;
use cryptochat::domain::values::intent::Intent;

fn classify(message: &str) -> Intent {
    IntentClassifier::new().unwrap().classify(message).intent
}

#[test]
fn test_canonical_phrases() {
    let cases = [
        ("hi", Intent::Greeting),
        ("Good morning!", Intent::Greeting),
        ("help", Intent::Help),
        ("what can you do", Intent::Help),
        ("how's the market today?", Intent::MarketOverview),
        ("market overview", Intent::MarketOverview),
        ("price of bitcoin", Intent::PriceCheck),
        ("how much is solana", Intent::PriceCheck),
        ("ETH?", Intent::PriceCheck),
        ("top gainers today", Intent::TopGainers),
        ("who pumped", Intent::TopGainers),
        ("top losers", Intent::TopLosers),
        ("which coin crashed", Intent::TopLosers),
        ("what's trending", Intent::Trending),
        ("compare btc vs eth", Intent::Compare),
        ("sol versus avax", Intent::Compare),
        ("tell me about cardano", Intent::CoinInfo),
        ("latest report", Intent::Report),
        ("bitcoin dominance", Intent::Dominance),
        ("should i buy bitcoin", Intent::Investment),
        ("will bitcoin reach 200k", Intent::Prediction),
        ("best coin to buy", Intent::BestCoin),
        ("what is staking", Intent::Education),
        ("explain defi", Intent::Education),
        ("asdfgh qwerty zxcv", Intent::Unknown),
    ];

    for (message, expected) in cases {
        assert_eq!(classify(message), expected, "message: {message:?}");
    }
}

#[test]
fn test_earlier_row_wins_on_overlap() {
    // Matches both price_check and prediction; price_check comes first.
    assert_eq!(classify("bitcoin price prediction"), Intent::PriceCheck);
    // "help" also appears in a greeting; greeting is anchored and wins.
    assert_eq!(classify("hello, help me"), Intent::Greeting);
}

#[test]
fn test_or_inside_words_is_not_a_comparison() {
    assert_eq!(classify("explain the order book"), Intent::Education);
}

#[test]
fn test_classification_is_case_and_space_insensitive() {
    let c = IntentClassifier::new().unwrap();
    let a = c.classify("  PRICE OF BTC  ");
    let b = c.classify("price of btc");
    assert_eq!(a, b);
    assert_eq!(a.normalized, "price of btc");
    assert_eq!(a.matched.as_deref(), Some("price of btc"));
}

#[test]
fn test_unknown_has_no_match() {
    let c = IntentClassifier::new().unwrap().classify("zzz");
    assert_eq!(c.intent, Intent::Unknown);
    assert!(c.matched.is_none());
}
