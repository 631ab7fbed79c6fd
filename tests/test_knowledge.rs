//! Glossary and report search over the built-in catalog.

mod common;

use common::setup;
use cryptochat::domain::values::report_type::ReportType;

#[test]
fn test_glossary_search_by_key() {
    let (chat, _, _) = setup();

    let hits = chat.search_education("explain staking to me");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].term, "Staking");
}

#[test]
fn test_glossary_search_by_key_word() {
    let (chat, _, _) = setup();

    // "dominance" is a word of the "btc dominance" key.
    let hits = chat.search_education("what does dominance mean");
    assert!(hits.iter().any(|e| e.key == "btc dominance"));
}

#[test]
fn test_glossary_search_misses() {
    let (chat, _, _) = setup();
    assert!(chat.search_education("asdfgh qwerty").is_empty());
}

#[test]
fn test_report_ranking_prefers_keyword_hits() {
    let (chat, _, _) = setup();

    let results = chat.search_reports("whale outflows");
    assert_eq!(results[0].report.id, "week-on-chain-2-2026");
    assert_eq!(results[0].report.report_type, ReportType::Free);
    assert!(results.iter().all(|r| r.score > 0));
}

#[test]
fn test_report_ties_keep_catalog_order() {
    let (chat, _, _) = setup();

    let results = chat.search_reports("bitcoin");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].report.id, "bitcoin-vector-37");
}

#[test]
fn test_short_tokens_are_ignored() {
    let (chat, _, _) = setup();
    assert!(chat.search_reports("q4 on").is_empty());
}

#[test]
fn test_catalog_lists_both_reports() {
    let (chat, _, _) = setup();
    let ids: Vec<&str> = chat.reports().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["bitcoin-vector-37", "week-on-chain-2-2026"]);
}

#[test]
fn test_resolve_is_case_insensitive_and_passes_through() {
    let (chat, _, _) = setup();
    assert_eq!(chat.resolve("BTC"), "bitcoin");
    assert_eq!(chat.resolve("bitcoin"), "bitcoin");
    assert_eq!(chat.resolve("unknowntoken"), "unknowntoken");
}
