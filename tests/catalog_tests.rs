use coinscope::catalog::{self, ASSETS};
use coinscope::market::{MarketQuote, FALLBACK_SOURCE};

#[test]
fn find_by_id_or_symbol_ignores_case() {
    assert_eq!(catalog::find("bitcoin").unwrap().symbol, "btc");
    assert_eq!(catalog::find("BTC").unwrap().id, "bitcoin");
    assert_eq!(catalog::find(" Eth ").unwrap().id, "ethereum");
    assert!(catalog::find("unknown-coin").is_none());
}

#[test]
fn search_matches_name_or_symbol() {
    let ids: Vec<&str> = catalog::search("coin").iter().map(|a| a.id).collect();
    assert!(ids.contains(&"bitcoin"));
    assert!(ids.contains(&"dogecoin"));
    assert!(ids.contains(&"litecoin"));

    let by_symbol: Vec<&str> = catalog::search("SOL").iter().map(|a| a.id).collect();
    assert_eq!(by_symbol, vec!["solana"]);
    assert!(catalog::search("zzz").is_empty());
}

#[test]
fn fallback_quotes_mirror_catalog_entries() {
    for asset in ASSETS {
        let quote = MarketQuote::from_catalog(asset, FALLBACK_SOURCE);
        assert!(quote.matches(asset.symbol));
        assert_eq!(quote.snapshot(), asset.snapshot);
    }
}
