//! Offline asset table used when every market provider is unreachable.

use serde::Serialize;

use crate::model::AssetSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetInfo {
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub rank: u32,
    pub market_cap: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub snapshot: AssetSnapshot,
}

#[allow(clippy::too_many_arguments)]
const fn asset(
    id: &'static str,
    symbol: &'static str,
    name: &'static str,
    rank: u32,
    price: f64,
    changes: [f64; 3],
    market_cap: f64,
    volume: f64,
    range_24h: [f64; 2],
) -> AssetInfo {
    AssetInfo {
        id,
        symbol,
        name,
        rank,
        market_cap,
        high_24h: range_24h[0],
        low_24h: range_24h[1],
        snapshot: AssetSnapshot {
            current_price: price,
            change_24h_pct: changes[0],
            change_7d_pct: changes[1],
            change_30d_pct: changes[2],
            total_volume_24h: volume,
        },
    }
}

#[rustfmt::skip]
pub static ASSETS: &[AssetInfo] = &[
    asset("bitcoin", "btc", "Bitcoin", 1, 43_250.75, [2.34, -1.23, 8.45], 847e9, 28.5e9, [43_890.12, 42_100.45]),
    asset("ethereum", "eth", "Ethereum", 2, 2_650.89, [3.21, 2.45, 12.67], 318e9, 15.2e9, [2_698.45, 2_580.12]),
    asset("tether", "usdt", "Tether", 3, 1.0002, [0.01, -0.02, 0.05], 95e9, 45e9, [1.0015, 0.9995]),
    asset("binancecoin", "bnb", "BNB", 4, 310.0, [1.12, 3.40, -4.10], 47.6e9, 1.1e9, [313.5, 305.2]),
    asset("ripple", "xrp", "XRP", 5, 0.62, [-2.05, -5.31, 9.80], 33.8e9, 1.6e9, [0.64, 0.61]),
    asset("solana", "sol", "Solana", 6, 98.0, [5.42, 11.20, 27.30], 42.1e9, 2.9e9, [100.6, 92.7]),
    asset("usd-coin", "usdc", "USDC", 7, 1.0, [0.0, 0.01, -0.01], 25.4e9, 5.2e9, [1.0008, 0.9992]),
    asset("cardano", "ada", "Cardano", 8, 0.48, [-1.37, 2.18, -8.62], 16.9e9, 410e6, [0.49, 0.47]),
    asset("dogecoin", "doge", "Dogecoin", 9, 0.082, [4.76, -3.90, 1.25], 11.7e9, 590e6, [0.084, 0.078]),
    asset("avalanche-2", "avax", "Avalanche", 10, 37.0, [-3.64, 6.05, 14.90], 13.6e9, 620e6, [38.5, 36.1]),
    asset("chainlink", "link", "Chainlink", 11, 15.2, [0.88, 7.73, 21.40], 8.6e9, 480e6, [15.5, 14.9]),
    asset("polkadot", "dot", "Polkadot", 12, 7.1, [-0.54, -2.71, 5.33], 9.3e9, 230e6, [7.2, 6.9]),
    asset("matic-network", "matic", "Polygon", 13, 0.89, [2.96, -6.44, 3.18], 8.3e9, 390e6, [0.91, 0.86]),
    asset("litecoin", "ltc", "Litecoin", 14, 73.0, [-0.91, 1.47, -3.85], 5.4e9, 370e6, [74.1, 71.8]),
    asset("shiba-inu", "shib", "Shiba Inu", 15, 0.000_009_5, [6.30, -9.12, 4.07], 5.6e9, 180e6, [0.000_009_9, 0.000_008_9]),
];

/// Find an asset by id or ticker symbol, case-insensitively.
pub fn find(id_or_symbol: &str) -> Option<&'static AssetInfo> {
    let needle = id_or_symbol.trim();
    ASSETS
        .iter()
        .find(|a| a.id.eq_ignore_ascii_case(needle) || a.symbol.eq_ignore_ascii_case(needle))
}

/// Assets whose name or symbol contains `query`, ordered by rank.
pub fn search(query: &str) -> Vec<&'static AssetInfo> {
    let q = query.trim().to_ascii_lowercase();
    ASSETS
        .iter()
        .filter(|a| a.name.to_ascii_lowercase().contains(&q) || a.symbol.contains(&q))
        .collect()
}
