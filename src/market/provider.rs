use std::fmt;

use serde::Deserialize;

use crate::catalog;
use crate::error::AppError;

use super::types::{
    BinanceTicker24h, CoinGeckoMarket, CryptoCompareResponse, KrakenResponse, MarketQuote,
};

const CRYPTOCOMPARE_SYMBOLS: &str = "BTC,ETH,BNB,XRP,ADA,SOL,DOGE,DOT,MATIC,LTC";
const KRAKEN_PAIRS: &[(&str, &str)] = &[
    ("XXBTZUSD", "btc"),
    ("XETHZUSD", "eth"),
    ("XXRPZUSD", "xrp"),
    ("ADAUSD", "ada"),
    ("SOLUSD", "sol"),
    ("XDGUSD", "doge"),
];

/// Public market-data REST APIs, in the order the feed tries them by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    CoinGecko,
    Binance,
    CryptoCompare,
    Kraken,
}

impl ProviderKind {
    pub fn all() -> [ProviderKind; 4] {
        [Self::CoinGecko, Self::Binance, Self::CryptoCompare, Self::Kraken]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CoinGecko => "CoinGecko",
            Self::Binance => "Binance",
            Self::CryptoCompare => "CryptoCompare",
            Self::Kraken => "Kraken",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::CoinGecko => "https://api.coingecko.com",
            Self::Binance => "https://api.binance.com",
            Self::CryptoCompare => "https://min-api.cryptocompare.com",
            Self::Kraken => "https://api.kraken.com",
        }
    }

    /// Full request URL against `base_url` (no trailing slash expected).
    pub fn endpoint(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Self::CoinGecko => format!(
                "{}/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=100&page=1&sparkline=false&price_change_percentage=24h",
                base
            ),
            Self::Binance => format!("{}/api/v3/ticker/24hr", base),
            Self::CryptoCompare => format!(
                "{}/data/pricemultifull?fsyms={}&tsyms=USD",
                base, CRYPTOCOMPARE_SYMBOLS
            ),
            Self::Kraken => {
                let pairs: Vec<&str> = KRAKEN_PAIRS.iter().map(|(p, _)| *p).collect();
                format!("{}/0/public/Ticker?pair={}", base, pairs.join(","))
            }
        }
    }

    pub fn parse(&self, body: &str) -> Result<Vec<MarketQuote>, AppError> {
        match self {
            Self::CoinGecko => parse_coingecko(body),
            Self::Binance => parse_binance(body),
            Self::CryptoCompare => parse_cryptocompare(body),
            Self::Kraken => parse_kraken(body),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn parse_coingecko(body: &str) -> Result<Vec<MarketQuote>, AppError> {
    let markets: Vec<CoinGeckoMarket> = serde_json::from_str(body)?;
    Ok(markets
        .into_iter()
        .filter_map(|m| {
            let price = m.current_price.filter(|p| *p > 0.0)?;
            Some(MarketQuote {
                id: m.id,
                symbol: m.symbol.to_ascii_lowercase(),
                name: m.name,
                current_price: price,
                change_24h_pct: m.price_change_percentage_24h.unwrap_or(0.0),
                total_volume_24h: m.total_volume.unwrap_or(0.0),
                market_cap: m.market_cap,
                high_24h: m.high_24h,
                low_24h: m.low_24h,
                source: ProviderKind::CoinGecko.name().to_string(),
            })
        })
        .collect())
}

/// Only USDT pairs of catalog assets are kept; Binance has no market cap.
pub fn parse_binance(body: &str) -> Result<Vec<MarketQuote>, AppError> {
    let tickers: Vec<BinanceTicker24h> = serde_json::from_str(body)?;
    Ok(tickers
        .into_iter()
        .filter_map(|t| {
            let base = t.symbol.strip_suffix("USDT")?;
            let asset = catalog::find(base)?;
            if t.last_price <= 0.0 {
                return None;
            }
            Some(MarketQuote {
                id: asset.id.to_string(),
                symbol: asset.symbol.to_string(),
                name: asset.name.to_string(),
                current_price: t.last_price,
                change_24h_pct: t.price_change_percent,
                total_volume_24h: t.volume * t.last_price,
                market_cap: None,
                high_24h: Some(t.high_price),
                low_24h: Some(t.low_price),
                source: ProviderKind::Binance.name().to_string(),
            })
        })
        .collect())
}

pub fn parse_cryptocompare(body: &str) -> Result<Vec<MarketQuote>, AppError> {
    let resp: CryptoCompareResponse = serde_json::from_str(body)?;
    let mut quotes: Vec<MarketQuote> = resp
        .raw
        .into_iter()
        .filter_map(|(symbol, mut by_currency)| {
            let usd = by_currency.remove("USD")?;
            let asset = catalog::find(&symbol)?;
            if usd.price <= 0.0 {
                return None;
            }
            Some(MarketQuote {
                id: asset.id.to_string(),
                symbol: asset.symbol.to_string(),
                name: asset.name.to_string(),
                current_price: usd.price,
                change_24h_pct: usd.change_pct_24hour,
                total_volume_24h: usd.volume_24hour_to,
                market_cap: usd.market_cap,
                high_24h: usd.high_24hour,
                low_24h: usd.low_24hour,
                source: ProviderKind::CryptoCompare.name().to_string(),
            })
        })
        .collect();
    sort_by_rank(&mut quotes);
    Ok(quotes)
}

/// Kraken has no 24h change field; it is derived from today's open.
pub fn parse_kraken(body: &str) -> Result<Vec<MarketQuote>, AppError> {
    let resp: KrakenResponse = serde_json::from_str(body)?;
    if !resp.error.is_empty() {
        return Err(AppError::Provider {
            source_name: ProviderKind::Kraken.name().to_string(),
            msg: resp.error.join("; "),
        });
    }

    let mut quotes: Vec<MarketQuote> = resp
        .result
        .into_iter()
        .filter_map(|(pair, ticker)| {
            let (_, symbol) = KRAKEN_PAIRS.iter().find(|(p, _)| *p == pair)?;
            let asset = catalog::find(symbol)?;
            let price = nth_f64(&ticker.c, 0).filter(|p| *p > 0.0)?;
            let open = ticker.o.parse::<f64>().ok().filter(|o| *o > 0.0);
            Some(MarketQuote {
                id: asset.id.to_string(),
                symbol: asset.symbol.to_string(),
                name: asset.name.to_string(),
                current_price: price,
                change_24h_pct: open.map(|o| (price - o) / o * 100.0).unwrap_or(0.0),
                total_volume_24h: nth_f64(&ticker.v, 1).unwrap_or(0.0) * price,
                market_cap: None,
                high_24h: nth_f64(&ticker.h, 1),
                low_24h: nth_f64(&ticker.l, 1),
                source: ProviderKind::Kraken.name().to_string(),
            })
        })
        .collect();
    sort_by_rank(&mut quotes);
    Ok(quotes)
}

fn nth_f64(values: &[String], idx: usize) -> Option<f64> {
    values.get(idx)?.parse().ok()
}

// Map-backed payloads come back in hash order.
fn sort_by_rank(quotes: &mut [MarketQuote]) {
    quotes.sort_by_key(|q| catalog::find(&q.id).map(|a| a.rank).unwrap_or(u32::MAX));
}
