use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::AssetSnapshot;

/// Deserialize exchange string-encoded numbers to f64.
pub fn string_to_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<f64>().map_err(serde::de::Error::custom)
}

/// Normalized 24h quote, whichever provider produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketQuote {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub change_24h_pct: f64,
    pub total_volume_24h: f64,
    pub market_cap: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub source: String,
}

impl MarketQuote {
    pub fn matches(&self, id_or_symbol: &str) -> bool {
        let needle = id_or_symbol.trim();
        self.id.eq_ignore_ascii_case(needle) || self.symbol.eq_ignore_ascii_case(needle)
    }

    /// Snapshot for the generator. Providers only report 24h figures, so the
    /// 7d/30d changes come from the catalog entry when there is one.
    pub fn snapshot(&self) -> AssetSnapshot {
        let (change_7d_pct, change_30d_pct) = catalog::find(&self.id)
            .map(|a| (a.snapshot.change_7d_pct, a.snapshot.change_30d_pct))
            .unwrap_or((0.0, 0.0));
        AssetSnapshot {
            current_price: self.current_price,
            change_24h_pct: self.change_24h_pct,
            change_7d_pct,
            change_30d_pct,
            total_volume_24h: self.total_volume_24h.max(0.0),
        }
    }

    pub fn from_catalog(asset: &catalog::AssetInfo, source: &str) -> Self {
        Self {
            id: asset.id.to_string(),
            symbol: asset.symbol.to_string(),
            name: asset.name.to_string(),
            current_price: asset.snapshot.current_price,
            change_24h_pct: asset.snapshot.change_24h_pct,
            total_volume_24h: asset.snapshot.total_volume_24h,
            market_cap: Some(asset.market_cap),
            high_24h: Some(asset.high_24h),
            low_24h: Some(asset.low_24h),
            source: source.to_string(),
        }
    }
}

/// CoinGecko `/coins/markets` item.
#[derive(Debug, Deserialize)]
pub struct CoinGeckoMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
}

/// Binance `/api/v3/ticker/24hr` item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceTicker24h {
    pub symbol: String,
    #[serde(deserialize_with = "string_to_f64")]
    pub last_price: f64,
    #[serde(deserialize_with = "string_to_f64")]
    pub price_change_percent: f64,
    #[serde(deserialize_with = "string_to_f64")]
    pub volume: f64,
    #[serde(deserialize_with = "string_to_f64")]
    pub high_price: f64,
    #[serde(deserialize_with = "string_to_f64")]
    pub low_price: f64,
}

/// CryptoCompare `/data/pricemultifull` body.
#[derive(Debug, Deserialize)]
pub struct CryptoCompareResponse {
    #[serde(rename = "RAW", default)]
    pub raw: HashMap<String, HashMap<String, CryptoCompareQuote>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CryptoCompareQuote {
    pub price: f64,
    #[serde(rename = "CHANGEPCT24HOUR", default)]
    pub change_pct_24hour: f64,
    #[serde(rename = "MKTCAP")]
    pub market_cap: Option<f64>,
    #[serde(rename = "VOLUME24HOURTO", default)]
    pub volume_24hour_to: f64,
    #[serde(rename = "HIGH24HOUR")]
    pub high_24hour: Option<f64>,
    #[serde(rename = "LOW24HOUR")]
    pub low_24hour: Option<f64>,
}

/// Kraken `/0/public/Ticker` body.
#[derive(Debug, Deserialize)]
pub struct KrakenResponse {
    #[serde(default)]
    pub error: Vec<String>,
    #[serde(default)]
    pub result: HashMap<String, KrakenTicker>,
}

/// Kraken ticker arrays are `[today, last 24 hours]` except `c`, which is
/// `[price, lot volume]`.
#[derive(Debug, Deserialize)]
pub struct KrakenTicker {
    pub c: Vec<String>,
    pub v: Vec<String>,
    pub h: Vec<String>,
    pub l: Vec<String>,
    /// Today's opening price.
    pub o: String,
}
