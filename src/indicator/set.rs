use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bollinger::bollinger_width_series;
use super::ema::{ema_series, macd_series};
use super::rsi::{rsi_series, RsiZone};
use super::sma::{latest_sma, sma_series};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub sma_windows: Vec<usize>,
    pub ema_window: usize,
    pub rsi_window: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub bollinger_window: usize,
    pub bollinger_k: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_windows: vec![20, 50],
            ema_window: 20,
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            bollinger_window: 20,
            bollinger_k: 2.0,
        }
    }
}

/// Indicator sequences aligned index-for-index with the input closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSet {
    pub sma: BTreeMap<usize, Vec<f64>>,
    pub ema: Vec<f64>,
    pub rsi: Vec<f64>,
    pub macd: Vec<f64>,
    pub bollinger_width: Vec<f64>,
}

impl IndicatorSet {
    pub fn sma(&self, window: usize) -> Option<&[f64]> {
        self.sma.get(&window).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.ema.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ema.is_empty()
    }
}

/// Compute the default indicator set (SMA 20/50, EMA 20, RSI 14, MACD 12/26,
/// Bollinger 20×2).
pub fn compute_indicators(closes: &[f64]) -> IndicatorSet {
    compute_indicators_with(closes, &IndicatorParams::default())
}

/// Zero windows are treated as 1.
pub fn compute_indicators_with(closes: &[f64], params: &IndicatorParams) -> IndicatorSet {
    let sma = params
        .sma_windows
        .iter()
        .map(|&w| (w, sma_series(closes, w.max(1))))
        .collect();
    IndicatorSet {
        sma,
        ema: ema_series(closes, params.ema_window.max(1)),
        rsi: rsi_series(closes, params.rsi_window.max(1)),
        macd: macd_series(closes, params.macd_fast.max(1), params.macd_slow.max(1)),
        bollinger_width: bollinger_width_series(
            closes,
            params.bollinger_window.max(1),
            params.bollinger_k,
        ),
    }
}

/// Latest readings for indicator badges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSummary {
    pub last_close: f64,
    pub sma_20: f64,
    /// SMA over `min(50, len)` closes, so short series still get a value.
    pub sma_50: f64,
    pub ema_20: f64,
    pub rsi: f64,
    pub rsi_zone: RsiZone,
    pub macd: f64,
    pub bollinger_width: f64,
}

impl IndicatorSummary {
    pub fn from_closes(closes: &[f64], set: &IndicatorSet) -> Option<Self> {
        let last_close = *closes.last()?;
        let rsi = set.rsi.last().copied()?;
        Some(Self {
            last_close,
            sma_20: latest_sma(closes, 20),
            sma_50: latest_sma(closes, closes.len().min(50)),
            ema_20: set.ema.last().copied()?,
            rsi,
            rsi_zone: RsiZone::classify(rsi),
            macd: set.macd.last().copied()?,
            bollinger_width: set.bollinger_width.last().copied()?,
        })
    }
}
