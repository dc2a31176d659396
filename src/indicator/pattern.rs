//! Chart-pattern flags. These are cosmetic hints for the chart, not signals:
//! the thresholds and confidence scores are fixed defaults with no accuracy
//! contract beyond being deterministic for a given candle sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Candle;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub double_top_lookback: usize,
    /// Max relative difference between the two peaks.
    pub double_top_tolerance: f64,
    pub double_top_confidence: f64,
    pub triangle_lookback: usize,
    pub triangle_confidence: f64,
    pub head_shoulders_candidates: usize,
    pub head_shoulders_confidence: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            double_top_lookback: 50,
            double_top_tolerance: 0.02,
            double_top_confidence: 0.8,
            triangle_lookback: 30,
            triangle_confidence: 0.6,
            head_shoulders_candidates: 5,
            head_shoulders_confidence: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    HeadShoulders,
    DoubleTop,
    Triangle,
}

impl PatternKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HeadShoulders => "Potential Head & Shoulders",
            Self::DoubleTop => "Double Top",
            Self::Triangle => "Triangle Pattern",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::HeadShoulders => "Bearish reversal pattern detected",
            Self::DoubleTop => "Bearish reversal pattern - potential sell signal",
            Self::Triangle => "Consolidation pattern - breakout expected",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPattern {
    pub kind: PatternKind,
    /// Candle indices the pattern was anchored on.
    pub points: Vec<usize>,
    pub confidence: f64,
}

impl ChartPattern {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// Run all heuristics; results come in a fixed order
/// (head-and-shoulders, double top, triangle).
pub fn detect_patterns(candles: &[Candle], config: &PatternConfig) -> Vec<ChartPattern> {
    [
        head_and_shoulders(candles, config),
        double_top(candles, config),
        triangle(candles, config),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn head_and_shoulders(candles: &[Candle], config: &PatternConfig) -> Option<ChartPattern> {
    let mut by_high: Vec<usize> = (0..candles.len()).collect();
    // stable: equal highs keep chronological order
    by_high.sort_by(|&a, &b| candles[b].high.total_cmp(&candles[a].high));
    by_high.truncate(config.head_shoulders_candidates);
    if by_high.len() < 3 {
        return None;
    }
    by_high.truncate(3);
    Some(ChartPattern {
        kind: PatternKind::HeadShoulders,
        points: by_high,
        confidence: config.head_shoulders_confidence,
    })
}

pub fn double_top(candles: &[Candle], config: &PatternConfig) -> Option<ChartPattern> {
    let offset = candles.len().saturating_sub(config.double_top_lookback);
    let peaks = local_extrema(&candles[offset..], |c| c.high, |a, b| a > b);
    let [.., first, second] = peaks.as_slice() else {
        return None;
    };
    let p1 = candles[offset + first].high;
    let p2 = candles[offset + second].high;
    if (p1 - p2).abs() / p1 >= config.double_top_tolerance {
        return None;
    }
    Some(ChartPattern {
        kind: PatternKind::DoubleTop,
        points: vec![offset + first, offset + second],
        confidence: config.double_top_confidence,
    })
}

pub fn triangle(candles: &[Candle], config: &PatternConfig) -> Option<ChartPattern> {
    let offset = candles.len().saturating_sub(config.triangle_lookback);
    let recent = &candles[offset..];
    let highs = local_extrema(recent, |c| c.high, |a, b| a > b);
    let lows = local_extrema(recent, |c| c.low, |a, b| a < b);
    if highs.len() < 2 || lows.len() < 2 {
        return None;
    }
    let points = highs[highs.len() - 2..]
        .iter()
        .chain(&lows[lows.len() - 2..])
        .map(|i| offset + i)
        .collect();
    Some(ChartPattern {
        kind: PatternKind::Triangle,
        points,
        confidence: config.triangle_confidence,
    })
}

/// Interior indices whose value beats both neighbours under `beats`.
fn local_extrema(
    candles: &[Candle],
    value: impl Fn(&Candle) -> f64,
    beats: impl Fn(f64, f64) -> bool,
) -> Vec<usize> {
    if candles.len() < 3 {
        return Vec::new();
    }
    (1..candles.len() - 1)
        .filter(|&i| {
            let v = value(&candles[i]);
            beats(v, value(&candles[i - 1])) && beats(v, value(&candles[i + 1]))
        })
        .collect()
}
