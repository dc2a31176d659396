//! Randomized forward price guesses for the dashboard's prediction cards.
//!
//! Nothing here is a model: each horizon scales the 24h volatility, draws a
//! uniform offset, and derives a confidence that shrinks as volatility grows.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::model::AssetSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl Trend {
    fn opposite(self) -> Self {
        match self {
            Self::Bullish => Self::Bearish,
            Self::Bearish => Self::Bullish,
            Self::Neutral => Self::Neutral,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    NextDay,
    NextWeek,
    NextMonth,
}

struct HorizonProfile {
    spread: f64,
    confidence_base: f64,
    confidence_slope: f64,
    confidence_floor: f64,
}

impl Horizon {
    pub fn all() -> [Horizon; 3] {
        [Self::NextDay, Self::NextWeek, Self::NextMonth]
    }

    fn profile(self) -> HorizonProfile {
        match self {
            Self::NextDay => HorizonProfile {
                spread: 0.5,
                confidence_base: 90.0,
                confidence_slope: 100.0,
                confidence_floor: 60.0,
            },
            Self::NextWeek => HorizonProfile {
                spread: 2.0,
                confidence_base: 80.0,
                confidence_slope: 120.0,
                confidence_floor: 50.0,
            },
            Self::NextMonth => HorizonProfile {
                spread: 5.0,
                confidence_base: 70.0,
                confidence_slope: 150.0,
                confidence_floor: 40.0,
            },
        }
    }

    /// Confidence in percent for a given fractional 24h volatility.
    pub fn confidence(self, volatility: f64) -> f64 {
        let p = self.profile();
        (p.confidence_base - volatility * p.confidence_slope).max(p.confidence_floor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub horizon: Horizon,
    pub price: f64,
    /// Percent, 0–100.
    pub confidence: f64,
    pub trend: Trend,
}

pub fn predict<R: Rng + ?Sized>(snapshot: &AssetSnapshot, rng: &mut R) -> [Prediction; 3] {
    let volatility = snapshot.change_24h_pct.abs() / 100.0;
    let base = if snapshot.change_24h_pct > 0.0 {
        Trend::Bullish
    } else {
        Trend::Bearish
    };

    Horizon::all().map(|horizon| {
        let offset = rng.gen_range(-0.5f64..0.5) * volatility * horizon.profile().spread;
        let roll: f64 = rng.gen();
        let trend = match horizon {
            Horizon::NextDay if roll > 0.5 => base,
            Horizon::NextDay => base.opposite(),
            Horizon::NextWeek if roll > 0.4 => base,
            Horizon::NextWeek => Trend::Neutral,
            Horizon::NextMonth if roll > 0.6 => Trend::Neutral,
            Horizon::NextMonth => base,
        };
        Prediction {
            horizon,
            price: snapshot.current_price * (1.0 + offset),
            confidence: horizon.confidence(volatility),
            trend,
        }
    })
}
