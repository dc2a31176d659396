use std::fmt;

use serde::Serialize;

use super::window::RollingWindow;

/// Neutral value emitted while the window is filling.
pub const RSI_PLACEHOLDER: f64 = 50.0;
/// Stand-in for `avg_gain / avg_loss` when there were no losses.
pub const RS_SENTINEL: f64 = 100.0;
pub const OVERBOUGHT: f64 = 70.0;
pub const OVERSOLD: f64 = 30.0;

/// Relative Strength Index over simple trailing means of gains and losses.
///
/// The first value contributes a zero gain and loss. Outputs before index
/// `period - 1` (and always index 0) are [`RSI_PLACEHOLDER`].
#[derive(Debug, Clone)]
pub struct Rsi {
    prev: Option<f64>,
    gains: RollingWindow,
    losses: RollingWindow,
    seen: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "RSI period must be > 0");
        Self {
            prev: None,
            gains: RollingWindow::new(period),
            losses: RollingWindow::new(period),
            seen: 0,
        }
    }

    pub fn push(&mut self, close: f64) -> f64 {
        let (gain, loss) = match self.prev.replace(close) {
            Some(prev) => {
                let delta = close - prev;
                (delta.max(0.0), (-delta).max(0.0))
            }
            None => (0.0, 0.0),
        };
        self.gains.push(gain);
        self.losses.push(loss);
        self.seen += 1;

        if self.seen == 1 {
            return RSI_PLACEHOLDER;
        }
        match (self.gains.mean(), self.losses.mean()) {
            (Some(avg_gain), Some(avg_loss)) => rsi_from_averages(avg_gain, avg_loss),
            _ => RSI_PLACEHOLDER,
        }
    }

    pub fn period(&self) -> usize {
        self.gains.period()
    }
}

/// Averages are means of non-negative moves; anything at or below zero counts
/// as zero.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain <= 0.0 && avg_loss <= 0.0 {
        return RSI_PLACEHOLDER;
    }
    let rs = if avg_loss <= 0.0 {
        RS_SENTINEL
    } else {
        avg_gain.max(0.0) / avg_loss
    };
    100.0 - (100.0 / (1.0 + rs))
}

pub fn rsi_series(closes: &[f64], period: usize) -> Vec<f64> {
    let mut rsi = Rsi::new(period);
    closes.iter().map(|&c| rsi.push(c)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn classify(rsi: f64) -> Self {
        if rsi > OVERBOUGHT {
            Self::Overbought
        } else if rsi < OVERSOLD {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Overbought => "overbought",
            Self::Oversold => "oversold",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_thresholds_are_exclusive() {
        assert_eq!(RsiZone::classify(70.0), RsiZone::Neutral);
        assert_eq!(RsiZone::classify(70.1), RsiZone::Overbought);
        assert_eq!(RsiZone::classify(30.0), RsiZone::Neutral);
        assert_eq!(RsiZone::classify(29.9), RsiZone::Oversold);
    }

    #[test]
    fn averages_below_zero_stay_in_range() {
        assert_eq!(rsi_from_averages(-1e-17, -1e-17), RSI_PLACEHOLDER);
        assert_eq!(rsi_from_averages(-1e-17, 0.5), 0.0);
        assert!((rsi_from_averages(0.5, -1e-17) - (100.0 - 100.0 / 101.0)).abs() < 1e-12);
    }

    #[test]
    fn no_losses_uses_sentinel() {
        let v = rsi_from_averages(1.0, 0.0);
        assert!((v - (100.0 - 100.0 / 101.0)).abs() < 1e-12);
    }
}
