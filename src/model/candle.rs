use serde::{Deserialize, Serialize};

/// A single OHLCV bucket. `timestamp` is the bucket open time in epoch millis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Highest of open/close.
    pub fn body_high(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Lowest of open/close.
    pub fn body_low(&self) -> f64 {
        self.open.min(self.close)
    }

    /// Check the OHLC ordering every candle must satisfy.
    pub fn is_well_formed(&self) -> bool {
        self.low > 0.0
            && self.high >= self.body_high()
            && self.low <= self.body_low()
            && self.volume >= 0.0
    }

    /// Move `close` to `price`, widening the wicks if it falls outside them.
    pub fn anchor_close(&mut self, price: f64) {
        self.close = price;
        self.high = self.high.max(price);
        self.low = self.low.min(price);
    }
}

/// Project a candle sequence onto its closing prices.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            timestamp: 60_000,
            open,
            high,
            low,
            close,
            volume: 10.0,
        }
    }

    #[test]
    fn bullish_and_bearish() {
        assert!(candle(100.0, 105.0, 95.0, 102.0).is_bullish());
        assert!(!candle(100.0, 105.0, 90.0, 95.0).is_bullish());
    }

    #[test]
    fn well_formed_checks_wicks() {
        assert!(candle(100.0, 105.0, 95.0, 102.0).is_well_formed());
        assert!(!candle(100.0, 101.0, 95.0, 102.0).is_well_formed());
        assert!(!candle(100.0, 105.0, 0.0, 102.0).is_well_formed());
    }

    #[test]
    fn anchor_close_widens_wicks() {
        let mut c = candle(100.0, 105.0, 95.0, 102.0);
        c.anchor_close(110.0);
        assert!((c.close - 110.0).abs() < f64::EPSILON);
        assert!((c.high - 110.0).abs() < f64::EPSILON);
        assert!((c.low - 95.0).abs() < f64::EPSILON);

        c.anchor_close(90.0);
        assert!((c.low - 90.0).abs() < f64::EPSILON);
        assert!(c.is_well_formed());
    }
}
