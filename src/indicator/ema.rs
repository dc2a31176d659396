/// Exponential Moving Average seeded with the first value it sees.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
    ema: Option<f64>,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "EMA period must be > 0");
        Self {
            period,
            multiplier: 2.0 / (period as f64 + 1.0),
            ema: None,
        }
    }

    /// Push a new value and return the updated EMA.
    pub fn push(&mut self, value: f64) -> f64 {
        let next = match self.ema {
            None => value,
            Some(prev) => value * self.multiplier + prev * (1.0 - self.multiplier),
        };
        self.ema = Some(next);
        next
    }

    pub fn value(&self) -> Option<f64> {
        self.ema
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

/// EMA for every index of `closes`.
pub fn ema_series(closes: &[f64], period: usize) -> Vec<f64> {
    let mut ema = Ema::new(period);
    closes.iter().map(|&c| ema.push(c)).collect()
}

/// `EMA(fast) - EMA(slow)` for every index.
pub fn macd_series(closes: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let fast = ema_series(closes, fast);
    let slow = ema_series(closes, slow);
    fast.iter().zip(&slow).map(|(f, s)| f - s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_seeds() {
        let mut ema = Ema::new(3);
        assert_eq!(ema.value(), None);
        assert!((ema.push(2.0) - 2.0).abs() < f64::EPSILON);
        // k = 0.5
        assert!((ema.push(4.0) - 3.0).abs() < f64::EPSILON);
        assert!((ema.push(5.0) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn macd_of_flat_series_is_zero() {
        let out = macd_series(&[7.0; 40], 12, 26);
        assert_eq!(out.len(), 40);
        assert!(out.iter().all(|v| v.abs() < 1e-12));
    }
}
