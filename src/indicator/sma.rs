use super::window::RollingWindow;

/// Placeholder emitted before an SMA window has filled.
pub const SMA_PLACEHOLDER: f64 = 0.0;

/// Simple Moving Average, O(1) per push.
#[derive(Debug, Clone)]
pub struct Sma {
    window: RollingWindow,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "SMA period must be > 0");
        Self {
            window: RollingWindow::new(period),
        }
    }

    /// Push a new value, return the current SMA if enough data.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.window.push(value);
        self.window.mean()
    }

    pub fn value(&self) -> Option<f64> {
        self.window.mean()
    }

    pub fn is_ready(&self) -> bool {
        self.window.is_full()
    }

    pub fn period(&self) -> usize {
        self.window.period()
    }
}

/// SMA for every index of `closes`; indices before the window fills hold
/// [`SMA_PLACEHOLDER`].
pub fn sma_series(closes: &[f64], period: usize) -> Vec<f64> {
    let mut sma = Sma::new(period);
    closes
        .iter()
        .map(|&c| sma.push(c).unwrap_or(SMA_PLACEHOLDER))
        .collect()
}

/// Mean of the last `period` values, or the placeholder if there are fewer.
pub fn latest_sma(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period {
        return SMA_PLACEHOLDER;
    }
    closes[closes.len() - period..].iter().sum::<f64>() / period as f64
}
