/// Fixed-capacity ring buffer over the most recent `period` values.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    period: usize,
    buffer: Vec<f64>,
    head: usize,
    count: usize,
}

impl RollingWindow {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "window period must be > 0");
        Self {
            period,
            buffer: vec![0.0; period],
            head: 0,
            count: 0,
        }
    }

    /// Push a value, evicting the oldest one once full.
    pub fn push(&mut self, value: f64) {
        self.buffer[self.head] = value;
        self.head = (self.head + 1) % self.period;
        if self.count < self.period {
            self.count += 1;
        }
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.period
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Mean over the full window, `None` until `period` values were pushed.
    ///
    /// Summed from the buffer on every call, offset by one of its own values,
    /// so a window of equal values returns exactly that value.
    pub fn mean(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }
        let pivot = self.buffer[0];
        let offset: f64 = self.buffer.iter().map(|v| v - pivot).sum();
        Some(pivot + offset / self.period as f64)
    }

    /// Population standard deviation over the full window.
    pub fn population_std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let variance = self
            .buffer
            .iter()
            .map(|v| {
                let d = *v - mean;
                d * d
            })
            .sum::<f64>()
            / self.period as f64;
        Some(variance.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_dev_of_constant_window_is_zero() {
        let mut w = RollingWindow::new(4);
        for _ in 0..6 {
            w.push(3.0);
        }
        assert_eq!(w.population_std_dev(), Some(0.0));
    }

    #[test]
    fn std_dev_is_population() {
        let mut w = RollingWindow::new(4);
        for v in [2.0, 4.0, 4.0, 4.0, 5.0] {
            w.push(v);
        }
        // window = [4, 4, 4, 5]; mean 4.25, variance 0.1875
        let sd = w.population_std_dev().unwrap();
        assert!((sd - 0.1875f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn mean_is_exact_after_churn() {
        let mut w = RollingWindow::new(5);
        for v in [0.1, 0.3, 0.7, 1.1, 1.3, 0.9, 1.7, 2.3, 0.35, 3.1] {
            w.push(v);
        }
        for _ in 0..5 {
            w.push(1.3);
        }
        assert_eq!(w.mean(), Some(1.3));
        assert_eq!(w.population_std_dev(), Some(0.0));

        for _ in 0..5 {
            w.push(0.0);
        }
        assert_eq!(w.mean(), Some(0.0));
    }

    #[test]
    #[should_panic(expected = "window period must be > 0")]
    fn zero_period_panics() {
        RollingWindow::new(0);
    }
}
