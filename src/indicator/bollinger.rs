use super::window::RollingWindow;

pub const BOLLINGER_PLACEHOLDER: f64 = 0.0;

/// Half-width of the Bollinger band: `k` population standard deviations of
/// the trailing window.
pub fn bollinger_width_series(closes: &[f64], period: usize, k: f64) -> Vec<f64> {
    let mut window = RollingWindow::new(period);
    closes
        .iter()
        .map(|&c| {
            window.push(c);
            window
                .population_std_dev()
                .map(|sd| sd * k)
                .unwrap_or(BOLLINGER_PLACEHOLDER)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_k_std_devs() {
        let out = bollinger_width_series(&[1.0, 3.0, 1.0, 3.0], 2, 2.0);
        assert_eq!(out[0], BOLLINGER_PLACEHOLDER);
        // each pair has mean 2, population sd 1
        for v in &out[1..] {
            assert!((v - 2.0).abs() < 1e-12);
        }
    }
}
