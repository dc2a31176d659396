use coinscope::indicator::ema::{ema_series, macd_series, Ema};

#[test]
fn basic_ema() {
    // period 3 gives k = 0.5
    let mut ema = Ema::new(3);
    assert!((ema.push(2.0) - 2.0).abs() < f64::EPSILON);
    assert!((ema.push(6.0) - 4.0).abs() < f64::EPSILON);
    assert!((ema.push(8.0) - 6.0).abs() < f64::EPSILON);
    assert!((ema.value().unwrap() - 6.0).abs() < f64::EPSILON);
}

#[test]
fn single_period() {
    let mut ema = Ema::new(1);
    assert!((ema.push(42.0) - 42.0).abs() < f64::EPSILON);
    assert!((ema.push(99.0) - 99.0).abs() < f64::EPSILON);
}

#[test]
fn value_without_push() {
    let ema = Ema::new(2);
    assert_eq!(ema.value(), None);
    assert_eq!(ema.period(), 2);
}

#[test]
/// Index 0 equals the first close; no placeholder phase.
fn series_is_seeded_by_first_close() {
    let closes = [10.0, 20.0, 30.0];
    let out = ema_series(&closes, 20);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], 10.0);
    let k = 2.0 / 21.0;
    let expected = 20.0 * k + 10.0 * (1.0 - k);
    assert!((out[1] - expected).abs() < 1e-12);
}

#[test]
fn macd_is_fast_minus_slow() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect();
    let fast = ema_series(&closes, 12);
    let slow = ema_series(&closes, 26);
    let macd = macd_series(&closes, 12, 26);
    assert_eq!(macd.len(), closes.len());
    assert_eq!(macd[0], 0.0);
    for i in 0..closes.len() {
        assert!((macd[i] - (fast[i] - slow[i])).abs() < 1e-12);
    }
}

#[test]
fn rising_series_has_positive_macd() {
    let closes: Vec<f64> = (1..=40).map(f64::from).collect();
    let macd = macd_series(&closes, 12, 26);
    assert!(macd[1..].iter().all(|v| *v > 0.0));
}

#[test]
#[should_panic(expected = "EMA period must be > 0")]
fn zero_period_panics() {
    Ema::new(0);
}
