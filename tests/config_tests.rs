use coinscope::config::Config;
use coinscope::market::ProviderKind;
use coinscope::model::Timeframe;

#[test]
fn parse_full_toml() {
    let toml_str = r#"
[chart]
default_timeframe = "4h"
seed = 42

[generator]
volatility_scale = 0.2
min_volatility = 0.001
volatility_band_low = 0.8
volatility_band_high = 1.2
damping = 0.05
momentum_scale = 0.25
volume_sensitivity = 5.0
max_step_ms = 604800000

[indicators]
sma_windows = [10, 20, 50]
ema_window = 12
rsi_window = 7
macd_fast = 8
macd_slow = 21
bollinger_window = 10
bollinger_k = 2.5

[patterns]
double_top_lookback = 40
double_top_tolerance = 0.01
triangle_lookback = 20

[market]
cache_ttl_ms = 5000
min_interval_ms = 500
request_timeout_ms = 3000

[[market.providers]]
kind = "kraken"

[[market.providers]]
kind = "binance"
base_url = "https://api.binance.us"

[logging]
level = "debug"
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    assert_eq!(config.chart.default_timeframe, Timeframe::Hours(4));
    assert_eq!(config.chart.seed, Some(42));
    assert!((config.generator.volatility_scale - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.generator.max_step_ms, 604_800_000);
    assert_eq!(config.indicators.sma_windows, vec![10, 20, 50]);
    assert_eq!(config.indicators.rsi_window, 7);
    assert!((config.indicators.bollinger_k - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.patterns.double_top_lookback, 40);
    // unspecified keys keep their defaults
    assert!((config.patterns.double_top_confidence - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.market.providers.len(), 2);
    assert_eq!(config.market.providers[0].kind, ProviderKind::Kraken);
    assert_eq!(
        config.market.providers[1].url(),
        "https://api.binance.us/api/v3/ticker/24hr"
    );
    assert_eq!(config.market.cache_ttl_ms, 5000);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn shipped_default_config_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
    let text = std::fs::read_to_string(path).unwrap();
    let config = Config::from_toml_str(&text).unwrap();
    assert_eq!(config.market.providers.len(), 4);
    assert_eq!(config.chart.default_timeframe, Timeframe::Hours(1));
    assert_eq!(config.chart.seed, None);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = std::path::Path::new("/nonexistent/coinscope.toml");
    let config = Config::load_from_path(path).unwrap();
    assert_eq!(config.indicators.ema_window, 20);
    assert_eq!(config.market.min_interval_ms, 2_000);
}

#[test]
fn rejects_bad_timeframe_and_band() {
    assert!(Config::from_toml_str("[chart]\ndefault_timeframe = \"2w\"\n").is_err());
    assert!(Config::from_toml_str(
        "[generator]\nvolatility_band_low = 1.5\nvolatility_band_high = 0.5\n"
    )
    .is_err());
    assert!(Config::from_toml_str("[generator]\nmax_step_ms = 0\n").is_err());
}

#[test]
/// A negative or non-finite multiplier would make band widths negative.
fn rejects_bad_bollinger_multiplier() {
    for k in ["-2.0", "-0.5", "inf", "nan"] {
        let toml_str = format!("[indicators]\nbollinger_k = {}\n", k);
        assert!(Config::from_toml_str(&toml_str).is_err(), "bollinger_k = {}", k);
    }
}

#[test]
fn unknown_provider_kind_is_rejected() {
    assert!(Config::from_toml_str("[[market.providers]]\nkind = \"coinbase\"\n").is_err());
}
