//! Synthetic OHLCV series.
//!
//! Fabricates a plausible candle history from a single [`AssetSnapshot`]: a
//! random walk pulled toward the current price, with an oscillating momentum
//! term so the chart is not pure noise. The only hard guarantees are the OHLC
//! ordering of every candle and that the last close equals the snapshot price.

use std::f64::consts::PI;

use rand::Rng;
use serde::Deserialize;

use crate::error::CoreError;
use crate::model::{AssetSnapshot, Candle, Timeframe};

/// Smallest price a synthetic close may take.
pub const PRICE_FLOOR: f64 = 0.0001;

const MIN_TREND_STRENGTH: f64 = -0.95;
const MAX_TREND_STRENGTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Multiplier applied to |24h change| to get per-candle volatility.
    pub volatility_scale: f64,
    /// Floor for the base volatility so flat snapshots still move.
    pub min_volatility: f64,
    pub volatility_band_low: f64,
    pub volatility_band_high: f64,
    /// How strongly the walk is pulled toward the current price.
    pub damping: f64,
    pub momentum_scale: f64,
    /// Extra volume per unit of relative candle move.
    pub volume_sensitivity: f64,
    /// Candle step used for the `max` timeframe.
    pub max_step_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            volatility_scale: 0.1,
            min_volatility: 0.002,
            volatility_band_low: 0.5,
            volatility_band_high: 1.5,
            damping: 0.1,
            momentum_scale: 0.5,
            volume_sensitivity: 10.0,
            max_step_ms: 86_400_000,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    config: GeneratorConfig,
}

impl SeriesGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Step used for `timeframe`, resolving the `max` sentinel.
    pub fn step_ms(&self, timeframe: Timeframe) -> u64 {
        match timeframe {
            Timeframe::Max => self.config.max_step_ms,
            tf => tf.step_ms(),
        }
    }

    /// Generate `point_count` candles ending at the current wall-clock time.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        snapshot: &AssetSnapshot,
        timeframe: Timeframe,
        point_count: usize,
        rng: &mut R,
    ) -> Result<Vec<Candle>, CoreError> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.generate_at(snapshot, timeframe, point_count, now_ms, rng)
    }

    /// Generate `point_count` candles whose span ends at `now_ms`.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        snapshot: &AssetSnapshot,
        timeframe: Timeframe,
        point_count: usize,
        now_ms: i64,
        rng: &mut R,
    ) -> Result<Vec<Candle>, CoreError> {
        if point_count == 0 {
            return Err(CoreError::invalid("point count must be > 0"));
        }
        snapshot.validate()?;

        let step = self.step_ms(timeframe);
        if step == 0 {
            return Err(CoreError::invalid(format!(
                "timeframe '{}' resolves to a zero step",
                timeframe
            )));
        }
        let start_time = (point_count as u64)
            .checked_mul(step)
            .and_then(|span| i64::try_from(span).ok())
            .and_then(|span| now_ms.checked_sub(span))
            .ok_or_else(|| {
                CoreError::invalid(format!(
                    "{} candles of '{}' overflow the timestamp range",
                    point_count, timeframe
                ))
            })?;
        // `start + i * step` stays below `now_ms` for every i < point_count.
        let step = step as i64;

        let cfg = &self.config;
        let target = snapshot.current_price;
        let base_volatility =
            (snapshot.change_24h_pct.abs() / 100.0 * cfg.volatility_scale).max(cfg.min_volatility);
        let trend_strength =
            (snapshot.change_24h_pct / 100.0).clamp(MIN_TREND_STRENGTH, MAX_TREND_STRENGTH);

        let mut running = target / (1.0 + trend_strength);
        if !running.is_finite() {
            return Err(CoreError::invalid(format!(
                "starting price for {} at {:+}% overflows",
                target, snapshot.change_24h_pct
            )));
        }
        let mut candles = Vec::with_capacity(point_count);

        for i in 0..point_count {
            let progress = i as f64 / point_count as f64;

            let trend = (target - running) * progress * cfg.damping;
            let volatility_factor = base_volatility
                * uniform(rng, cfg.volatility_band_low, cfg.volatility_band_high);
            let noise = uniform(rng, -0.5, 0.5) * volatility_factor * running;
            let momentum =
                (progress * 4.0 * PI).sin() * cfg.momentum_scale * base_volatility * running;

            let open = running;
            let close = (open + trend + noise + momentum).max(PRICE_FLOOR);
            if !close.is_finite() {
                return Err(CoreError::invalid(format!(
                    "price path for {} overflows at candle {}",
                    target, i
                )));
            }
            let body_high = open.max(close);
            let body_low = open.min(close);

            let wick = volatility_factor * running * uniform(rng, 0.3, 1.0);
            let high = (body_high + wick * uniform(rng, 0.0, 0.8)).max(body_high);
            let low_floor = PRICE_FLOOR.min(body_low);
            let low = (body_low - wick * uniform(rng, 0.0, 0.8))
                .max(low_floor)
                .min(body_low);

            let relative_move = (close - open).abs() / running;
            let volume = snapshot.total_volume_24h
                * (1.0 + relative_move * cfg.volume_sensitivity)
                * uniform(rng, 0.1, 1.0);

            candles.push(Candle {
                timestamp: start_time + i as i64 * step,
                open,
                high,
                low,
                close,
                volume,
            });
            running = close;
        }

        if let Some(last) = candles.last_mut() {
            last.anchor_close(target);
        }

        tracing::debug!(
            points = point_count,
            timeframe = %timeframe,
            step_ms = step,
            "Generated synthetic series"
        );
        Ok(candles)
    }
}

/// Generate with the default tuning.
pub fn generate<R: Rng + ?Sized>(
    snapshot: &AssetSnapshot,
    timeframe: Timeframe,
    point_count: usize,
    rng: &mut R,
) -> Result<Vec<Candle>, CoreError> {
    SeriesGenerator::default().generate(snapshot, timeframe, point_count, rng)
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn same_seed_same_series() {
        let snap = AssetSnapshot::new(43_250.75, 2.34, 28_500_000_000.0);
        let gen = SeriesGenerator::default();
        let a = gen
            .generate_at(
                &snap,
                Timeframe::Hours(1),
                50,
                1_700_000_000_000,
                &mut StdRng::seed_from_u64(7),
            )
            .unwrap();
        let b = gen
            .generate_at(
                &snap,
                Timeframe::Hours(1),
                50,
                1_700_000_000_000,
                &mut StdRng::seed_from_u64(7),
            )
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_prices_keep_positive_lows() {
        let snap = AssetSnapshot::new(0.000_01, -40.0, 1_000.0);
        let mut rng = StdRng::seed_from_u64(3);
        let candles = generate(&snap, Timeframe::Minutes(5), 200, &mut rng).unwrap();
        assert!(candles.iter().all(Candle::is_well_formed));
        assert_eq!(candles.last().unwrap().close, 0.000_01);
    }

    #[test]
    fn overflowing_start_is_rejected() {
        let snap = AssetSnapshot::new(f64::MAX, -50.0, 0.0);
        let err = SeriesGenerator::default()
            .generate_at(&snap, Timeframe::Hours(1), 10, 0, &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn zero_max_step_is_rejected() {
        let gen = SeriesGenerator::new(GeneratorConfig {
            max_step_ms: 0,
            ..GeneratorConfig::default()
        });
        let snap = AssetSnapshot::new(1.0, 0.0, 0.0);
        let err = gen
            .generate_at(&snap, Timeframe::Max, 10, 0, &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }
}
