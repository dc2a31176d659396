use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;
use crate::generator::{GeneratorConfig, SeriesGenerator};
use crate::indicator::{
    compute_indicators_with, detect_patterns, ChartPattern, IndicatorParams, IndicatorSet,
    IndicatorSummary, PatternConfig,
};
use crate::market::{MarketQuote, ResolvedAsset};
use crate::model::{closes, Candle, Timeframe};
use crate::prediction::{predict, Prediction};

/// Everything the chart view needs for one asset and timeframe.
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub asset: MarketQuote,
    pub timeframe: Timeframe,
    pub step_ms: u64,
    pub generated_at: i64,
    pub candles: Vec<Candle>,
    pub indicators: IndicatorSet,
    pub summary: Option<IndicatorSummary>,
    pub patterns: Vec<ChartPattern>,
    pub predictions: [Prediction; 3],
}

#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    generator: SeriesGenerator,
    indicators: IndicatorParams,
    patterns: PatternConfig,
}

impl ReportBuilder {
    pub fn new(
        generator: GeneratorConfig,
        indicators: IndicatorParams,
        patterns: PatternConfig,
    ) -> Self {
        Self {
            generator: SeriesGenerator::new(generator),
            indicators,
            patterns,
        }
    }

    /// `points` defaults to the timeframe's usual chart density.
    pub fn build_at<R: Rng + ?Sized>(
        &self,
        asset: &ResolvedAsset,
        timeframe: Timeframe,
        points: Option<usize>,
        now_ms: i64,
        rng: &mut R,
    ) -> Result<ChartReport, CoreError> {
        let points = points.unwrap_or_else(|| timeframe.default_point_count());
        let candles = self
            .generator
            .generate_at(&asset.snapshot, timeframe, points, now_ms, rng)?;
        let close_prices = closes(&candles);
        let indicators = compute_indicators_with(&close_prices, &self.indicators);
        let summary = IndicatorSummary::from_closes(&close_prices, &indicators);
        let patterns = detect_patterns(&candles, &self.patterns);
        let predictions = predict(&asset.snapshot, rng);

        Ok(ChartReport {
            asset: asset.quote.clone(),
            timeframe,
            step_ms: self.generator.step_ms(timeframe),
            generated_at: now_ms,
            candles,
            indicators,
            summary,
            patterns,
            predictions,
        })
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        asset: &ResolvedAsset,
        timeframe: Timeframe,
        points: Option<usize>,
        rng: &mut R,
    ) -> Result<ChartReport, CoreError> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.build_at(asset, timeframe, points, now_ms, rng)
    }
}
