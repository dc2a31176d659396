use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::generator::GeneratorConfig;
use crate::indicator::{IndicatorParams, PatternConfig};
use crate::market::MarketConfig;
use crate::model::Timeframe;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chart: ChartConfig,
    pub generator: GeneratorConfig,
    pub indicators: IndicatorParams,
    pub patterns: PatternConfig,
    pub market: MarketConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub default_timeframe: Timeframe,
    /// Fixed RNG seed; unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_timeframe: Timeframe::Hours(1),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn config_path() -> PathBuf {
    std::env::var("COINSCOPE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config/default.toml"))
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).context("failed to parse config toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Missing file falls back to built-in defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let config_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Self::from_toml_str(&config_str)
                .with_context(|| format!("invalid config in {}", path.display()))?
        } else {
            Self::default()
        };

        config.market.coingecko_api_key = std::env::var("COINGECKO_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        Ok(config)
    }

    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from_path(&config_path())
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.generator;
        if g.volatility_band_low < 0.0 || g.volatility_band_high < g.volatility_band_low {
            bail!(
                "generator volatility band [{}, {}] is invalid",
                g.volatility_band_low,
                g.volatility_band_high
            );
        }
        if g.max_step_ms == 0 {
            bail!("generator.max_step_ms must be > 0");
        }
        if self.indicators.sma_windows.iter().any(|w| *w == 0) {
            bail!("indicators.sma_windows must all be > 0");
        }
        let k = self.indicators.bollinger_k;
        if !k.is_finite() || k < 0.0 {
            bail!("indicators.bollinger_k must be a finite number >= 0, got {}", k);
        }
        if self.market.providers.is_empty() {
            tracing::warn!("No market providers configured; only the offline catalog will be used");
        }
        Ok(())
    }
}
