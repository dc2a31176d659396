use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog;
use crate::error::AppError;
use crate::model::AssetSnapshot;

use super::provider::ProviderKind;
use super::types::MarketQuote;

/// Source label for quotes served from the offline catalog.
pub const FALLBACK_SOURCE: &str = "fallback";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderEndpoint {
    pub kind: ProviderKind,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ProviderEndpoint {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            base_url: None,
        }
    }

    pub fn url(&self) -> String {
        let base = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.kind.default_base_url());
        self.kind.endpoint(base)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Tried in order; the first non-empty answer wins.
    pub providers: Vec<ProviderEndpoint>,
    pub cache_ttl_ms: u64,
    /// Minimum spacing between outgoing requests.
    pub min_interval_ms: u64,
    pub request_timeout_ms: u64,
    #[serde(skip)]
    pub coingecko_api_key: Option<String>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            providers: ProviderKind::all()
                .into_iter()
                .map(ProviderEndpoint::new)
                .collect(),
            cache_ttl_ms: 30_000,
            min_interval_ms: 2_000,
            request_timeout_ms: 10_000,
            coingecko_api_key: None,
        }
    }
}

/// Resolved snapshot plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAsset {
    pub quote: MarketQuote,
    pub snapshot: AssetSnapshot,
}

/// Multi-provider quote feed with a short cache and request pacing.
///
/// Provider failures never surface: each one is logged and the next provider
/// is tried, and when all of them fail the offline catalog is served.
pub struct MarketFeed {
    http: reqwest::Client,
    config: MarketConfig,
    cache: Option<(Instant, Vec<MarketQuote>)>,
    last_call: Option<Instant>,
}

impl MarketFeed {
    pub fn new(config: MarketConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            config,
            cache: None,
            last_call: None,
        })
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    pub fn invalidate_cache(&mut self) {
        self.cache = None;
    }

    pub async fn quotes(&mut self) -> Vec<MarketQuote> {
        let ttl = Duration::from_millis(self.config.cache_ttl_ms);
        if let Some((fetched_at, quotes)) = &self.cache {
            if fetched_at.elapsed() < ttl {
                tracing::debug!(count = quotes.len(), "Using cached quotes");
                return quotes.clone();
            }
        }

        let providers = self.config.providers.clone();
        for provider in &providers {
            match self.fetch(provider).await {
                Ok(quotes) if !quotes.is_empty() => {
                    tracing::info!(
                        source = %provider.kind,
                        count = quotes.len(),
                        "Fetched market quotes"
                    );
                    self.cache = Some((Instant::now(), quotes.clone()));
                    return quotes;
                }
                Ok(_) => {
                    tracing::warn!(source = %provider.kind, "Provider returned no quotes");
                }
                Err(e) => {
                    tracing::warn!(
                        source = %provider.kind,
                        error = %e,
                        "Provider failed, trying next"
                    );
                }
            }
        }

        tracing::warn!("All market providers failed; serving offline catalog");
        catalog::ASSETS
            .iter()
            .map(|a| MarketQuote::from_catalog(a, FALLBACK_SOURCE))
            .collect()
    }

    /// Resolve an asset by id or symbol from live quotes, then the catalog.
    pub async fn resolve(&mut self, id_or_symbol: &str) -> Result<ResolvedAsset, AppError> {
        let quotes = self.quotes().await;
        let quote = quotes
            .into_iter()
            .find(|q| q.matches(id_or_symbol))
            .or_else(|| {
                catalog::find(id_or_symbol).map(|a| MarketQuote::from_catalog(a, FALLBACK_SOURCE))
            })
            .ok_or_else(|| AppError::UnknownAsset(id_or_symbol.to_string()))?;
        let snapshot = quote.snapshot();
        snapshot.validate()?;
        Ok(ResolvedAsset { quote, snapshot })
    }

    async fn fetch(&mut self, provider: &ProviderEndpoint) -> Result<Vec<MarketQuote>, AppError> {
        self.pace().await;

        let url = provider.url();
        let mut req = self.http.get(&url);
        if provider.kind == ProviderKind::CoinGecko {
            if let Some(key) = self.config.coingecko_api_key.as_deref() {
                req = req.header("x-cg-demo-api-key", key);
            }
        }
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Provider {
                source_name: provider.kind.name().to_string(),
                msg: format!("HTTP {}", status),
            });
        }
        let body = resp.text().await?;
        provider.kind.parse(&body)
    }

    async fn pace(&mut self) {
        let min_interval = Duration::from_millis(self.config.min_interval_ms);
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < min_interval {
                tokio::time::sleep(min_interval - elapsed).await;
            }
        }
        self.last_call = Some(Instant::now());
    }
}
