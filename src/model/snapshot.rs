use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Point-in-time market description of one asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub current_price: f64,
    pub change_24h_pct: f64,
    #[serde(default)]
    pub change_7d_pct: f64,
    #[serde(default)]
    pub change_30d_pct: f64,
    #[serde(default)]
    pub total_volume_24h: f64,
}

impl AssetSnapshot {
    pub fn new(current_price: f64, change_24h_pct: f64, total_volume_24h: f64) -> Self {
        Self {
            current_price,
            change_24h_pct,
            change_7d_pct: 0.0,
            change_30d_pct: 0.0,
            total_volume_24h,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.current_price.is_finite() || self.current_price <= 0.0 {
            return Err(CoreError::invalid(format!(
                "current price must be a positive number, got {}",
                self.current_price
            )));
        }
        for (name, pct) in [
            ("24h change", self.change_24h_pct),
            ("7d change", self.change_7d_pct),
            ("30d change", self.change_30d_pct),
        ] {
            if !pct.is_finite() {
                return Err(CoreError::invalid(format!("{} must be finite", name)));
            }
        }
        if !self.total_volume_24h.is_finite() || self.total_volume_24h < 0.0 {
            return Err(CoreError::invalid(format!(
                "24h volume must be >= 0, got {}",
                self.total_volume_24h
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_prices_and_volume() {
        assert!(AssetSnapshot::new(100.0, 1.0, 0.0).validate().is_ok());
        assert!(AssetSnapshot::new(0.0, 1.0, 0.0).validate().is_err());
        assert!(AssetSnapshot::new(-5.0, 1.0, 0.0).validate().is_err());
        assert!(AssetSnapshot::new(f64::NAN, 1.0, 0.0).validate().is_err());
        assert!(AssetSnapshot::new(1.0, f64::INFINITY, 0.0).validate().is_err());
        assert!(AssetSnapshot::new(1.0, 1.0, -1.0).validate().is_err());
    }
}
