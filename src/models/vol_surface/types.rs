use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::model_params::{ensure_finite, ModelParams};

/// Strike × maturity grid and the admissible volatility band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceGrid {
    pub strike_min: f64,
    pub strike_max: f64,
    pub strike_steps: usize,
    /// Maturities in years
    pub maturity_min: f64,
    pub maturity_max: f64,
    pub maturity_steps: usize,
    pub vol_min: f64,
    pub vol_max: f64,
}

impl Default for SurfaceGrid {
    fn default() -> Self {
        Self {
            strike_min: 60.0,
            strike_max: 140.0,
            strike_steps: 25,
            maturity_min: 0.2,
            maturity_max: 3.0,
            maturity_steps: 22,
            vol_min: 0.05,
            vol_max: 0.9,
        }
    }
}

impl ModelParams for SurfaceGrid {
    fn model_name(&self) -> &'static str {
        "grid"
    }

    fn validate(&self) -> Result<()> {
        let name = self.model_name();
        ensure_finite(name, "strike_min", self.strike_min)?;
        ensure_finite(name, "strike_max", self.strike_max)?;
        ensure_finite(name, "maturity_min", self.maturity_min)?;
        ensure_finite(name, "maturity_max", self.maturity_max)?;
        ensure_finite(name, "vol_min", self.vol_min)?;
        ensure_finite(name, "vol_max", self.vol_max)?;
        if self.strike_min > self.strike_max {
            return Err(anyhow!(
                "grid: strike_min ({}) exceeds strike_max ({})",
                self.strike_min,
                self.strike_max
            ));
        }
        if self.maturity_min > self.maturity_max {
            return Err(anyhow!(
                "grid: maturity_min ({}) exceeds maturity_max ({})",
                self.maturity_min,
                self.maturity_max
            ));
        }
        if self.maturity_min <= -1.0 {
            return Err(anyhow!(
                "grid: maturity_min must be > -1 for ln(1 + T) (got {})",
                self.maturity_min
            ));
        }
        if self.vol_min > self.vol_max {
            return Err(anyhow!(
                "grid: vol_min ({}) exceeds vol_max ({})",
                self.vol_min,
                self.vol_max
            ));
        }
        Ok(())
    }
}

/// Evaluated surface; `vols[i][j]` is the vol at `maturities[i]` and `strikes[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolSurface {
    pub strikes: Vec<f64>,
    pub maturities: Vec<f64>,
    pub vols: Vec<Vec<f64>>,
}

impl VolSurface {
    /// Smile (vol per strike) at the given maturity index.
    pub fn slice(&self, maturity_index: usize) -> Option<&[f64]> {
        self.vols.get(maturity_index).map(|row| row.as_slice())
    }

    /// Smallest and largest grid value, `None` for an empty surface.
    pub fn vol_range(&self) -> Option<(f64, f64)> {
        let mut values = self.vols.iter().flatten().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// `(maturity, vol)` at the grid strike closest to `spot` for each maturity.
    pub fn atm_term_structure(&self, spot: f64) -> Vec<(f64, f64)> {
        let atm_index = self
            .strikes
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - spot).abs().total_cmp(&(*b - spot).abs()))
            .map(|(i, _)| i);

        match atm_index {
            Some(j) => self
                .maturities
                .iter()
                .zip(&self.vols)
                .map(|(&t, row)| (t, row[j]))
                .collect(),
            None => Vec::new(),
        }
    }
}
