use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::debounce::DebounceConfig;
use crate::model_params::{
    CrashParams, CurveFitParams, ModelParams, OrderBookParams, SurfaceParams,
};
use crate::models::vol_surface::SurfaceGrid;

/// Top-level configuration for a lab session.
///
/// Every table is optional in TOML; missing tables and fields fall back to the
/// defaults of the interactive demos.
///
/// ```toml
/// seed = 42
///
/// [crash]
/// path_count = 200
/// crash_prob = 0.15
///
/// [surface]
/// skew = -0.4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    /// Seed for every stochastic model; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of histogram bins for the final return distribution.
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    #[serde(default)]
    pub curve_fit: CurveFitParams,

    #[serde(default)]
    pub crash: CrashParams,

    #[serde(default)]
    pub surface: SurfaceParams,

    #[serde(default)]
    pub grid: SurfaceGrid,

    #[serde(default)]
    pub order_book: OrderBookParams,

    #[serde(default)]
    pub debounce: DebounceConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            seed: None,
            histogram_bins: default_histogram_bins(),
            curve_fit: CurveFitParams::default(),
            crash: CrashParams::default(),
            surface: SurfaceParams::default(),
            grid: SurfaceGrid::default(),
            order_book: OrderBookParams::default(),
            debounce: DebounceConfig::default(),
        }
    }
}

impl LabConfig {
    /// The settings the interactive demos start with.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Small, seeded configuration for tests and quick checks
    pub fn quick() -> Self {
        Self {
            seed: Some(7),
            curve_fit: CurveFitParams {
                count: 20,
                curve_samples: 40,
                ..CurveFitParams::default()
            },
            crash: CrashParams {
                path_count: 20,
                step_count: 12,
                ..CrashParams::default()
            },
            grid: SurfaceGrid {
                strike_steps: 9,
                maturity_steps: 5,
                ..SurfaceGrid::default()
            },
            histogram_bins: 10,
            ..Self::default()
        }
    }

    /// Dense grids and many paths for smooth offline charts
    pub fn detailed() -> Self {
        Self {
            curve_fit: CurveFitParams {
                count: 80,
                curve_samples: 400,
                show_split: true,
                ..CurveFitParams::default()
            },
            crash: CrashParams {
                path_count: 2000,
                step_count: 252,
                ..CrashParams::default()
            },
            grid: SurfaceGrid {
                strike_steps: 81,
                maturity_steps: 57,
                ..SurfaceGrid::default()
            },
            histogram_bins: 40,
            ..Self::default()
        }
    }

    /// Reproducible stress scenario for a classroom walkthrough: high crash
    /// risk, a steep skew and an overfitting-prone degree.
    pub fn classroom() -> Self {
        Self {
            seed: Some(2024),
            curve_fit: CurveFitParams {
                degree: 8,
                noise: 1.0,
                show_split: true,
                ..CurveFitParams::default()
            },
            crash: CrashParams {
                crash_prob: 0.3,
                crash_size: 0.4,
                volatility: 0.35,
                ..CrashParams::default()
            },
            surface: SurfaceParams {
                skew: -0.6,
                smile: 1.2,
                ..SurfaceParams::default()
            },
            ..Self::default()
        }
    }

    /// Same configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: LabConfig = toml::from_str(s).context("failed to parse lab config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read lab config {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("invalid lab config {}", path.display()))?;
        tracing::info!(path = %path.display(), seed = ?config.seed, "loaded lab config");
        Ok(config)
    }

    /// Serialise back to TOML, e.g. to save a tuned scenario.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialise lab config")
    }

    /// Validate every parameter table.
    pub fn validate(&self) -> Result<()> {
        let tables: [&dyn ModelParams; 5] = [
            &self.curve_fit,
            &self.crash,
            &self.surface,
            &self.grid,
            &self.order_book,
        ];
        for table in tables {
            if let Err(e) = table.validate() {
                tracing::warn!(model = table.model_name(), error = %e, "invalid lab config");
                return Err(e);
            }
        }
        Ok(())
    }
}

fn default_histogram_bins() -> usize {
    20
}
