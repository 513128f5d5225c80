//! Immutable parameter snapshots for each demo model.
//!
//! The presentation layer owns every mutable slider and toggle. Whenever a value
//! changes it builds a fresh parameter struct and hands it to the pure entry points
//! in [`crate::models`]. Each struct implements [`ModelParams`] so that the config
//! loader can validate them uniformly.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::models::poly::FitScope;

/// Common behaviour for the parameter structs carried by [`crate::config::LabConfig`].
pub trait ModelParams: Send + Sync + std::fmt::Debug {
    /// Short name used in log events and error messages (e.g. "crash").
    fn model_name(&self) -> &'static str;

    /// Rejects values the numeric core cannot interpret (non-finite floats,
    /// inverted ranges). The core itself never fails, so this is only called at
    /// the edges where parameters enter from files or user input.
    fn validate(&self) -> Result<()>;
}

pub(crate) fn ensure_finite(model: &str, name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(anyhow!("{model}: parameter {name} must be finite (got {value})"))
    }
}

/// Clamp `value` into `range`; NaN falls back to `fallback`.
fn snap(value: f64, range: (f64, f64), fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.max(range.0).min(range.1)
    }
}

/// Parameters of the curve fitting playground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveFitParams {
    /// Number of synthetic sample points.
    pub count: usize,
    /// Noise level; the Gaussian perturbation has standard deviation `noise * 0.4`.
    pub noise: f64,
    /// Polynomial degree of the fit.
    pub degree: usize,
    /// Tag every fifth point as a validation point.
    pub show_split: bool,
    /// Number of samples used when drawing the fitted curve.
    pub curve_samples: usize,
    /// Points the coefficients are fitted on.
    pub fit_scope: FitScope,
}

impl CurveFitParams {
    pub const COUNT_RANGE: (usize, usize) = (10, 80);
    pub const NOISE_RANGE: (f64, f64) = (0.0, 1.5);
    pub const DEGREE_RANGE: (usize, usize) = (1, 8);

    /// Snap the parameters into the ranges offered by the playground sliders.
    pub fn clamped(&self) -> Self {
        Self {
            count: self.count.clamp(Self::COUNT_RANGE.0, Self::COUNT_RANGE.1),
            noise: snap(self.noise, Self::NOISE_RANGE, Self::default().noise),
            degree: self.degree.clamp(Self::DEGREE_RANGE.0, Self::DEGREE_RANGE.1),
            show_split: self.show_split,
            curve_samples: self.curve_samples.max(2),
            fit_scope: self.fit_scope,
        }
    }
}

impl Default for CurveFitParams {
    fn default() -> Self {
        Self {
            count: 40,
            noise: 0.6,
            degree: 3,
            show_split: false,
            curve_samples: 120,
            fit_scope: FitScope::TrainOnly,
        }
    }
}

impl ModelParams for CurveFitParams {
    fn model_name(&self) -> &'static str {
        "curve_fit"
    }

    fn validate(&self) -> Result<()> {
        ensure_finite(self.model_name(), "noise", self.noise)?;
        if self.noise < 0.0 {
            return Err(anyhow!(
                "curve_fit: noise must be non-negative (got {})",
                self.noise
            ));
        }
        Ok(())
    }
}

/// Parameters of the market crash simulator (jump-diffusion Monte Carlo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrashParams {
    /// Annualised drift μ.
    pub drift: f64,
    /// Annualised volatility σ.
    pub volatility: f64,
    /// Annualised crash probability p; the per-step jump probability is `p * dt`.
    pub crash_prob: f64,
    /// Fraction of the price lost on a crash.
    pub crash_size: f64,
    pub path_count: usize,
    pub step_count: usize,
    /// Time horizon in years.
    pub horizon: f64,
    pub initial_price: f64,
}

impl Default for CrashParams {
    fn default() -> Self {
        Self {
            drift: 0.06,
            volatility: 0.25,
            crash_prob: 0.08,
            crash_size: 0.3,
            path_count: 100,
            step_count: 60,
            horizon: 1.0,
            initial_price: 100.0,
        }
    }
}

impl CrashParams {
    pub const DRIFT_RANGE: (f64, f64) = (-0.05, 0.15);
    pub const VOLATILITY_RANGE: (f64, f64) = (0.05, 0.6);
    pub const CRASH_PROB_RANGE: (f64, f64) = (0.0, 0.3);
    pub const CRASH_SIZE_RANGE: (f64, f64) = (0.1, 0.6);
    pub const PATH_COUNT_RANGE: (usize, usize) = (20, 200);

    /// Snap the slider-backed parameters into the simulator widget's ranges.
    /// Step count, horizon and initial price are left alone.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            drift: snap(self.drift, Self::DRIFT_RANGE, defaults.drift),
            volatility: snap(self.volatility, Self::VOLATILITY_RANGE, defaults.volatility),
            crash_prob: snap(self.crash_prob, Self::CRASH_PROB_RANGE, defaults.crash_prob),
            crash_size: snap(self.crash_size, Self::CRASH_SIZE_RANGE, defaults.crash_size),
            path_count: self
                .path_count
                .clamp(Self::PATH_COUNT_RANGE.0, Self::PATH_COUNT_RANGE.1),
            ..self.clone()
        }
    }

    /// Length of one simulation step in years.
    pub fn dt(&self) -> f64 {
        if self.step_count == 0 {
            return 0.0;
        }
        self.horizon / self.step_count as f64
    }
}

impl ModelParams for CrashParams {
    fn model_name(&self) -> &'static str {
        "crash"
    }

    fn validate(&self) -> Result<()> {
        let name = self.model_name();
        ensure_finite(name, "drift", self.drift)?;
        ensure_finite(name, "volatility", self.volatility)?;
        ensure_finite(name, "crash_prob", self.crash_prob)?;
        ensure_finite(name, "crash_size", self.crash_size)?;
        ensure_finite(name, "horizon", self.horizon)?;
        ensure_finite(name, "initial_price", self.initial_price)?;
        if self.initial_price <= 0.0 {
            return Err(anyhow!(
                "crash: initial_price must be > 0 (got {})",
                self.initial_price
            ));
        }
        if self.horizon < 0.0 {
            return Err(anyhow!("crash: horizon must be >= 0 (got {})", self.horizon));
        }
        if self.volatility < 0.0 {
            return Err(anyhow!(
                "crash: volatility must be >= 0 (got {})",
                self.volatility
            ));
        }
        if self.crash_prob < 0.0 {
            return Err(anyhow!(
                "crash: crash_prob must be >= 0 (got {})",
                self.crash_prob
            ));
        }
        Ok(())
    }
}

/// Coefficients of the synthetic implied volatility surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceParams {
    pub spot: f64,
    pub base_vol: f64,
    /// Linear coefficient on moneyness.
    pub skew: f64,
    /// Quadratic coefficient on moneyness (smile curvature).
    pub smile: f64,
    /// Coefficient on `ln(1 + T)`.
    pub term: f64,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            base_vol: 0.22,
            skew: -0.25,
            smile: 0.6,
            term: 0.2,
        }
    }
}

impl SurfaceParams {
    pub const SPOT_RANGE: (f64, f64) = (80.0, 140.0);
    pub const BASE_VOL_RANGE: (f64, f64) = (0.1, 0.6);
    pub const SKEW_RANGE: (f64, f64) = (-0.6, 0.2);
    pub const SMILE_RANGE: (f64, f64) = (0.0, 1.2);
    pub const TERM_RANGE: (f64, f64) = (-0.1, 0.5);

    /// Snap every coefficient into the surface widget's slider range.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            spot: snap(self.spot, Self::SPOT_RANGE, defaults.spot),
            base_vol: snap(self.base_vol, Self::BASE_VOL_RANGE, defaults.base_vol),
            skew: snap(self.skew, Self::SKEW_RANGE, defaults.skew),
            smile: snap(self.smile, Self::SMILE_RANGE, defaults.smile),
            term: snap(self.term, Self::TERM_RANGE, defaults.term),
        }
    }
}

impl ModelParams for SurfaceParams {
    fn model_name(&self) -> &'static str {
        "surface"
    }

    fn validate(&self) -> Result<()> {
        let name = self.model_name();
        ensure_finite(name, "spot", self.spot)?;
        ensure_finite(name, "base_vol", self.base_vol)?;
        ensure_finite(name, "skew", self.skew)?;
        ensure_finite(name, "smile", self.smile)?;
        ensure_finite(name, "term", self.term)
    }
}

/// Parameters of the toy order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBookParams {
    /// Number of price levels kept on each side.
    pub levels: usize,
    pub tick: f64,
    pub initial_mid: f64,
    /// Bounds applied to level sizes while they drift.
    pub min_level_size: f64,
    pub max_level_size: f64,
    /// A top level at or below this size is removed and replaced.
    pub refill_threshold: f64,
    /// Length of the recent trades tape.
    pub max_trades: usize,
    pub max_order_size: f64,
}

impl Default for OrderBookParams {
    fn default() -> Self {
        Self {
            levels: 8,
            tick: 0.25,
            initial_mid: 100.0,
            min_level_size: 10.0,
            max_level_size: 240.0,
            refill_threshold: 5.0,
            max_trades: 6,
            max_order_size: 500.0,
        }
    }
}

impl ModelParams for OrderBookParams {
    fn model_name(&self) -> &'static str {
        "order_book"
    }

    fn validate(&self) -> Result<()> {
        let name = self.model_name();
        ensure_finite(name, "tick", self.tick)?;
        ensure_finite(name, "initial_mid", self.initial_mid)?;
        ensure_finite(name, "min_level_size", self.min_level_size)?;
        ensure_finite(name, "max_level_size", self.max_level_size)?;
        ensure_finite(name, "refill_threshold", self.refill_threshold)?;
        ensure_finite(name, "max_order_size", self.max_order_size)?;
        if self.tick <= 0.0 {
            return Err(anyhow!("order_book: tick must be > 0 (got {})", self.tick));
        }
        if self.min_level_size > self.max_level_size {
            return Err(anyhow!(
                "order_book: min_level_size ({}) exceeds max_level_size ({})",
                self.min_level_size,
                self.max_level_size
            ));
        }
        if self.max_order_size < 1.0 {
            return Err(anyhow!(
                "order_book: max_order_size must be >= 1 (got {})",
                self.max_order_size
            ));
        }
        Ok(())
    }
}
