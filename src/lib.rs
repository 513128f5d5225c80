//! # Quant-Lab: Numeric Core for Interactive Finance Demos
//!
//! `quant-lab` holds the computations behind a set of interactive teaching widgets.
//! The presentation layer owns sliders, charts and layout; this crate provides pure,
//! synchronous entry points that it calls whenever a parameter changes.
//!
//! ## Core Features
//!
//! - **Curve Fitting**: Ridge-regularised polynomial least squares with train/validation scoring
//! - **Crash Simulator**: Monte Carlo geometric Brownian motion with random crashes
//! - **Volatility Surface**: Closed-form, clamped implied volatility surface over a strike × maturity grid
//! - **Order Book**: Toy limit order book with background flow and a trades tape
//!
//! ## Quick Start
//!
//! ```rust
//! use quant_lab::{default_configs, run_crash_simulation, run_curve_fit, build_surface};
//!
//! let config = default_configs::quick();
//!
//! let fit = run_curve_fit(&config);
//! println!("train MSE {:.4}", fit.report.train_mse);
//!
//! let crash = run_crash_simulation(&config);
//! println!("mean return {:.2}%", crash.result.stats.mean * 100.0);
//!
//! let surface = build_surface(&config);
//! assert_eq!(surface.strikes.len(), config.grid.strike_steps);
//! ```
//!
//! ## Reproducibility
//!
//! Every stochastic entry point takes its randomness from the caller. The
//! `run_*` helpers build a [`rand::rngs::StdRng`] from [`LabConfig::seed`], so a
//! seeded configuration always produces the same output.
//!
//! ## Configuration Presets
//!
//! - `standard()`: the settings the demos start with
//! - `quick()`: small, seeded runs for tests
//! - `detailed()`: dense grids and many paths
//! - `classroom()`: a reproducible stress scenario

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod debounce;
pub mod export;
pub mod model_params;
pub mod models;

// ================================================================================================
// IMPORTS
// ================================================================================================

use rand::Rng;
use serde::{Deserialize, Serialize};

use models::{
    jump_diffusion::{histogram, HistogramBin},
    poly::{fit_report_with_scope, generate_points},
    random::seeded_rng,
};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Configuration
pub use config::LabConfig;
pub use debounce::{DebounceConfig, Debouncer};

// Model parameter types
pub use model_params::{
    CrashParams, CurveFitParams, ModelParams, OrderBookParams, SurfaceParams,
};

// Model outputs
pub use models::jump_diffusion::{SimulationResult, SimulationStats};
pub use models::order_book::{Level, Order, OrderBook, OrderType, Side, Trade};
pub use models::poly::{Coefficients, FitReport, FitScope, SamplePoint, Split, Stability};
pub use models::vol_surface::{ParametricSurface, SurfaceGrid, VolSurface};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured lab settings for common use cases.
///
/// # Available Configurations
///
/// - [`standard()`]: Interactive demo defaults
/// - [`quick()`]: Small seeded runs
/// - [`detailed()`]: High-resolution output
/// - [`classroom()`]: Reproducible stress scenario
pub mod default_configs {
    use crate::config::LabConfig;

    /// The settings the interactive demos start with.
    ///
    /// **Characteristics:**
    /// - 40 sample points, noise 0.6, degree 3
    /// - 100 paths of 60 steps over one year
    /// - 25 × 22 surface grid
    /// - Unseeded: every run differs
    ///
    /// # Example
    ///
    /// ```rust
    /// use quant_lab::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.curve_fit.degree, 3);
    /// ```
    pub fn standard() -> LabConfig {
        LabConfig::standard()
    }

    /// Small, seeded configuration.
    ///
    /// **Characteristics:**
    /// - 20 sample points
    /// - 20 paths of 12 steps
    /// - 9 × 5 surface grid
    /// - Seed 7
    ///
    /// **Use Cases:**
    /// - Unit and integration tests
    /// - Doc examples
    pub fn quick() -> LabConfig {
        LabConfig::quick()
    }

    /// High-resolution configuration for offline charts.
    ///
    /// **Characteristics:**
    /// - 80 points with a validation split and 400 curve samples
    /// - 2,000 paths of 252 steps
    /// - 81 × 57 surface grid
    pub fn detailed() -> LabConfig {
        LabConfig::detailed()
    }

    /// Reproducible stress scenario for a walkthrough.
    ///
    /// **Characteristics:**
    /// - Degree 8 fit on noisy data (flagged high variance)
    /// - 30% annual crash probability, 40% crash size
    /// - Steep skew and pronounced smile
    /// - Seed 2024
    pub fn classroom() -> LabConfig {
        LabConfig::classroom()
    }
}

// ================================================================================================
// RUN OUTPUTS
// ================================================================================================

/// Sample points together with the fit computed on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFitRun {
    pub params: CurveFitParams,
    pub points: Vec<SamplePoint>,
    pub report: FitReport,
}

/// Simulated paths and the distribution of their final returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrashRun {
    pub result: SimulationResult,
    pub histogram: Vec<HistogramBin>,
}

// ================================================================================================
// ENTRY POINTS
// ================================================================================================

/// Least-squares polynomial fit with a small ridge term.
///
/// Solves `(XᵀX + λI) c = Xᵀy` with `λ = 1e-4` by Gauss-Jordan elimination.
///
/// # Arguments
///
/// * `points` - Observations to fit. The split tag is ignored; every point is used.
/// * `degree` - Polynomial degree `D`.
///
/// # Returns
///
/// `D + 1` coefficients ordered by increasing power, or an empty vector when
/// `points` is empty. Never fails: a singular system yields finite, possibly
/// meaningless coefficients.
///
/// # Example
///
/// ```rust
/// use quant_lab::{fit_polynomial, SamplePoint};
///
/// let points: Vec<_> = (0..5).map(|i| {
///     let x = i as f64 - 2.0;
///     SamplePoint::new(x, 2.0 * x + 1.0)
/// }).collect();
/// let c = fit_polynomial(&points, 1);
/// assert!((c[0] - 1.0).abs() < 1e-3 && (c[1] - 2.0).abs() < 1e-3);
/// ```
pub fn fit_polynomial(points: &[SamplePoint], degree: usize) -> Coefficients {
    models::poly::fit_polynomial(points, degree)
}

/// Monte Carlo price paths under GBM with random crashes.
///
/// Each of `params.path_count` paths starts at `params.initial_price` and takes
/// `params.step_count` steps of `dt = horizon / step_count`. Per step the price is
/// multiplied by `exp((μ - σ²/2)dt + σ√dt·Z)` and then, with probability
/// `crash_prob · dt`, by `1 - crash_size`.
///
/// Randomness comes only from `rng`; pass [`models::random::seeded_rng`] for
/// reproducible output.
pub fn simulate_paths<R: Rng + ?Sized>(params: &CrashParams, rng: &mut R) -> SimulationResult {
    models::jump_diffusion::simulate_paths(params, rng)
}

/// Evaluate the parametric surface over `grid`.
///
/// ```text
/// vol(K, T) = clamp(base + skew·m + smile·m² + term·ln(1 + T), vol_min, vol_max)
/// ```
///
/// with `m = (K - spot) / spot`. Every returned value lies in
/// `[grid.vol_min, grid.vol_max]`.
pub fn generate_surface(params: &SurfaceParams, grid: &SurfaceGrid) -> VolSurface {
    models::vol_surface::generate_surface(params, grid)
}

/// Generate sample points and fit them, using the config's seed.
///
/// Slider values outside the widget ranges are clamped first.
pub fn run_curve_fit(config: &LabConfig) -> CurveFitRun {
    let params = config.curve_fit.clamped();
    if params != config.curve_fit {
        tracing::warn!(
            requested = ?config.curve_fit,
            used = ?params,
            "curve fit parameters clamped to widget ranges"
        );
    }

    let mut rng = seeded_rng(config.seed);
    let points = generate_points(&params, &mut rng);
    let report = fit_report_with_scope(
        &points,
        params.degree,
        params.curve_samples,
        params.fit_scope,
    );

    CurveFitRun {
        params,
        points,
        report,
    }
}

/// Run the crash simulator with the config's seed and bin the final returns.
pub fn run_crash_simulation(config: &LabConfig) -> CrashRun {
    let mut rng = seeded_rng(config.seed);
    let result = simulate_paths(&config.crash, &mut rng);
    let histogram = histogram(&result.final_returns, config.histogram_bins);
    CrashRun { result, histogram }
}

/// Build the volatility surface described by the config.
pub fn build_surface(config: &LabConfig) -> VolSurface {
    generate_surface(&config.surface, &config.grid)
}

/// Seed an order book from the config, returning it with the generator that
/// should keep driving its background flow.
pub fn open_order_book(config: &LabConfig) -> (OrderBook, rand::rngs::StdRng) {
    let mut rng = seeded_rng(config.seed);
    let book = OrderBook::new(config.order_book.clone(), &mut rng);
    (book, rng)
}
