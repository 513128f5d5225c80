use super::types::{SurfaceGrid, VolSurface};
use crate::model_params::SurfaceParams;
use crate::models::traits::VolatilityModel;
use crate::models::utils::{clamp, linspace, moneyness};

/// Closed-form parametric surface bound to a volatility band.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricSurface {
    params: SurfaceParams,
    vol_min: f64,
    vol_max: f64,
}

impl ParametricSurface {
    pub fn new(params: SurfaceParams, vol_min: f64, vol_max: f64) -> Self {
        Self {
            params,
            vol_min,
            vol_max,
        }
    }

    pub fn from_grid(params: SurfaceParams, grid: &SurfaceGrid) -> Self {
        Self::new(params, grid.vol_min, grid.vol_max)
    }

    /// Unclamped model value; may be negative or non-finite for extreme inputs.
    pub fn raw_vol(&self, strike: f64, maturity: f64) -> f64 {
        let p = &self.params;
        let m = moneyness(strike, p.spot);
        p.base_vol + p.skew * m + p.smile * m * m + p.term * maturity.ln_1p()
    }
}

impl VolatilityModel for ParametricSurface {
    type Parameters = SurfaceParams;

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn vol(&self, strike: f64, maturity: f64) -> f64 {
        clamp(self.raw_vol(strike, maturity), self.vol_min, self.vol_max)
    }
}

/// Evaluate the parametric surface on `grid`.
///
/// Total over its inputs: any `params` (including zero spot or infinite
/// coefficients) produce a matrix whose entries lie in `[grid.vol_min, grid.vol_max]`.
pub fn generate_surface(params: &SurfaceParams, grid: &SurfaceGrid) -> VolSurface {
    let model = ParametricSurface::from_grid(*params, grid);
    let strikes = linspace(grid.strike_min, grid.strike_max, grid.strike_steps);
    let maturities = linspace(grid.maturity_min, grid.maturity_max, grid.maturity_steps);

    let vols: Vec<Vec<f64>> = maturities
        .iter()
        .map(|&t| strikes.iter().map(|&k| model.vol(k, t)).collect())
        .collect();

    tracing::debug!(
        strikes = strikes.len(),
        maturities = maturities.len(),
        spot = params.spot,
        "generated volatility surface"
    );

    VolSurface {
        strikes,
        maturities,
        vols,
    }
}
