pub mod jump_diffusion;
pub mod order_book;
pub mod poly;
pub mod random;
pub mod vol_surface;

/// Common traits used by the surface models
pub mod traits {
    /// Anything that can quote an implied volatility for a strike and maturity.
    pub trait VolatilityModel {
        type Parameters;

        fn parameters(&self) -> &Self::Parameters;

        /// Implied volatility (decimal) at `strike` and `maturity` (years).
        fn vol(&self, strike: f64, maturity: f64) -> f64;
    }
}

/// Small numeric helpers shared by the models
pub mod utils {
    /// Relative distance of a strike from spot: (K - S) / S
    pub fn moneyness(strike: f64, spot: f64) -> f64 {
        (strike - spot) / spot
    }

    /// Clamp that never panics. A NaN value collapses to `min`, and inverted
    /// bounds resolve to `max`.
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        value.max(min).min(max)
    }

    /// `steps` evenly spaced values from `min` to `max` inclusive.
    /// One step yields `[min]`, zero steps an empty vector.
    pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
        match steps {
            0 => Vec::new(),
            1 => vec![min],
            _ => (0..steps)
                .map(|i| min + (i as f64 / (steps - 1) as f64) * (max - min))
                .collect(),
        }
    }

}
