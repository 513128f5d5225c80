//! Synthetic implied volatility surface
//!
//! A closed-form, deliberately simple surface used for visualisation:
//!
//! ```text
//! vol(K, T) = clamp(base + skew·m + smile·m² + term·ln(1 + T), vol_min, vol_max)
//! m         = (K - S) / S
//! ```
//!
//! The surface is evaluated over a strike × maturity grid described by
//! [`SurfaceGrid`]. Every grid value is guaranteed to lie inside
//! `[vol_min, vol_max]`, whatever the coefficients.

pub mod surface;
pub mod types;

pub use surface::*;
pub use types::*;
