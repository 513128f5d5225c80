//! Jump-diffusion Monte Carlo ("market crash simulator")
//!
//! Geometric Brownian motion with a superimposed crash component. Each step
//! applies the exact log-normal diffusion update and then an independent
//! Bernoulli crash check with probability `crash_prob * dt`, which approximates
//! a Poisson jump process for small `dt`. A crash multiplies the price by
//! `1 - crash_size`.

pub mod simulator;
pub mod stats;
pub mod types;

pub use simulator::*;
pub use stats::*;
pub use types::*;
