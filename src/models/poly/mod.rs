//! Polynomial curve fitting
//!
//! Ridge-regularised least-squares polynomial fits for the curve fitting
//! playground, together with the evaluator, error metric and the synthetic
//! sample generator that feeds it.

pub mod eval;
pub mod fit;
pub mod samples;
pub mod solver;
pub mod types;

pub use eval::*;
pub use fit::*;
pub use samples::*;
pub use solver::solve_linear_system;
pub use types::*;
