//! Ridge-regularised polynomial least squares.
//!
//! Solves `(XᵗX + λI) c = Xᵗy` where row i of the design matrix `X` is
//! `[1, x_i, x_i², …, x_i^D]`. The ridge term keeps the system invertible even
//! with fewer points than coefficients or with repeated x values.

use super::eval::{mean_squared_error, sample_curve};
use super::solver::solve_linear_system;
use super::types::{Coefficients, FitReport, FitScope, SamplePoint, Stability};

/// Ridge parameter added to the diagonal of the normal equations.
pub const RIDGE_LAMBDA: f64 = 1e-4;

/// Build the N x (D+1) Vandermonde-style design matrix.
pub fn design_matrix(points: &[SamplePoint], degree: usize) -> Vec<Vec<f64>> {
    points
        .iter()
        .map(|p| {
            let mut row = Vec::with_capacity(degree + 1);
            row.push(1.0);
            for d in 1..=degree {
                row.push(row[d - 1] * p.x);
            }
            row
        })
        .collect()
}

/// Form `(XᵗX + λI, Xᵗy)` from a design matrix and targets.
pub fn normal_equations(
    design: &[Vec<f64>],
    targets: &[f64],
    lambda: f64,
) -> (Vec<Vec<f64>>, Vec<f64>) {
    let cols = design.first().map_or(0, |row| row.len());
    let mut xtx = vec![vec![0.0; cols]; cols];
    let mut xty = vec![0.0; cols];

    for (row, &y) in design.iter().zip(targets) {
        for i in 0..cols {
            xty[i] += row[i] * y;
            for j in 0..cols {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }
    for (i, diag_row) in xtx.iter_mut().enumerate() {
        diag_row[i] += lambda;
    }
    (xtx, xty)
}

/// Fit a degree-`degree` polynomial to `points` with the default [`RIDGE_LAMBDA`].
///
/// Returns `degree + 1` coefficients, or an empty vector when `points` is empty.
/// Degenerate inputs yield finite but possibly poor coefficients; the function
/// never fails.
pub fn fit_polynomial(points: &[SamplePoint], degree: usize) -> Coefficients {
    fit_polynomial_with_ridge(points, degree, RIDGE_LAMBDA)
}

/// [`fit_polynomial`] with an explicit ridge parameter. Negative values are
/// treated as zero.
pub fn fit_polynomial_with_ridge(
    points: &[SamplePoint],
    degree: usize,
    lambda: f64,
) -> Coefficients {
    if points.is_empty() {
        return Vec::new();
    }
    let lambda = if lambda > 0.0 { lambda } else { 0.0 };

    let design = design_matrix(points, degree);
    let targets: Vec<f64> = points.iter().map(|p| p.y).collect();
    let (xtx, xty) = normal_equations(&design, &targets, lambda);
    let coeffs = solve_linear_system(&xtx, &xty);

    tracing::debug!(
        points = points.len(),
        degree,
        lambda,
        "fitted polynomial"
    );
    coeffs
}

/// Fit on the training partition and score both partitions.
///
/// The playground widget fits on every point instead; use
/// [`fit_report_with_scope`] with [`FitScope::AllPoints`] for that behaviour.
pub fn fit_report(points: &[SamplePoint], degree: usize, curve_samples: usize) -> FitReport {
    fit_report_with_scope(points, degree, curve_samples, FitScope::TrainOnly)
}

/// [`fit_report`] with an explicit choice of the points the fit sees.
/// Scoring is always per partition.
pub fn fit_report_with_scope(
    points: &[SamplePoint],
    degree: usize,
    curve_samples: usize,
    scope: FitScope,
) -> FitReport {
    let (validation, train): (Vec<SamplePoint>, Vec<SamplePoint>) =
        points.iter().partition(|p| p.is_validation());

    let coefficients = match scope {
        FitScope::TrainOnly => fit_polynomial(&train, degree),
        FitScope::AllPoints => fit_polynomial(points, degree),
    };
    let train_mse = mean_squared_error(&train, &coefficients);
    let validation_mse = if validation.is_empty() {
        None
    } else {
        Some(mean_squared_error(&validation, &coefficients))
    };

    FitReport {
        degree,
        curve: sample_curve(&coefficients, curve_samples),
        coefficients,
        train_mse,
        validation_mse,
        stability: Stability::for_degree(degree),
    }
}
