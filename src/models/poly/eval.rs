use super::types::SamplePoint;

/// Fitting domain of the playground; sample x values live in [-1, 1].
pub const X_DOMAIN: (f64, f64) = (-1.0, 1.0);

/// Evaluate `Σ c[k] x^k` with Horner's scheme. Empty coefficients evaluate to 0.
pub fn predict(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Mean squared residual of `coeffs` over `points`; 0 for an empty set.
pub fn mean_squared_error(points: &[SamplePoint], coeffs: &[f64]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points
        .iter()
        .map(|p| {
            let err = p.y - predict(coeffs, p.x);
            err * err
        })
        .sum();
    total / points.len() as f64
}

/// `samples` evenly spaced `(x, predict(x))` pairs across [`X_DOMAIN`].
pub fn sample_curve(coeffs: &[f64], samples: usize) -> Vec<(f64, f64)> {
    crate::models::utils::linspace(X_DOMAIN.0, X_DOMAIN.1, samples)
        .into_iter()
        .map(|x| (x, predict(coeffs, x)))
        .collect()
}
