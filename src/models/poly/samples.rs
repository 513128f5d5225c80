use rand::Rng;

use super::eval::X_DOMAIN;
use super::types::{SamplePoint, Split};
use crate::model_params::CurveFitParams;
use crate::models::random::standard_normal;

/// Scale applied to the user-facing noise level before perturbing y.
const NOISE_SCALE: f64 = 0.4;

/// Every n-th point (i % n == 0) is held out when the split is shown.
const VALIDATION_STRIDE: usize = 5;

/// Noise-free curve the synthetic samples are drawn around.
pub fn base_curve(x: f64) -> f64 {
    0.6 * (2.2 * x).sin() + 0.3 * x * x + 0.1 * x
}

/// Generate `params.count` evenly spaced noisy samples of [`base_curve`] on [-1, 1].
pub fn generate_points<R: Rng + ?Sized>(params: &CurveFitParams, rng: &mut R) -> Vec<SamplePoint> {
    let count = params.count;
    let (lo, hi) = X_DOMAIN;

    (0..count)
        .map(|i| {
            let x = if count > 1 {
                lo + (hi - lo) * i as f64 / (count - 1) as f64
            } else {
                lo
            };
            let y = base_curve(x) + standard_normal(rng) * params.noise * NOISE_SCALE;
            let split = if params.show_split && i % VALIDATION_STRIDE == 0 {
                Split::Validation
            } else {
                Split::Train
            };
            SamplePoint::with_split(x, y, split)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::random::seeded_rng;

    #[test]
    fn test_noise_free_points_lie_on_base_curve() {
        let params = CurveFitParams {
            noise: 0.0,
            ..CurveFitParams::default()
        };
        let pts = generate_points(&params, &mut seeded_rng(Some(1)));
        assert_eq!(pts.len(), 40);
        assert_eq!(pts[0].x, -1.0);
        assert!((pts[39].x - 1.0).abs() < 1e-12);
        for p in &pts {
            assert!((p.y - base_curve(p.x)).abs() < 1e-15);
            assert_eq!(p.split, Split::Train);
        }
    }

    #[test]
    fn test_split_tags_every_fifth_point() {
        let params = CurveFitParams {
            count: 12,
            show_split: true,
            ..CurveFitParams::default()
        };
        let pts = generate_points(&params, &mut seeded_rng(Some(3)));
        let val: Vec<usize> = pts
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_validation())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(val, vec![0, 5, 10]);
    }

    #[test]
    fn test_degenerate_counts() {
        let mut rng = seeded_rng(Some(5));
        let none = CurveFitParams {
            count: 0,
            ..CurveFitParams::default()
        };
        assert!(generate_points(&none, &mut rng).is_empty());

        let one = CurveFitParams {
            count: 1,
            ..CurveFitParams::default()
        };
        let pts = generate_points(&one, &mut rng);
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].x, -1.0);
    }
}
