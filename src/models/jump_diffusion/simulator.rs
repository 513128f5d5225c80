use rand::Rng;

use super::stats::summarize;
use super::types::SimulationResult;
use crate::model_params::CrashParams;
use crate::models::random::standard_normal;

/// Simulate a single price path, returning it together with the number of crashes.
///
/// The path has `step_count + 1` entries and starts at exactly `initial_price`.
pub fn simulate_path<R: Rng + ?Sized>(params: &CrashParams, rng: &mut R) -> (Vec<f64>, usize) {
    let dt = params.dt();
    let sigma = params.volatility;
    let drift_term = (params.drift - 0.5 * sigma * sigma) * dt;
    let diffusion = sigma * dt.sqrt();
    let jump_prob = params.crash_prob * dt;
    let jump_factor = 1.0 - params.crash_size;

    let mut path = Vec::with_capacity(params.step_count + 1);
    let mut price = params.initial_price;
    let mut crashes = 0;
    path.push(price);

    for _ in 0..params.step_count {
        let shock = diffusion * standard_normal(rng);
        price *= (drift_term + shock).exp();
        if rng.gen::<f64>() < jump_prob {
            price *= jump_factor;
            crashes += 1;
        }
        path.push(price);
    }
    (path, crashes)
}

/// Run `path_count` independent jump-diffusion paths and summarise their final returns.
///
/// Never fails. σ = 0 with no crash probability produces the deterministic
/// growth path `initial_price * exp(drift * t)`.
pub fn simulate_paths<R: Rng + ?Sized>(params: &CrashParams, rng: &mut R) -> SimulationResult {
    let dt = params.dt();
    let time_axis: Vec<f64> = (0..=params.step_count).map(|i| i as f64 * dt).collect();

    let mut paths = Vec::with_capacity(params.path_count);
    let mut final_returns = Vec::with_capacity(params.path_count);
    let mut crash_counts = Vec::with_capacity(params.path_count);

    for _ in 0..params.path_count {
        let (path, crashes) = simulate_path(params, rng);
        let last = path.last().copied().unwrap_or(params.initial_price);
        final_returns.push(last / params.initial_price - 1.0);
        crash_counts.push(crashes);
        paths.push(path);
    }

    let stats = summarize(&final_returns);
    tracing::debug!(
        paths = params.path_count,
        steps = params.step_count,
        mean = stats.mean,
        worst_5 = stats.worst_5,
        best_5 = stats.best_5,
        "simulated jump-diffusion paths"
    );

    SimulationResult {
        time_axis,
        paths,
        final_returns,
        crash_counts,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::random::seeded_rng;

    fn quiet_params() -> CrashParams {
        CrashParams {
            volatility: 0.0,
            crash_prob: 0.0,
            ..CrashParams::default()
        }
    }

    #[test]
    fn test_deterministic_without_randomness() {
        let params = quiet_params();
        let result = simulate_paths(&params, &mut seeded_rng(Some(11)));
        for path in &result.paths {
            for (i, &price) in path.iter().enumerate() {
                let t = result.time_axis[i];
                let expected = 100.0 * (params.drift * t).exp();
                assert!(
                    (price - expected).abs() < 1e-9,
                    "step {i}: {price} vs {expected}"
                );
            }
        }
        assert!(result.crash_counts.iter().all(|&c| c == 0));
        assert!(result.stats.std_dev.abs() < 1e-12);
    }

    #[test]
    fn test_path_shape() {
        let params = CrashParams::default();
        let result = simulate_paths(&params, &mut seeded_rng(Some(12)));
        assert_eq!(result.path_count(), 100);
        assert_eq!(result.time_axis.len(), 61);
        assert_eq!(result.final_returns.len(), 100);
        for path in &result.paths {
            assert_eq!(path.len(), 61);
            assert_eq!(path[0], 100.0);
            assert!(path.iter().all(|&p| p > 0.0));
        }
    }

    #[test]
    fn test_certain_crash_every_step() {
        // crash_prob * dt >= 1 forces a crash on every step
        let params = CrashParams {
            volatility: 0.0,
            drift: 0.0,
            crash_prob: 120.0,
            crash_size: 0.1,
            path_count: 3,
            ..CrashParams::default()
        };
        let result = simulate_paths(&params, &mut seeded_rng(Some(13)));
        for (path, &crashes) in result.paths.iter().zip(&result.crash_counts) {
            assert_eq!(crashes, 60);
            let expected = 100.0 * 0.9_f64.powi(60);
            assert!((path[60] - expected).abs() < 1e-9);
        }
        assert_eq!(result.crash_frequency(), 1.0);
    }

    #[test]
    fn test_zero_steps_and_zero_paths() {
        let params = CrashParams {
            step_count: 0,
            ..CrashParams::default()
        };
        let result = simulate_paths(&params, &mut seeded_rng(Some(14)));
        assert_eq!(result.time_axis, vec![0.0]);
        assert!(result.paths.iter().all(|p| p == &vec![100.0]));
        assert!(result.final_returns.iter().all(|&r| r == 0.0));

        let empty = CrashParams {
            path_count: 0,
            ..CrashParams::default()
        };
        let result = simulate_paths(&empty, &mut seeded_rng(Some(15)));
        assert!(result.paths.is_empty());
        assert_eq!(result.stats.mean, 0.0);
        assert_eq!(result.crash_frequency(), 0.0);
    }
}
