use statrs::statistics::Statistics;

use super::types::{HistogramBin, SimulationStats};

/// Linearly interpolated quantile of an ascending-sorted sample.
///
/// `pos = (n - 1) * q`; the result interpolates between `sorted[floor(pos)]`
/// and its successor, or returns the last element when there is none.
/// `q` is clamped to [0, 1]. An empty sample yields 0.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let q = if q.is_nan() { 0.0 } else { q.clamp(0.0, 1.0) };
    let pos = (sorted.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    match sorted.get(base + 1) {
        Some(next) => sorted[base] + rest * (next - sorted[base]),
        None => sorted[base],
    }
}

/// Summary statistics of the final returns. All zero for an empty sample.
pub fn summarize(returns: &[f64]) -> SimulationStats {
    if returns.is_empty() {
        return SimulationStats::default();
    }
    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    let std_dev = if returns.len() > 1 {
        returns.iter().std_dev()
    } else {
        0.0
    };

    SimulationStats {
        mean: returns.iter().mean(),
        std_dev,
        worst_5: quantile(&sorted, 0.05),
        best_5: quantile(&sorted, 0.95),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    }
}

/// Equal-width histogram of `values` over their [min, max] range.
///
/// Returns no bins for an empty sample or `bins == 0`. A sample with zero range
/// lands in a single bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    if width <= 0.0 {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();
    for v in finite {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_midpoint_interpolates() {
        assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
    }

    #[test]
    fn test_quantile_edges() {
        let s = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&s, 0.0), 1.0);
        assert_eq!(quantile(&s, 1.0), 4.0);
        assert_eq!(quantile(&s, 7.0), 4.0);
        assert_eq!(quantile(&s, -1.0), 1.0);
        assert_eq!(quantile(&[5.0], 0.3), 5.0);
        assert_eq!(quantile(&[], 0.5), 0.0);
        // pos = 3 * 0.05 = 0.15
        assert!((quantile(&s, 0.05) - 1.15).abs() < 1e-12);
    }

    #[test]
    fn test_summarize() {
        let stats = summarize(&[0.1, -0.2, 0.3, 0.0]);
        assert!((stats.mean - 0.05).abs() < 1e-12);
        assert_eq!(stats.min, -0.2);
        assert_eq!(stats.max, 0.3);
        assert!(stats.worst_5 < stats.best_5);
        assert!(stats.std_dev > 0.0);

        assert_eq!(summarize(&[]), SimulationStats::default());
        let single = summarize(&[0.4]);
        assert_eq!(single.mean, 0.4);
        assert_eq!(single.std_dev, 0.0);
        assert_eq!(single.worst_5, 0.4);
    }

    #[test]
    fn test_summarize_ordering_ignores_input_order_with_nan() {
        let a = summarize(&[0.3, f64::NAN, -0.2, 0.1]);
        let b = summarize(&[f64::NAN, 0.1, 0.3, -0.2]);
        // NaN sorts after every finite value
        assert_eq!(a.min, -0.2);
        assert_eq!(b.min, -0.2);
        assert!(a.max.is_nan() && b.max.is_nan());
        assert_eq!(a.worst_5, b.worst_5);
        assert!((a.worst_5 + 0.155).abs() < 1e-12, "worst_5 {}", a.worst_5);
    }

    #[test]
    fn test_histogram_counts_everything() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
        let bins = histogram(&values, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert_eq!(bins[0].lower, 0.0);
        assert!((bins[19].upper - 9.9).abs() < 1e-9);

        let flat = histogram(&[1.0, 1.0, 1.0], 20);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].count, 3);

        assert!(histogram(&[], 20).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
    }
}
