use serde::{Deserialize, Serialize};

/// Summary of the simulated final returns
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    pub mean: f64,
    pub std_dev: f64,
    /// 5th percentile of final returns
    pub worst_5: f64,
    /// 95th percentile of final returns
    pub best_5: f64,
    pub min: f64,
    pub max: f64,
}

/// One equal-width histogram bucket over `[lower, upper)`; the last bucket is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Output of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Time of each step in years, `step_count + 1` values starting at 0.
    pub time_axis: Vec<f64>,
    /// One price path per simulation, each `step_count + 1` long.
    pub paths: Vec<Vec<f64>>,
    /// `last / initial - 1` for every path.
    pub final_returns: Vec<f64>,
    /// Number of crashes that hit each path.
    pub crash_counts: Vec<usize>,
    pub stats: SimulationStats,
}

impl SimulationResult {
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Fraction of paths that experienced at least one crash.
    pub fn crash_frequency(&self) -> f64 {
        if self.crash_counts.is_empty() {
            return 0.0;
        }
        let hit = self.crash_counts.iter().filter(|&&c| c > 0).count();
        hit as f64 / self.crash_counts.len() as f64
    }
}
