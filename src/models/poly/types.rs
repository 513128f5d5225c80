use serde::{Deserialize, Serialize};

/// Polynomial coefficients ordered by increasing power: `c[0]` is the constant term.
pub type Coefficients = Vec<f64>;

/// Partition a sample point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    #[default]
    Train,
    #[serde(rename = "val")]
    Validation,
}

/// Which points the coefficients are fitted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitScope {
    /// Hold validation points out of the fit.
    #[default]
    TrainOnly,
    /// Fit every point and only score the partitions separately, as the
    /// playground widget does.
    AllPoints,
}

/// A single (x, y) observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub split: Split,
}

impl SamplePoint {
    /// Untagged point; counts as training data.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            split: Split::Train,
        }
    }

    pub fn with_split(x: f64, y: f64, split: Split) -> Self {
        Self { x, y, split }
    }

    pub fn is_validation(&self) -> bool {
        self.split == Split::Validation
    }
}

/// How trustworthy the fitted curve looks at a given degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    Stable,
    HighVariance,
}

impl Stability {
    /// Degrees from this value upward are flagged as high variance.
    pub const HIGH_VARIANCE_DEGREE: usize = 7;

    pub fn for_degree(degree: usize) -> Self {
        if degree >= Self::HIGH_VARIANCE_DEGREE {
            Stability::HighVariance
        } else {
            Stability::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stability::Stable => "Stable",
            Stability::HighVariance => "High variance",
        }
    }
}

/// Everything the playground displays after a fit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub degree: usize,
    pub coefficients: Coefficients,
    pub train_mse: f64,
    /// `None` when the sample set has no validation points.
    pub validation_mse: Option<f64>,
    /// Sampled `(x, y_fit)` pairs over the fitting domain.
    pub curve: Vec<(f64, f64)>,
    pub stability: Stability,
}
