use serde::{Deserialize, Serialize};

/// Compound-score cutoffs for polarity classification.
///
/// Text whose compound score sits at or above the positive cutoff reads as
/// positive, at or below the negative cutoff as negative, and anything
/// between as neutral.
///
/// Example YAML:
/// ```yaml
/// thresholds:
///   positive: 0.05
///   negative: -0.05
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Compound score at or above which text classifies as positive (default: 0.05)
    #[serde(default)]
    pub positive: Option<f64>,

    /// Compound score at or below which text classifies as negative (default: -0.05)
    #[serde(default)]
    pub negative: Option<f64>,
}

impl ThresholdConfig {
    pub const DEFAULT_POSITIVE: f64 = 0.05;
    pub const DEFAULT_NEGATIVE: f64 = -0.05;
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            positive: Some(Self::DEFAULT_POSITIVE),
            negative: Some(Self::DEFAULT_NEGATIVE),
        }
    }
}
