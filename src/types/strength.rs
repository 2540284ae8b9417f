use serde::{Deserialize, Serialize};

/// Ordered strength rating derived from entropy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

/// Lower entropy bounds (in bits) at which each level starts.
///
/// Anything below `fair` is [`StrengthLevel::Weak`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StrengthThresholds {
    pub fair: f64,
    pub good: f64,
    pub strong: f64,
    pub very_strong: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            fair: 30.0,
            good: 50.0,
            strong: 70.0,
            very_strong: 90.0,
        }
    }
}

impl StrengthThresholds {
    /// True when the bounds form a non-decreasing sequence of finite values.
    pub fn is_monotonic(&self) -> bool {
        let bounds = [self.fair, self.good, self.strong, self.very_strong];
        bounds.iter().all(|b| b.is_finite()) && bounds.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Result of analysing a credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrengthAnalysis {
    pub entropy_bits: f64,
    pub level: StrengthLevel,
    /// `None` once the estimate overflows `f64`; the label still carries
    /// the order of magnitude.
    pub crack_time_seconds: Option<f64>,
    pub crack_time_label: String,
}
