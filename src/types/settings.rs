use serde::{Deserialize, Serialize};

use super::request::{PassphraseOptions, PasswordOptions, PinOptions, UsernameOptions};
use super::strength::StrengthThresholds;

/// Canonical attacker speed used for crack-time estimates.
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1e10;

/// Top-level generator settings container.
///
/// Holds the default options for every credential kind plus the tunables
/// of the strength estimator.
///
/// Missing sections fall back to their defaults so older files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GeneratorSettings {
    pub password: PasswordOptions,
    pub pin: PinOptions,
    pub passphrase: PassphraseOptions,
    pub username: UsernameOptions,
    pub strength: StrengthSettings,
    pub bulk: BulkSettings,
    pub wordlist: WordlistSettings,
}

/// Strength estimator tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StrengthSettings {
    pub thresholds: StrengthThresholds,
    pub guesses_per_second: f64,
}

impl Default for StrengthSettings {
    fn default() -> Self {
        Self {
            thresholds: StrengthThresholds::default(),
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
        }
    }
}

/// Bulk generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BulkSettings {
    pub default_count: usize,
}

impl Default for BulkSettings {
    fn default() -> Self {
        Self { default_count: 10 }
    }
}

/// Where the passphrase wordlist comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WordlistSettings {
    /// Path to a replacement wordlist file. `None` uses the embedded list.
    pub path: Option<String>,
}

impl GeneratorSettings {
    /// Checks values that serde alone cannot validate.
    pub fn validate(&self) -> Result<(), String> {
        if !self.strength.thresholds.is_monotonic() {
            return Err("strength thresholds must be non-decreasing".to_string());
        }
        if !(self.strength.guesses_per_second.is_finite() && self.strength.guesses_per_second > 0.0) {
            return Err("guesses_per_second must be a positive number".to_string());
        }
        Ok(())
    }
}
