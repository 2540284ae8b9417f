//! Entropy-based strength estimation.
//!
//! The estimator looks at the credential as observed: which nominal
//! character classes occur in it, not the filtered pool that produced it.
//! Passphrases are the exception and are scored from the word count and the
//! measured wordlist size.

use crate::services::passphrase_generator::PASSPHRASE_NUMBER_SPACE;
use crate::types::credential::{CredentialPolicy, GeneratedCredential};
use crate::types::errors::SettingsError;
use crate::types::settings::{StrengthSettings, DEFAULT_GUESSES_PER_SECOND};
use crate::types::strength::{StrengthAnalysis, StrengthLevel, StrengthThresholds};

/// Nominal class sizes used for observed-pool estimation.
pub const LOWERCASE_SIZE: u32 = 26;
pub const UPPERCASE_SIZE: u32 = 26;
pub const DIGIT_SIZE: u32 = 10;
pub const SYMBOL_SIZE: u32 = 32;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MONTH: f64 = 2_592_000.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Trait defining strength analysis operations.
pub trait StrengthEstimatorTrait {
    /// Scores an arbitrary string from the classes it contains.
    fn analyze(&self, credential: &str) -> StrengthAnalysis;

    /// Scores a passphrase from its shape.
    fn analyze_passphrase(&self, word_count: usize, wordlist_size: usize, includes_number: bool) -> StrengthAnalysis;

    /// Scores a generated credential using the policy recorded on it.
    fn analyze_credential(&self, credential: &GeneratedCredential) -> StrengthAnalysis;

    /// Maps entropy to a level.
    fn level(&self, entropy_bits: f64) -> StrengthLevel;
}

/// Strength estimator with configurable thresholds and attacker speed.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthEstimator {
    thresholds: StrengthThresholds,
    guesses_per_second: f64,
}

impl Default for StrengthEstimator {
    fn default() -> Self {
        Self {
            thresholds: StrengthThresholds::default(),
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
        }
    }
}

impl StrengthEstimator {
    /// Builds an estimator from settings, rejecting non-monotonic thresholds
    /// and non-positive guess rates.
    pub fn from_settings(settings: &StrengthSettings) -> Result<Self, SettingsError> {
        if !settings.thresholds.is_monotonic() {
            return Err(SettingsError::InvalidValue(
                "strength thresholds must be non-decreasing".to_string(),
            ));
        }
        if !(settings.guesses_per_second.is_finite() && settings.guesses_per_second > 0.0) {
            return Err(SettingsError::InvalidValue(
                "guesses_per_second must be a positive number".to_string(),
            ));
        }
        Ok(Self {
            thresholds: settings.thresholds,
            guesses_per_second: settings.guesses_per_second,
        })
    }

    pub fn thresholds(&self) -> &StrengthThresholds {
        &self.thresholds
    }

    pub fn guesses_per_second(&self) -> f64 {
        self.guesses_per_second
    }

    /// Expected seconds for an attacker to find the credential with 50%
    /// probability. Infinite once the value overflows `f64`.
    pub fn crack_time_seconds(&self, entropy_bits: f64) -> f64 {
        (entropy_bits - 1.0).exp2() / self.guesses_per_second
    }

    /// Human-readable crack time for `entropy_bits`.
    pub fn crack_time_label(&self, entropy_bits: f64) -> String {
        let seconds = self.crack_time_seconds(entropy_bits);
        if seconds.is_finite() {
            return format_crack_time(seconds);
        }
        // Past f64 range: work out the order of magnitude in log space.
        let log10_years = (entropy_bits - 1.0) * 2f64.log10()
            - self.guesses_per_second.log10()
            - SECONDS_PER_YEAR.log10();
        format!("10^{} years", log10_years.floor() as i64)
    }

    fn build(&self, entropy_bits: f64) -> StrengthAnalysis {
        StrengthAnalysis {
            entropy_bits,
            level: self.level(entropy_bits),
            crack_time_seconds: Some(self.crack_time_seconds(entropy_bits)).filter(|s| s.is_finite()),
            crack_time_label: self.crack_time_label(entropy_bits),
        }
    }
}

impl StrengthEstimatorTrait for StrengthEstimator {
    fn analyze(&self, credential: &str) -> StrengthAnalysis {
        let length = credential.chars().count();
        self.build(entropy(length, pool_size(credential)))
    }

    fn analyze_passphrase(&self, word_count: usize, wordlist_size: usize, includes_number: bool) -> StrengthAnalysis {
        self.build(passphrase_entropy(word_count, wordlist_size, includes_number))
    }

    fn analyze_credential(&self, credential: &GeneratedCredential) -> StrengthAnalysis {
        match credential.policy() {
            CredentialPolicy::Passphrase {
                word_count,
                wordlist_size,
                includes_number,
            } => self.analyze_passphrase(*word_count, *wordlist_size, *includes_number),
            _ => self.analyze(credential.value()),
        }
    }

    fn level(&self, entropy_bits: f64) -> StrengthLevel {
        let t = &self.thresholds;
        if entropy_bits >= t.very_strong {
            StrengthLevel::VeryStrong
        } else if entropy_bits >= t.strong {
            StrengthLevel::Strong
        } else if entropy_bits >= t.good {
            StrengthLevel::Good
        } else if entropy_bits >= t.fair {
            StrengthLevel::Fair
        } else {
            StrengthLevel::Weak
        }
    }
}

/// Sum of the nominal sizes of the classes present in `credential`.
///
/// Anything that is not an ASCII letter or digit counts as a symbol.
/// Never returns less than 1.
pub fn pool_size(credential: &str) -> u32 {
    let (mut lower, mut upper, mut digit, mut symbol) = (false, false, false, false);
    for c in credential.chars() {
        if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else {
            symbol = true;
        }
    }
    let size = [
        (lower, LOWERCASE_SIZE),
        (upper, UPPERCASE_SIZE),
        (digit, DIGIT_SIZE),
        (symbol, SYMBOL_SIZE),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, size)| size)
    .sum::<u32>();
    size.max(1)
}

/// `length × log2(pool_size)`, rounded to one decimal.
pub fn entropy(length: usize, pool_size: u32) -> f64 {
    round_tenth(length as f64 * (pool_size.max(1) as f64).log2())
}

/// Passphrase entropy: word choice, plus the number's value and position
/// when one was spliced in. Rounded to one decimal.
pub fn passphrase_entropy(word_count: usize, wordlist_size: usize, includes_number: bool) -> f64 {
    let mut bits = word_count as f64 * (wordlist_size.max(1) as f64).log2();
    if includes_number {
        bits += (PASSPHRASE_NUMBER_SPACE as f64).log2() + ((word_count + 1) as f64).log2();
    }
    round_tenth(bits)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a duration in seconds into a single coarse unit.
pub fn format_crack_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 1.0 {
        return "less than a second".to_string();
    }

    let tiers: [(f64, f64, &str); 5] = [
        (SECONDS_PER_MINUTE, 1.0, "second"),
        (SECONDS_PER_HOUR, SECONDS_PER_MINUTE, "minute"),
        (SECONDS_PER_DAY, SECONDS_PER_HOUR, "hour"),
        (SECONDS_PER_MONTH, SECONDS_PER_DAY, "day"),
        (SECONDS_PER_YEAR, SECONDS_PER_MONTH, "month"),
    ];
    for (limit, unit, name) in tiers {
        if seconds < limit {
            return plural((seconds / unit).floor() as u64, name);
        }
    }

    let years = seconds / SECONDS_PER_YEAR;
    if years >= 1e15 {
        return format!("10^{} years", years.log10().floor() as i64);
    }
    let compact: [(f64, &str); 3] = [(1e12, "trillion"), (1e9, "billion"), (1e6, "million")];
    for (scale, word) in compact {
        if years >= scale {
            return format!("{} {} years", (years / scale).floor() as u64, word);
        }
    }
    plural(years.floor() as u64, "year")
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
