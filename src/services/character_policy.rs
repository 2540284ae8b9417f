//! Character pool construction for password generation.
//!
//! Turns a [`PasswordOptions`] into the concrete pool of allowed characters,
//! the per-class sets used for minimum-count requirements, and the letter
//! sub-pool used when a password must begin with a letter.

use crate::services::secure_random::SecureRandomTrait;
use crate::types::credential::{CharacterClasses, PolicyAdjustment};
use crate::types::errors::RandomError;
use crate::types::request::PasswordOptions;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>/?\\~";

/// Visually confusable characters removed by `exclude_ambiguous`.
pub const AMBIGUOUS: &str = "0O1lI|";

/// Bracket and quote characters removed by `exclude_brackets`.
pub const BRACKETS: &str = "{}[]()\\/'\"";

/// The resolved character policy for one password request.
#[derive(Debug, Clone)]
pub struct CharacterPolicy {
    pool: Vec<char>,
    uppercase: Vec<char>,
    lowercase: Vec<char>,
    digits: Vec<char>,
    symbols: Vec<char>,
    /// Classes as enabled in the options.
    requested: CharacterClasses,
    /// Classes that actually contribute to the pool.
    classes: CharacterClasses,
    adjustments: Vec<PolicyAdjustment>,
}

impl CharacterPolicy {
    /// Builds the pool from the options.
    ///
    /// Each class is filtered on its own before concatenation. When no class
    /// is enabled the pool falls back to lowercase letters and the effective
    /// classes are updated to say so.
    pub fn from_options(options: &PasswordOptions) -> Self {
        let filter = |set: &str| -> Vec<char> {
            set.chars()
                .filter(|c| !(options.exclude_ambiguous && AMBIGUOUS.contains(*c)))
                .filter(|c| !(options.exclude_brackets && BRACKETS.contains(*c)))
                .collect()
        };

        let symbol_source = match options.custom_symbols.as_deref() {
            Some(custom) if !custom.is_empty() => custom,
            _ => DEFAULT_SYMBOLS,
        };

        let requested = CharacterClasses {
            uppercase: options.uppercase,
            lowercase: options.lowercase,
            numbers: options.numbers,
            symbols: options.symbols,
        };
        let mut policy = Self {
            pool: Vec::new(),
            uppercase: filter(UPPERCASE),
            lowercase: filter(LOWERCASE),
            digits: filter(DIGITS),
            symbols: dedup(filter(symbol_source)),
            requested,
            classes: requested,
            adjustments: Vec::new(),
        };

        // A class filtered down to nothing contributes nothing.
        policy.classes.uppercase &= !policy.uppercase.is_empty();
        policy.classes.lowercase &= !policy.lowercase.is_empty();
        policy.classes.numbers &= !policy.digits.is_empty();
        policy.classes.symbols &= !policy.symbols.is_empty();

        policy.pool = policy.assemble();
        if policy.pool.is_empty() {
            tracing::warn!("no usable character class selected, falling back to lowercase");
            policy.classes = CharacterClasses {
                lowercase: true,
                ..Default::default()
            };
            policy.adjustments.push(PolicyAdjustment::LowercaseFallback);
            policy.pool = policy.assemble();
            // Lowercase minus the ambiguous `l` is never empty.
            if policy.pool.is_empty() {
                policy.pool = LOWERCASE.chars().collect();
            }
        }
        policy
    }

    fn assemble(&self) -> Vec<char> {
        let mut pool = Vec::new();
        if self.classes.uppercase {
            pool.extend_from_slice(&self.uppercase);
        }
        if self.classes.lowercase {
            pool.extend_from_slice(&self.lowercase);
        }
        if self.classes.numbers {
            pool.extend_from_slice(&self.digits);
        }
        if self.classes.symbols {
            pool.extend_from_slice(&self.symbols);
        }
        dedup(pool)
    }

    /// The full, filtered pool. Never empty.
    pub fn pool(&self) -> &[char] {
        &self.pool
    }

    /// The classes actually in effect after filtering and any fallback.
    pub fn classes(&self) -> CharacterClasses {
        self.classes
    }

    /// Filtered letters of the enabled letter classes.
    pub fn letters(&self) -> Vec<char> {
        let mut letters = Vec::new();
        if self.classes.uppercase {
            letters.extend_from_slice(&self.uppercase);
        }
        if self.classes.lowercase {
            letters.extend_from_slice(&self.lowercase);
        }
        letters
    }

    /// Filtered digit class.
    pub fn digits(&self) -> &[char] {
        &self.digits
    }

    /// Filtered symbol class (custom or default).
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Adjustments made while building the pool.
    pub fn adjustments(&self) -> &[PolicyAdjustment] {
        &self.adjustments
    }

    /// Draws the characters needed to satisfy the minimum-count rules.
    ///
    /// Each character is sampled independently, with replacement, from its
    /// class. Requirements only apply to enabled classes; an enabled class
    /// with nothing left after filtering is skipped and reported.
    pub fn required_characters(
        &self,
        rng: &dyn SecureRandomTrait,
        min_numbers: usize,
        min_symbols: usize,
    ) -> Result<(Vec<char>, Vec<PolicyAdjustment>), RandomError> {
        let mut required = Vec::with_capacity(min_numbers + min_symbols);
        let mut adjustments = Vec::new();

        let requirements = [
            (self.requested.numbers, &self.digits, min_numbers, "numbers"),
            (self.requested.symbols, &self.symbols, min_symbols, "symbols"),
        ];
        for (enabled, class, count, name) in requirements {
            if !enabled || count == 0 {
                continue;
            }
            if class.is_empty() {
                tracing::warn!(class = name, "required class is empty after filtering");
                adjustments.push(PolicyAdjustment::RequiredClassEmpty {
                    class: name.to_string(),
                });
                continue;
            }
            for _ in 0..count {
                required.push(class[rng.index(class.len())?]);
            }
        }
        Ok((required, adjustments))
    }
}

fn dedup(chars: Vec<char>) -> Vec<char> {
    let mut seen = Vec::with_capacity(chars.len());
    for c in chars {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}
