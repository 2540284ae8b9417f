use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::request::UsernameStyle;

/// Character classes that were actually used to build a password pool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.numbers || self.symbols)
    }
}

/// Describes the policy that produced a credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CredentialPolicy {
    Password {
        classes: CharacterClasses,
        length: usize,
    },
    Pin {
        length: usize,
    },
    Passphrase {
        word_count: usize,
        wordlist_size: usize,
        includes_number: bool,
    },
    Username {
        style: UsernameStyle,
    },
}

/// A silent accommodation the generator made to honor a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolicyAdjustment {
    /// The requested length could not be met without repeats.
    LengthClamped { requested: usize, actual: usize },
    /// No character class was enabled; lowercase was used instead.
    LowercaseFallback,
    /// `begin_with_letter` was set but no letter class was enabled.
    LetterSeedSkipped,
    /// A class with a minimum count filtered down to no characters.
    RequiredClassEmpty { class: String },
    /// The PIN was regenerated without the sequential-digit rule.
    SequentialRuleRelaxed,
}

/// A freshly generated credential.
///
/// The secret value is wiped from memory when this is dropped.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct GeneratedCredential {
    value: String,
    #[zeroize(skip)]
    policy: CredentialPolicy,
    #[zeroize(skip)]
    adjustments: Vec<PolicyAdjustment>,
}

impl GeneratedCredential {
    pub fn new(value: String, policy: CredentialPolicy, adjustments: Vec<PolicyAdjustment>) -> Self {
        Self {
            value,
            policy,
            adjustments,
        }
    }

    /// The generated secret.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    pub fn adjustments(&self) -> &[PolicyAdjustment] {
        &self.adjustments
    }

    /// True when any fallback, clamp or relaxation was applied.
    pub fn was_adjusted(&self) -> bool {
        !self.adjustments.is_empty()
    }
}
