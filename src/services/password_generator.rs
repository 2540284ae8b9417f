//! Constrained password generation.
//!
//! Builds the output in a working buffer: optional letter seed, then the
//! pre-selected required characters, then pool fill, then a secure shuffle
//! so that required characters do not cluster at the front.

use zeroize::Zeroizing;

use crate::services::character_policy::CharacterPolicy;
use crate::services::secure_random::{shuffle, SharedRandom};
use crate::types::credential::{CredentialPolicy, GeneratedCredential, PolicyAdjustment};
use crate::types::errors::GeneratorError;
use crate::types::request::PasswordOptions;

/// Password generator drawing from an injected secure random source.
pub struct PasswordGenerator {
    rng: SharedRandom,
}

impl PasswordGenerator {
    pub fn new(rng: SharedRandom) -> Self {
        Self { rng }
    }

    /// Generates one password for `options`.
    ///
    /// Runs in O(length) draws. Over-constrained options are accommodated
    /// (length clamp, lowercase fallback) and recorded on the result.
    pub fn generate(&self, options: &PasswordOptions) -> Result<GeneratedCredential, GeneratorError> {
        let rng = self.rng.as_ref();
        let policy = CharacterPolicy::from_options(options);
        let pool = policy.pool();
        let mut adjustments: Vec<PolicyAdjustment> = policy.adjustments().to_vec();

        let mut length = options.length;
        if options.no_repeating && length > pool.len() {
            tracing::warn!(
                requested = length,
                pool = pool.len(),
                "no-repeat length exceeds pool, clamping"
            );
            adjustments.push(PolicyAdjustment::LengthClamped {
                requested: length,
                actual: pool.len(),
            });
            length = pool.len();
        }

        let mut buffer: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(length));
        let mut used: Vec<char> = Vec::new();

        let mut seeded = false;
        if options.begin_with_letter && length > 0 {
            let letters = policy.letters();
            if letters.is_empty() {
                tracing::warn!("begin_with_letter requested without a letter class");
                adjustments.push(PolicyAdjustment::LetterSeedSkipped);
            } else {
                let first = letters[rng.index(letters.len())?];
                buffer.push(first);
                if options.no_repeating {
                    used.push(first);
                }
                seeded = true;
            }
        }

        let (required, skipped) =
            policy.required_characters(rng, options.min_numbers, options.min_symbols)?;
        adjustments.extend(skipped);
        for c in required.iter().copied() {
            if buffer.len() >= length {
                break;
            }
            if options.no_repeating && used.contains(&c) {
                continue;
            }
            buffer.push(c);
            if options.no_repeating {
                used.push(c);
            }
        }

        if options.no_repeating {
            let mut available: Vec<char> = pool.iter().copied().filter(|c| !used.contains(c)).collect();
            while buffer.len() < length && !available.is_empty() {
                let c = available.swap_remove(rng.index(available.len())?);
                buffer.push(c);
            }
        } else {
            while buffer.len() < length {
                buffer.push(pool[rng.index(pool.len())?]);
            }
        }

        let chars = buffer.as_mut_slice();
        if seeded {
            shuffle(rng, &mut chars[1..])?;
        } else {
            shuffle(rng, chars)?;
        }

        let value: String = buffer.iter().collect();
        tracing::debug!(length = buffer.len(), adjusted = !adjustments.is_empty(), "password generated");

        Ok(GeneratedCredential::new(
            value,
            CredentialPolicy::Password {
                classes: policy.classes(),
                length: buffer.len(),
            },
            adjustments,
        ))
    }
}
