//! Numeric PIN generation with repeat and sequence rules.

use crate::services::secure_random::{SecureRandomTrait, SharedRandom};
use crate::types::credential::{CredentialPolicy, GeneratedCredential, PolicyAdjustment};
use crate::types::errors::{GeneratorError, RandomError};
use crate::types::request::PinOptions;

/// Draws allowed per digit position before a pass is abandoned.
pub const MAX_ATTEMPTS_PER_DIGIT: usize = 1000;

/// PIN generator drawing from an injected secure random source.
pub struct PinGenerator {
    rng: SharedRandom,
}

impl PinGenerator {
    pub fn new(rng: SharedRandom) -> Self {
        Self { rng }
    }

    /// Generates one PIN.
    ///
    /// A pass that exhausts its attempt budget is discarded and retried once
    /// with the sequential-digit rule relaxed. There is no second fallback:
    /// if the relaxed pass also fails the request is reported unsatisfiable.
    pub fn generate(&self, options: &PinOptions) -> Result<GeneratedCredential, GeneratorError> {
        let mut adjustments = Vec::new();
        let mut length = options.length;
        if options.no_repeated_digits && length > 10 {
            tracing::warn!(requested = length, "more distinct digits requested than exist, clamping");
            adjustments.push(PolicyAdjustment::LengthClamped {
                requested: length,
                actual: 10,
            });
            length = 10;
        }

        let rng = self.rng.as_ref();
        let digits = match attempt_pin(rng, length, options.no_repeated_digits, options.no_sequential_digits)? {
            Some(digits) => digits,
            None => {
                tracing::warn!(length, "PIN attempt budget exhausted, relaxing sequential rule");
                adjustments.push(PolicyAdjustment::SequentialRuleRelaxed);
                attempt_pin(rng, length, options.no_repeated_digits, false)?.ok_or_else(|| {
                    GeneratorError::ConstraintsUnsatisfiable(format!(
                        "no {}-digit PIN found within the attempt budget",
                        length
                    ))
                })?
            }
        };

        let value: String = digits.iter().map(|d| char::from(b'0' + *d)).collect();
        tracing::debug!(length = digits.len(), "pin generated");
        Ok(GeneratedCredential::new(
            value,
            CredentialPolicy::Pin { length: digits.len() },
            adjustments,
        ))
    }
}

/// One bounded pass. `Ok(None)` means a position ran out of attempts.
fn attempt_pin(
    rng: &dyn SecureRandomTrait,
    length: usize,
    no_repeated: bool,
    no_sequential: bool,
) -> Result<Option<Vec<u8>>, RandomError> {
    let mut digits: Vec<u8> = Vec::with_capacity(length);
    let mut attempts = 0;
    while digits.len() < length {
        if attempts >= MAX_ATTEMPTS_PER_DIGIT {
            return Ok(None);
        }
        attempts += 1;

        let candidate = rng.uniform_int(10)? as u8;
        if no_repeated && digits.contains(&candidate) {
            continue;
        }
        if no_sequential && forms_sequence(&digits, candidate) {
            continue;
        }
        digits.push(candidate);
        attempts = 0;
    }
    Ok(Some(digits))
}

/// True when the last two digits and `candidate` step by +1,+1 or -1,-1.
pub fn forms_sequence(digits: &[u8], candidate: u8) -> bool {
    let n = digits.len();
    if n < 2 {
        return false;
    }
    let (a, b, c) = (digits[n - 2] as i8, digits[n - 1] as i8, candidate as i8);
    let (step1, step2) = (b - a, c - b);
    step1 == step2 && step1.abs() == 1
}

/// True when `pin` contains a three-digit ascending or descending run.
pub fn has_sequential_run(pin: &str) -> bool {
    let digits: Vec<u8> = pin.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();
    (2..digits.len()).any(|i| forms_sequence(&digits[..i], digits[i]))
}
