//! Integration-level tests for the secure random capability.
//!
//! Covers the rejection-sampling bound, the Fisher-Yates shuffle, a
//! chi-square uniformity check against the real OS source, and failure
//! propagation through every generator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use credforge::services::credential_generator::{CredentialGenerator, CredentialGeneratorTrait};
use credforge::services::secure_random::{choose, shuffle, SecureRandom, SecureRandomTrait};
use credforge::services::wordlist::Wordlist;
use credforge::types::errors::{GeneratorError, RandomError};
use credforge::types::request::{
    GenerationRequest, PassphraseOptions, PasswordOptions, PinOptions, UsernameOptions,
};

/// Replays a fixed sequence of words, cycling at the end.
struct Scripted {
    values: Vec<u32>,
    position: Mutex<usize>,
}

impl Scripted {
    fn new(values: Vec<u32>) -> Self {
        Self { values, position: Mutex::new(0) }
    }

    fn draws(&self) -> usize {
        *self.position.lock().unwrap()
    }
}

impl SecureRandomTrait for Scripted {
    fn next_u32(&self) -> Result<u32, RandomError> {
        let mut position = self.position.lock().unwrap();
        let value = self.values[*position % self.values.len()];
        *position += 1;
        Ok(value)
    }
}

/// A source whose every draw fails.
#[derive(Default)]
struct Broken {
    calls: AtomicUsize,
}

impl SecureRandomTrait for Broken {
    fn next_u32(&self) -> Result<u32, RandomError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RandomError::Unavailable("entropy source offline".to_string()))
    }
}

fn chi_square(counts: &[u64], expected: f64) -> f64 {
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

// ─── Rejection sampling ───

#[test]
fn uniform_int_redraws_values_in_the_incomplete_block() {
    // 2^32 mod 10 = 6, so the top six words are rejected.
    let rng = Scripted::new(vec![u32::MAX, u32::MAX - 5, 1234]);
    assert_eq!(rng.uniform_int(10).unwrap(), 4);
    assert_eq!(rng.draws(), 3);
}

#[test]
fn uniform_int_accepts_the_last_word_below_the_limit() {
    // 2^32 mod 3 = 1, so only u32::MAX is rejected.
    let rng = Scripted::new(vec![u32::MAX, u32::MAX - 1]);
    assert_eq!(rng.uniform_int(3).unwrap(), (u32::MAX - 1) % 3);
    assert_eq!(rng.draws(), 2);
}

#[test]
fn uniform_int_of_zero_is_zero_without_drawing() {
    let rng = Scripted::new(vec![7]);
    assert_eq!(rng.uniform_int(0).unwrap(), 0);
    assert_eq!(rng.draws(), 0);
}

#[test]
fn uniform_int_power_of_two_never_rejects() {
    let rng = Scripted::new(vec![u32::MAX]);
    assert_eq!(rng.uniform_int(16).unwrap(), 15);
    assert_eq!(rng.draws(), 1);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn index_over_32_bits_is_a_range_error_not_a_source_failure() {
    let rng = Scripted::new(vec![0]);
    let len = u32::MAX as usize + 1;
    assert!(matches!(rng.index(len), Err(RandomError::RangeTooLarge(n)) if n == len));
    assert_eq!(rng.draws(), 0);
}

// ─── Uniformity ───

#[test]
fn uniform_int_passes_chi_square_for_ten_buckets() {
    let rng = SecureRandom::new();
    let draws = 100_000u64;
    let mut counts = [0u64; 10];
    for _ in 0..draws {
        counts[rng.uniform_int(10).unwrap() as usize] += 1;
    }
    // 9 degrees of freedom; 40 is far beyond the 0.001 critical value (27.9).
    let statistic = chi_square(&counts, draws as f64 / 10.0);
    assert!(statistic < 40.0, "chi-square {} for {:?}", statistic, counts);
}

#[test]
fn uniform_int_passes_chi_square_for_a_password_pool() {
    let rng = SecureRandom::new();
    let buckets = 94usize;
    let draws = (buckets * 1_000) as u64;
    let mut counts = vec![0u64; buckets];
    for _ in 0..draws {
        counts[rng.index(buckets).unwrap()] += 1;
    }
    // 93 degrees of freedom: mean 93, standard deviation about 13.6.
    let statistic = chi_square(&counts, 1_000.0);
    assert!(statistic < 175.0, "chi-square {}", statistic);
}

// ─── Shuffle and choose ───

#[test]
fn shuffle_keeps_the_same_elements() {
    let rng = SecureRandom::new();
    let mut items: Vec<u32> = (0..50).collect();
    shuffle(&rng, &mut items).unwrap();
    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
}

#[test]
fn shuffle_with_zero_draws_rotates_predictably() {
    // Every draw of 0 swaps position i with position 0.
    let rng = Scripted::new(vec![0]);
    let mut items = vec!['a', 'b', 'c', 'd'];
    shuffle(&rng, &mut items).unwrap();
    assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    assert_eq!(rng.draws(), 3);
}

#[test]
fn shuffle_of_short_slices_does_not_draw() {
    let rng = Scripted::new(vec![0]);
    let mut one = [42];
    shuffle(&rng, &mut one).unwrap();
    let mut none: [u8; 0] = [];
    shuffle(&rng, &mut none).unwrap();
    assert_eq!(rng.draws(), 0);
}

#[test]
fn choose_returns_none_for_empty() {
    let rng = SecureRandom::new();
    let empty: [u8; 0] = [];
    assert!(choose(&rng, &empty).unwrap().is_none());
    assert_eq!(choose(&rng, &[9]).unwrap(), Some(&9));
}

// ─── Failure propagation ───

#[test]
fn random_failure_surfaces_from_every_generator() {
    let broken = Arc::new(Broken::default());
    let generator = CredentialGenerator::new(broken.clone(), Wordlist::load(None));
    let requests = [
        GenerationRequest::Password(PasswordOptions::default()),
        GenerationRequest::Pin(PinOptions::default()),
        GenerationRequest::Passphrase(PassphraseOptions::default()),
        GenerationRequest::Username(UsernameOptions::default()),
    ];
    for request in &requests {
        let result = generator.generate(request);
        assert!(
            matches!(result, Err(GeneratorError::Random(RandomError::Unavailable(_)))),
            "{} did not propagate the failure",
            request.kind_name()
        );
    }
    assert!(broken.calls.load(Ordering::SeqCst) >= requests.len());
}
