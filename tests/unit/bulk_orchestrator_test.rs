//! Integration-level tests for bulk generation and delimited-text export.

use std::cell::Cell;

use credforge::services::bulk_orchestrator::{
    parse_delimited_text, to_delimited_text, BulkOrchestrator,
};
use credforge::services::credential_generator::{CredentialGenerator, CredentialGeneratorTrait};
use credforge::services::secure_random::SecureRandom;
use credforge::services::wordlist::Wordlist;
use credforge::types::credential::{CredentialPolicy, GeneratedCredential};
use credforge::types::errors::{ExportError, GeneratorError};
use credforge::types::request::{
    GenerationRequest, PassphraseOptions, PasswordOptions, PinOptions,
};
use rstest::rstest;
use zeroize::Zeroize;

/// Succeeds a fixed number of times, then fails.
struct FailsAfter {
    remaining: Cell<usize>,
}

impl CredentialGeneratorTrait for FailsAfter {
    fn generate(&self, _request: &GenerationRequest) -> Result<GeneratedCredential, GeneratorError> {
        let left = self.remaining.get();
        if left == 0 {
            return Err(GeneratorError::ConstraintsUnsatisfiable("out of luck".to_string()));
        }
        self.remaining.set(left - 1);
        Ok(GeneratedCredential::new(
            format!("item{}", left),
            CredentialPolicy::Pin { length: 5 },
            Vec::new(),
        ))
    }
}

fn generator() -> CredentialGenerator {
    CredentialGenerator::new(SecureRandom::shared(), Wordlist::load(None))
}

#[rstest]
#[case(GenerationRequest::Password(PasswordOptions::default()), 1)]
#[case(GenerationRequest::Pin(PinOptions::default()), 10)]
#[case(GenerationRequest::Passphrase(PassphraseOptions::default()), 100)]
fn batch_has_exactly_count_items(#[case] request: GenerationRequest, #[case] count: usize) {
    let mut bulk = BulkOrchestrator::new();
    let batch = bulk.generate_bulk(&generator(), &request, count).unwrap();
    assert_eq!(batch.items.len(), count);
    assert_eq!(batch.request, request);
}

#[test]
fn batch_items_are_independent_draws() {
    let mut bulk = BulkOrchestrator::new();
    let request = GenerationRequest::Password(PasswordOptions::default());
    let batch = bulk.generate_bulk(&generator(), &request, 50).unwrap();
    let unique: std::collections::HashSet<&String> = batch.items.iter().collect();
    assert_eq!(unique.len(), 50);
}

#[test]
fn failed_run_keeps_the_previous_batch() {
    let mut bulk = BulkOrchestrator::new();
    let request = GenerationRequest::Pin(PinOptions::default());
    let first_id = bulk.generate_bulk(&generator(), &request, 3).unwrap().id;

    let flaky = FailsAfter { remaining: Cell::new(2) };
    let result = bulk.generate_bulk(&flaky, &request, 5);
    assert!(matches!(result, Err(GeneratorError::ConstraintsUnsatisfiable(_))));

    let kept = bulk.last_batch().unwrap();
    assert_eq!(kept.id, first_id);
    assert_eq!(kept.items.len(), 3);
}

#[test]
fn export_then_parse_preserves_order() {
    let mut bulk = BulkOrchestrator::new();
    let request = GenerationRequest::Passphrase(PassphraseOptions::default());
    let batch = bulk.generate_bulk(&generator(), &request, 10).unwrap();

    let text = to_delimited_text(&batch.items).unwrap();
    assert_eq!(text.lines().count(), 11);
    assert_eq!(parse_delimited_text(&text).unwrap(), batch.items);
}

#[test]
fn export_quotes_awkward_values() {
    let items = vec![
        "plain".to_string(),
        "with,comma".to_string(),
        "with \"quote\"".to_string(),
        "with space".to_string(),
    ];
    let text = to_delimited_text(&items).unwrap();
    assert_eq!(text.lines().next(), Some("\"index\",\"value\""));
    assert!(text.contains("\"3\",\"with \"\"quote\"\"\""));
    assert_eq!(parse_delimited_text(&text).unwrap(), items);
}

#[test]
fn empty_export_is_just_the_header() {
    let text = to_delimited_text(&[]).unwrap();
    assert_eq!(text.trim_end(), "\"index\",\"value\"");
    assert!(parse_delimited_text(&text).unwrap().is_empty());
}

#[rstest]
#[case("\"index\",\"value\"\n\"2\",\"x\"\n")]
#[case("\"index\",\"value\"\n\"one\",\"x\"\n")]
#[case("\"idx\",\"value\"\n\"1\",\"x\"\n")]
fn parse_rejects_malformed_text(#[case] text: &str) {
    assert!(matches!(parse_delimited_text(text), Err(ExportError::Malformed(_))));
}

#[test]
fn zeroizing_a_batch_wipes_its_values() {
    let mut bulk = BulkOrchestrator::new();
    let request = GenerationRequest::Pin(PinOptions::default());
    let mut batch = bulk.generate_bulk(&generator(), &request, 4).unwrap().clone();
    let id = batch.id;

    batch.zeroize();
    assert!(batch.items.is_empty());
    assert_eq!(batch.id, id);
    assert_eq!(batch.request, request);
}

#[test]
fn clear_forgets_the_batch() {
    let mut bulk = BulkOrchestrator::new();
    let request = GenerationRequest::Pin(PinOptions::default());
    bulk.generate_bulk(&generator(), &request, 2).unwrap();
    assert!(bulk.last_batch().is_some());
    bulk.clear();
    assert!(bulk.last_batch().is_none());
}
