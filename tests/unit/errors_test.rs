use credforge::types::errors::*;

// === RandomError Tests ===

#[test]
fn random_error_unavailable_display() {
    let err = RandomError::Unavailable("getrandom failed".to_string());
    assert_eq!(err.to_string(), "Secure random source unavailable: getrandom failed");
}

#[test]
fn random_error_range_too_large_display() {
    let err = RandomError::RangeTooLarge(42);
    assert_eq!(err.to_string(), "Random range too large: 42");
}

// === GeneratorError Tests ===

#[test]
fn generator_error_display_variants() {
    assert_eq!(GeneratorError::WordlistUnavailable.to_string(), "Wordlist unavailable");
    assert_eq!(
        GeneratorError::ConstraintsUnsatisfiable("no 4-digit PIN".to_string()).to_string(),
        "Constraints unsatisfiable: no 4-digit PIN"
    );
    assert_eq!(
        GeneratorError::InvalidRequest("empty word".to_string()).to_string(),
        "Invalid request: empty word"
    );
}

#[test]
fn generator_error_wraps_random_error_transparently() {
    let err: GeneratorError = RandomError::Unavailable("os".to_string()).into();
    assert!(matches!(err, GeneratorError::Random(_)));
    assert_eq!(err.to_string(), "Secure random source unavailable: os");
}

// === WordlistError Tests ===

#[test]
fn wordlist_error_display_variants() {
    assert_eq!(WordlistError::Empty.to_string(), "Wordlist is empty");
    assert_eq!(
        WordlistError::Io("permission denied".to_string()).to_string(),
        "Wordlist I/O error: permission denied"
    );
}

// === ExportError Tests ===

#[test]
fn export_error_display_variants() {
    assert_eq!(
        ExportError::Malformed("row 2 is out of order".to_string()).to_string(),
        "Malformed export: row 2 is out of order"
    );
    assert_eq!(ExportError::Csv("eof".to_string()).to_string(), "CSV error: eof");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("fair > good".to_string()).to_string(),
        "Invalid settings value: fair > good"
    );
}

#[test]
fn errors_implement_error_trait() {
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(RandomError::Unavailable("x".to_string())),
        Box::new(GeneratorError::WordlistUnavailable),
        Box::new(WordlistError::Empty),
        Box::new(ExportError::Malformed("x".to_string())),
        Box::new(SettingsError::InvalidKey("x".to_string())),
    ];
    assert_eq!(errors.len(), 5);
}
