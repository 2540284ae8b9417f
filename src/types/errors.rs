use thiserror::Error;

// === RandomError ===

/// Errors raised by the secure random source.
///
/// Always fatal for the generation call that hit it: no credential is
/// produced and no weaker source is substituted.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The operating system's secure random source failed.
    #[error("Secure random source unavailable: {0}")]
    Unavailable(String),
    /// A draw was requested over a range wider than 32 bits.
    #[error("Random range too large: {0}")]
    RangeTooLarge(usize),
}

// === WordlistError ===

/// Errors related to loading the passphrase wordlist.
#[derive(Debug, Error)]
pub enum WordlistError {
    /// The wordlist file could not be read.
    #[error("Wordlist I/O error: {0}")]
    Io(String),
    /// The wordlist contains no usable words.
    #[error("Wordlist is empty")]
    Empty,
}

// === GeneratorError ===

/// Errors returned by the credential generators.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The secure random source failed.
    #[error(transparent)]
    Random(#[from] RandomError),
    /// The passphrase wordlist was not loaded.
    #[error("Wordlist unavailable")]
    WordlistUnavailable,
    /// The request could not be satisfied within the attempt budget.
    #[error("Constraints unsatisfiable: {0}")]
    ConstraintsUnsatisfiable(String),
    /// The request is missing data the selected generator needs.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// === ExportError ===

/// Errors related to delimited-text export and import of bulk results.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer or reader failed.
    #[error("CSV error: {0}")]
    Csv(String),
    /// The text does not have the expected `index,value` shape.
    #[error("Malformed export: {0}")]
    Malformed(String),
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
