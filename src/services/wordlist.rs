//! Passphrase wordlist resource.
//!
//! Loaded once (from the embedded list or a configured file) and shared
//! read-only with the passphrase generator. The list size is measured at
//! load time and is the only figure used for passphrase entropy.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::types::errors::WordlistError;

/// The wordlist compiled into the binary.
pub const EMBEDDED_WORDLIST: &str = include_str!("../../assets/wordlist.txt");

/// An immutable, de-duplicated list of lowercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Parses a wordlist: one word per line, `#` comments and blank lines
    /// ignored, words lowercased, duplicates dropped.
    ///
    /// Lines that are not purely alphabetic are skipped so every word stays
    /// a single passphrase token.
    pub fn parse(text: &str) -> Result<Self, WordlistError> {
        let mut words: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        let mut skipped = 0usize;
        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if !word.chars().all(char::is_alphabetic) {
                skipped += 1;
                continue;
            }
            let word = word.to_lowercase();
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "wordlist lines with non-letter characters ignored");
        }
        if words.is_empty() {
            return Err(WordlistError::Empty);
        }
        Ok(Self { words })
    }

    /// Parses the embedded list.
    pub fn embedded() -> Result<Self, WordlistError> {
        Self::parse(EMBEDDED_WORDLIST)
    }

    /// Reads and parses a wordlist file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let text = fs::read_to_string(path.as_ref()).map_err(|e| {
            WordlistError::Io(format!("Failed to read {}: {}", path.as_ref().display(), e))
        })?;
        Self::parse(&text)
    }

    /// Loads from `path` if given, otherwise from the embedded list.
    ///
    /// Failure is logged and returned as `None`; the passphrase generator
    /// turns that into a distinct unavailable error.
    pub fn load(path: Option<&str>) -> Option<Arc<Self>> {
        let result = match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        };
        match result {
            Ok(list) => {
                tracing::debug!(words = list.len(), "wordlist loaded");
                Some(Arc::new(list))
            }
            Err(e) => {
                tracing::error!(error = %e, "wordlist failed to load");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.words.iter().any(|w| *w == lower)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
