//! Passphrase generation over the shared wordlist.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::services::secure_random::{SecureRandomTrait, SharedRandom};
use crate::services::wordlist::Wordlist;
use crate::types::credential::{CredentialPolicy, GeneratedCredential};
use crate::types::errors::{GeneratorError, RandomError};
use crate::types::request::{Capitalization, PassphraseOptions, Separator};

/// Exclusive upper bound of the number spliced into a passphrase.
pub const PASSPHRASE_NUMBER_SPACE: u32 = 100;

/// Passphrase generator.
///
/// The wordlist is injected at construction. `None` means the list failed
/// to load; every call then returns [`GeneratorError::WordlistUnavailable`].
pub struct PassphraseGenerator {
    rng: SharedRandom,
    wordlist: Option<Arc<Wordlist>>,
}

impl PassphraseGenerator {
    pub fn new(rng: SharedRandom, wordlist: Option<Arc<Wordlist>>) -> Self {
        Self { rng, wordlist }
    }

    /// The injected wordlist, if it loaded.
    pub fn wordlist(&self) -> Option<&Arc<Wordlist>> {
        self.wordlist.as_ref()
    }

    pub fn generate(&self, options: &PassphraseOptions) -> Result<GeneratedCredential, GeneratorError> {
        let wordlist = self.wordlist.as_ref().ok_or_else(|| {
            tracing::error!("passphrase requested but no wordlist is loaded");
            GeneratorError::WordlistUnavailable
        })?;
        let rng = self.rng.as_ref();

        let mut tokens: Zeroizing<Vec<String>> = Zeroizing::new(Vec::with_capacity(options.word_count + 1));
        for _ in 0..options.word_count {
            let index = rng.index(wordlist.len())?;
            let word = wordlist.get(index).ok_or(GeneratorError::WordlistUnavailable)?;
            tokens.push(capitalize(word, options.capitalize));
        }

        if options.include_number {
            let number = rng.uniform_int(PASSPHRASE_NUMBER_SPACE)?;
            let position = rng.index(tokens.len() + 1)?;
            tokens.insert(position, number.to_string());
        }

        let value = join(rng, &tokens, options.separator)?;
        tracing::debug!(words = options.word_count, number = options.include_number, "passphrase generated");

        Ok(GeneratedCredential::new(
            value,
            CredentialPolicy::Passphrase {
                word_count: options.word_count,
                wordlist_size: wordlist.len(),
                includes_number: options.include_number,
            },
            Vec::new(),
        ))
    }
}

fn capitalize(word: &str, mode: Capitalization) -> String {
    match mode {
        Capitalization::None => word.to_string(),
        Capitalization::AllCaps => word.to_uppercase(),
        Capitalization::FirstLetter => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn join(rng: &dyn SecureRandomTrait, tokens: &[String], separator: Separator) -> Result<String, RandomError> {
    let fixed = match separator {
        Separator::Hyphen => "-",
        Separator::Underscore => "_",
        Separator::Space => " ",
        Separator::Digit => {
            let mut out = String::new();
            for (i, token) in tokens.iter().enumerate() {
                if i > 0 {
                    out.push(char::from(b'0' + rng.uniform_int(10)? as u8));
                }
                out.push_str(token);
            }
            return Ok(out);
        }
    };
    Ok(tokens.join(fixed))
}
