use serde::{Deserialize, Serialize};

/// Inclusive bounds for a password length.
pub const PASSWORD_LENGTH_RANGE: (usize, usize) = (4, 128);

/// Inclusive bounds for a PIN length.
pub const PIN_LENGTH_RANGE: (usize, usize) = (4, 12);

/// Inclusive bounds for the number of words in a passphrase.
pub const WORD_COUNT_RANGE: (usize, usize) = (3, 8);

/// Inclusive bounds for usernames built character by character.
pub const USERNAME_LENGTH_RANGE: (usize, usize) = (4, 32);

/// Inclusive bounds for a bulk run.
pub const BULK_COUNT_RANGE: (usize, usize) = (1, 100);

fn clamp_to(value: usize, range: (usize, usize)) -> usize {
    value.clamp(range.0, range.1)
}

/// Clamps a bulk count into [`BULK_COUNT_RANGE`].
pub fn clamp_bulk_count(count: usize) -> usize {
    clamp_to(count, BULK_COUNT_RANGE)
}

/// A single request to generate one credential.
///
/// Built fresh for every user action and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    Password(PasswordOptions),
    Pin(PinOptions),
    Passphrase(PassphraseOptions),
    Username(UsernameOptions),
}

impl GenerationRequest {
    /// Returns a copy with every numeric field clamped into its range.
    pub fn clamped(&self) -> Self {
        match self {
            GenerationRequest::Password(o) => GenerationRequest::Password(o.clamped()),
            GenerationRequest::Pin(o) => GenerationRequest::Pin(o.clamped()),
            GenerationRequest::Passphrase(o) => GenerationRequest::Passphrase(o.clamped()),
            GenerationRequest::Username(o) => GenerationRequest::Username(o.clamped()),
        }
    }

    /// Short name of the credential kind, used in logs and RPC responses.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GenerationRequest::Password(_) => "password",
            GenerationRequest::Pin(_) => "pin",
            GenerationRequest::Passphrase(_) => "passphrase",
            GenerationRequest::Username(_) => "username",
        }
    }
}

/// Options for generating a random password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    /// Drops `0 O 1 l I |` from every class.
    pub exclude_ambiguous: bool,
    /// Drops `{ } [ ] ( ) \ / ' "` from every class.
    pub exclude_brackets: bool,
    /// Replaces the default symbol class when non-empty.
    pub custom_symbols: Option<String>,
    pub min_numbers: usize,
    pub min_symbols: usize,
    pub begin_with_letter: bool,
    pub no_repeating: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            exclude_ambiguous: false,
            exclude_brackets: false,
            custom_symbols: None,
            min_numbers: 1,
            min_symbols: 1,
            begin_with_letter: false,
            no_repeating: false,
        }
    }
}

impl PasswordOptions {
    pub fn clamped(&self) -> Self {
        let length = clamp_to(self.length, PASSWORD_LENGTH_RANGE);
        Self {
            length,
            min_numbers: self.min_numbers.min(length),
            min_symbols: self.min_symbols.min(length),
            ..self.clone()
        }
    }
}

/// Options for generating a numeric PIN.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PinOptions {
    pub length: usize,
    pub no_repeated_digits: bool,
    /// Rejects runs of three ascending or descending consecutive digits.
    pub no_sequential_digits: bool,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self {
            length: 6,
            no_repeated_digits: false,
            no_sequential_digits: true,
        }
    }
}

impl PinOptions {
    pub fn clamped(&self) -> Self {
        Self {
            length: clamp_to(self.length, PIN_LENGTH_RANGE),
            ..self.clone()
        }
    }
}

/// Separator placed between passphrase words.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    Hyphen,
    Underscore,
    Space,
    /// A freshly drawn digit in every gap.
    Digit,
}

/// Capitalization applied to every passphrase word.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Capitalization {
    None,
    FirstLetter,
    AllCaps,
}

/// Options for generating a passphrase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PassphraseOptions {
    pub word_count: usize,
    pub separator: Separator,
    pub capitalize: Capitalization,
    pub include_number: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: Separator::Hyphen,
            capitalize: Capitalization::None,
            include_number: false,
        }
    }
}

impl PassphraseOptions {
    pub fn clamped(&self) -> Self {
        Self {
            word_count: clamp_to(self.word_count, WORD_COUNT_RANGE),
            ..self.clone()
        }
    }
}

/// Recipe used to build a username.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UsernameStyle {
    AdjectiveNoun,
    Gaming,
    Pronounceable,
    WordDigits,
    RandomCharacters,
    Professional,
    CustomWord,
}

impl UsernameStyle {
    pub const ALL: [UsernameStyle; 7] = [
        UsernameStyle::AdjectiveNoun,
        UsernameStyle::Gaming,
        UsernameStyle::Pronounceable,
        UsernameStyle::WordDigits,
        UsernameStyle::RandomCharacters,
        UsernameStyle::Professional,
        UsernameStyle::CustomWord,
    ];
}

/// Options for generating a username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UsernameOptions {
    pub style: UsernameStyle,
    /// Target length for the pronounceable and random-character styles.
    pub length: usize,
    pub include_numbers: bool,
    pub capitalize: bool,
    /// Leading and trailing tokens for the gaming style.
    pub decorations: bool,
    pub custom_word: Option<String>,
}

impl Default for UsernameOptions {
    fn default() -> Self {
        Self {
            style: UsernameStyle::AdjectiveNoun,
            length: 10,
            include_numbers: true,
            capitalize: true,
            decorations: false,
            custom_word: None,
        }
    }
}

impl UsernameOptions {
    pub fn clamped(&self) -> Self {
        Self {
            length: clamp_to(self.length, USERNAME_LENGTH_RANGE),
            ..self.clone()
        }
    }
}
