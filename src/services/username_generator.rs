//! Template-driven username generation.
//!
//! Each [`UsernameStyle`] is an independent recipe over fixed word lists and
//! character sets. None of them need the constraint machinery used for
//! passwords; they only share the secure random source.

use crate::services::secure_random::{SecureRandomTrait, SharedRandom};
use crate::types::credential::{CredentialPolicy, GeneratedCredential};
use crate::types::errors::{GeneratorError, RandomError};
use crate::types::request::{UsernameOptions, UsernameStyle};

const ADJECTIVES: &[&str] = &[
    "agile", "bold", "brave", "bright", "calm", "clever", "cosmic", "crisp", "daring", "eager",
    "fancy", "fierce", "gentle", "golden", "happy", "humble", "jolly", "keen", "lively", "lucky",
    "mellow", "mighty", "nimble", "noble", "plucky", "proud", "quick", "quiet", "rapid", "rustic",
    "shiny", "silent", "sly", "snowy", "solar", "steady", "sunny", "swift", "tidy", "vivid",
    "wild", "wise", "witty", "zany", "zesty",
];

const NOUNS: &[&str] = &[
    "badger", "beacon", "canyon", "comet", "coyote", "dolphin", "eagle", "ember", "falcon", "fern",
    "fox", "glacier", "harbor", "hawk", "heron", "island", "jaguar", "koala", "lantern", "lynx",
    "maple", "meadow", "meteor", "otter", "owl", "panda", "pebble", "pine", "raven", "river",
    "rocket", "sparrow", "spruce", "storm", "summit", "tiger", "walrus", "willow", "wolf", "zephyr",
];

const GAMER_ADJECTIVES: &[&str] = &[
    "Shadow", "Toxic", "Savage", "Frozen", "Blazing", "Silent", "Rogue", "Epic", "Turbo", "Hyper",
    "Mystic", "Cyber", "Atomic", "Feral", "Venom", "Lunar", "Crimson", "Phantom", "Rapid", "Stealth",
];

const GAMER_NOUNS: &[&str] = &[
    "Sniper", "Ninja", "Reaper", "Wolf", "Dragon", "Viper", "Knight", "Ghost", "Titan", "Falcon",
    "Hunter", "Raider", "Wizard", "Slayer", "Storm", "Blade", "Phoenix", "Samurai", "Cobra", "Ranger",
];

const LEADING_DECORATIONS: &[&str] = &["xX", "The", "Pro", "Dark", "Mr"];
const TRAILING_DECORATIONS: &[&str] = &["Xx", "_YT", "TTV", "GG", "HD"];

const FIRST_NAMES: &[&str] = &[
    "alex", "jordan", "taylor", "morgan", "casey", "riley", "jamie", "avery", "quinn", "harper",
    "rowan", "emery", "sasha", "robin", "drew", "kai", "noel", "reese", "sky", "blair",
];

const LAST_NAMES: &[&str] = &[
    "smith", "johnson", "lee", "garcia", "brown", "miller", "davis", "wilson", "moore", "clark",
    "lewis", "walker", "hall", "young", "king", "wright", "scott", "green", "baker", "adams",
];

/// English vowels.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// English consonants.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'w', 'z',
];

const RANDOM_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Username generator drawing from an injected secure random source.
pub struct UsernameGenerator {
    rng: SharedRandom,
}

impl UsernameGenerator {
    pub fn new(rng: SharedRandom) -> Self {
        Self { rng }
    }

    pub fn generate(&self, options: &UsernameOptions) -> Result<GeneratedCredential, GeneratorError> {
        let rng = self.rng.as_ref();
        let value = match options.style {
            UsernameStyle::AdjectiveNoun => adjective_noun(rng, options)?,
            UsernameStyle::Gaming => gaming(rng, options)?,
            UsernameStyle::Pronounceable => pronounceable(rng, options)?,
            UsernameStyle::WordDigits => word_digits(rng, options)?,
            UsernameStyle::RandomCharacters => random_characters(rng, options.length)?,
            UsernameStyle::Professional => professional(rng, options)?,
            UsernameStyle::CustomWord => custom_word(rng, options)?,
        };
        tracing::debug!(style = ?options.style, "username generated");
        Ok(GeneratedCredential::new(
            value,
            CredentialPolicy::Username { style: options.style },
            Vec::new(),
        ))
    }
}

fn pick<'a>(rng: &dyn SecureRandomTrait, items: &[&'a str]) -> Result<&'a str, RandomError> {
    Ok(items[rng.index(items.len())?])
}

fn digits(rng: &dyn SecureRandomTrait, count: usize) -> Result<String, RandomError> {
    let mut out = String::with_capacity(count);
    for _ in 0..count {
        out.push(char::from(b'0' + rng.uniform_int(10)? as u8));
    }
    Ok(out)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn adjective_noun(rng: &dyn SecureRandomTrait, options: &UsernameOptions) -> Result<String, RandomError> {
    let (adjective, noun) = (pick(rng, ADJECTIVES)?, pick(rng, NOUNS)?);
    let mut name = if options.capitalize {
        format!("{}{}", title_case(adjective), title_case(noun))
    } else {
        format!("{}_{}", adjective, noun)
    };
    if options.include_numbers {
        name.push_str(&digits(rng, 2)?);
    }
    Ok(name)
}

fn gaming(rng: &dyn SecureRandomTrait, options: &UsernameOptions) -> Result<String, RandomError> {
    let mut name = String::new();
    if options.decorations {
        name.push_str(pick(rng, LEADING_DECORATIONS)?);
    }
    name.push_str(pick(rng, GAMER_ADJECTIVES)?);
    name.push_str(pick(rng, GAMER_NOUNS)?);
    if options.include_numbers {
        name.push_str(&rng.uniform_int(1000)?.to_string());
    }
    if options.decorations {
        name.push_str(pick(rng, TRAILING_DECORATIONS)?);
    }
    Ok(name)
}

fn pronounceable(rng: &dyn SecureRandomTrait, options: &UsernameOptions) -> Result<String, RandomError> {
    let mut name = String::with_capacity(options.length + 1);
    while name.len() < options.length {
        name.push(CONSONANTS[rng.index(CONSONANTS.len())?]);
        name.push(VOWELS[rng.index(VOWELS.len())?]);
    }
    name.truncate(options.length);
    if options.capitalize {
        name = title_case(&name);
    }
    Ok(name)
}

fn word_digits(rng: &dyn SecureRandomTrait, options: &UsernameOptions) -> Result<String, RandomError> {
    let word = pick(rng, NOUNS)?;
    let word = if options.capitalize { title_case(word) } else { word.to_string() };
    let count = 2 + rng.index(3)?;
    Ok(format!("{}{}", word, digits(rng, count)?))
}

fn random_characters(rng: &dyn SecureRandomTrait, length: usize) -> Result<String, RandomError> {
    let mut name = String::with_capacity(length);
    for i in 0..length {
        // First character is always a letter.
        let bound = if i == 0 { 26 } else { RANDOM_CHARSET.len() };
        name.push(char::from(RANDOM_CHARSET[rng.index(bound)?]));
    }
    Ok(name)
}

fn professional(rng: &dyn SecureRandomTrait, options: &UsernameOptions) -> Result<String, RandomError> {
    let first = pick(rng, FIRST_NAMES)?;
    let last = pick(rng, LAST_NAMES)?;
    let first_initial = &first[..1];
    let last_initial = &last[..1];
    let mut name = match rng.uniform_int(5)? {
        0 => format!("{}.{}", first, last),
        1 => format!("{}_{}", first, last),
        2 => format!("{}{}", first_initial, last),
        3 => format!("{}{}", first, last_initial),
        _ => format!("{}.{}", first, last_initial),
    };
    if options.include_numbers {
        name.push_str(&digits(rng, 2)?);
    }
    Ok(name)
}

fn custom_word(rng: &dyn SecureRandomTrait, options: &UsernameOptions) -> Result<String, GeneratorError> {
    let base: String = options
        .custom_word
        .as_deref()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    if base.is_empty() {
        return Err(GeneratorError::InvalidRequest(
            "custom word style needs a non-empty custom_word".to_string(),
        ));
    }
    let base = if options.capitalize { title_case(&base) } else { base.to_lowercase() };

    let mut name = if rng.uniform_int(2)? == 0 {
        let adjective = pick(rng, ADJECTIVES)?;
        if options.capitalize {
            format!("{}{}", title_case(adjective), base)
        } else {
            format!("{}_{}", adjective, base)
        }
    } else {
        base
    };
    if options.include_numbers {
        name.push_str(&rng.uniform_int(1000)?.to_string());
    }
    Ok(name)
}
