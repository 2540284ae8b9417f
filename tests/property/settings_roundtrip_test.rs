//! Property-based tests for GeneratorSettings persistence.
//!
//! These tests verify that settings survive JSON serialization and a
//! save/load cycle through the SettingsEngine for arbitrary valid inputs.

use credforge::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use credforge::types::request::{
    Capitalization, PassphraseOptions, PasswordOptions, PinOptions, Separator, UsernameOptions,
    UsernameStyle,
};
use credforge::types::settings::{BulkSettings, GeneratorSettings, StrengthSettings, WordlistSettings};
use credforge::types::strength::StrengthThresholds;
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

// --- Arbitrary strategies for the settings sections ---

fn arb_password_options() -> impl Strategy<Value = PasswordOptions> {
    (
        4usize..=128,
        any::<[bool; 8]>(),
        proptest::option::of("[!-/:-@]{1,10}"),
        0usize..=5,
        0usize..=5,
    )
        .prop_map(|(length, flags, custom_symbols, min_numbers, min_symbols)| PasswordOptions {
            length,
            uppercase: flags[0],
            lowercase: flags[1],
            numbers: flags[2],
            symbols: flags[3],
            exclude_ambiguous: flags[4],
            exclude_brackets: flags[5],
            custom_symbols,
            min_numbers,
            min_symbols,
            begin_with_letter: flags[6],
            no_repeating: flags[7],
        })
}

fn arb_pin_options() -> impl Strategy<Value = PinOptions> {
    (4usize..=12, any::<bool>(), any::<bool>()).prop_map(|(length, no_repeated_digits, no_sequential_digits)| {
        PinOptions {
            length,
            no_repeated_digits,
            no_sequential_digits,
        }
    })
}

fn arb_passphrase_options() -> impl Strategy<Value = PassphraseOptions> {
    let separator = prop_oneof![
        Just(Separator::Hyphen),
        Just(Separator::Underscore),
        Just(Separator::Space),
        Just(Separator::Digit),
    ];
    let capitalize = prop_oneof![
        Just(Capitalization::None),
        Just(Capitalization::FirstLetter),
        Just(Capitalization::AllCaps),
    ];
    (3usize..=8, separator, capitalize, any::<bool>()).prop_map(
        |(word_count, separator, capitalize, include_number)| PassphraseOptions {
            word_count,
            separator,
            capitalize,
            include_number,
        },
    )
}

fn arb_username_options() -> impl Strategy<Value = UsernameOptions> {
    (
        proptest::sample::select(UsernameStyle::ALL.to_vec()),
        4usize..=32,
        any::<(bool, bool, bool)>(),
        proptest::option::of("[a-z]{1,12}"),
    )
        .prop_map(|(style, length, (include_numbers, capitalize, decorations), custom_word)| {
            UsernameOptions {
                style,
                length,
                include_numbers,
                capitalize,
                decorations,
                custom_word,
            }
        })
}

/// Thresholds built from non-negative steps so they are always monotonic.
fn arb_strength_settings() -> impl Strategy<Value = StrengthSettings> {
    (0u32..=60, 0u32..=30, 0u32..=30, 0u32..=30, 1u32..=12).prop_map(
        |(fair, good_step, strong_step, very_strong_step, rate_exp)| {
            let fair = f64::from(fair);
            let good = fair + f64::from(good_step);
            let strong = good + f64::from(strong_step);
            StrengthSettings {
                thresholds: StrengthThresholds {
                    fair,
                    good,
                    strong,
                    very_strong: strong + f64::from(very_strong_step),
                },
                guesses_per_second: 10f64.powi(rate_exp as i32),
            }
        },
    )
}

fn arb_generator_settings() -> impl Strategy<Value = GeneratorSettings> {
    (
        arb_password_options(),
        arb_pin_options(),
        arb_passphrase_options(),
        arb_username_options(),
        arb_strength_settings(),
        1usize..=100,
        proptest::option::of("/[a-z]{1,10}/[a-z]{1,10}\\.txt"),
    )
        .prop_map(
            |(password, pin, passphrase, username, strength, default_count, path)| GeneratorSettings {
                password,
                pin,
                passphrase,
                username,
                strength,
                bulk: BulkSettings { default_count },
                wordlist: WordlistSettings { path },
            },
        )
}

// **Property 1: Settings serialization round-trip**
//
// *For any* valid `GeneratorSettings`, serializing to JSON then
// deserializing SHALL produce an equivalent struct.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_serialization_roundtrip(settings in arb_generator_settings()) {
        let json = serde_json::to_string(&settings)
            .expect("Serialization to JSON should succeed for any valid GeneratorSettings");

        let deserialized: GeneratorSettings = serde_json::from_str(&json)
            .expect("Deserialization from JSON should succeed for valid JSON");

        prop_assert_eq!(deserialized, settings);
    }
}

// **Property 2: Values set by key survive a reload**
//
// *For any* password length, PIN options and passphrase options written
// through `set_value`, a fresh engine on the same file SHALL load the same
// settings.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn set_value_then_reload_is_identity(
        length in 4usize..=128,
        pin in arb_pin_options(),
        passphrase in arb_passphrase_options(),
    ) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.load().expect("load should succeed");
        engine.set_value("password.length", json!(length)).expect("set length");
        engine
            .set_value("pin", serde_json::to_value(&pin).expect("pin to json"))
            .expect("set pin");
        engine
            .set_value("passphrase", serde_json::to_value(&passphrase).expect("passphrase to json"))
            .expect("set passphrase");

        let mut reloaded = SettingsEngine::new(Some(path));
        let settings = reloaded.load().expect("reload should succeed");
        prop_assert_eq!(&settings, engine.get_settings());
        prop_assert_eq!(settings.password.length, length);
        prop_assert_eq!(settings.pin, pin);
        prop_assert_eq!(settings.passphrase, passphrase);
    }
}
