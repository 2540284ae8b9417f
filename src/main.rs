//! credforge: console demo.
//!
//! Runs every generator once, analyzes the results, does a small bulk
//! export and round-trips a setting. Set `RUST_LOG=credforge=debug` to
//! see the library's tracing output on stderr.

use std::error::Error;
use std::process::ExitCode;

use credforge::app::App;
use credforge::services::bulk_orchestrator::{parse_delimited_text, to_delimited_text};
use credforge::services::credential_generator::CredentialGeneratorTrait;
use credforge::services::settings_engine::SettingsEngineTrait;
use credforge::services::strength_estimator::{format_crack_time, StrengthEstimatorTrait};
use credforge::types::request::{
    Capitalization, GenerationRequest, PassphraseOptions, PasswordOptions, PinOptions, Separator,
    UsernameOptions, UsernameStyle,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type DemoResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "credforge=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              credforge v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║     Passwords, PINs, passphrases and usernames             ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let settings_path = std::env::temp_dir().join("credforge_demo_settings.json");
    let result = run(settings_path.to_string_lossy().to_string());
    let _ = std::fs::remove_file(&settings_path);

    match result {
        Ok(()) => {
            println!();
            println!("═══════════════════════════════════════════════════════════════");
            println!("  ✅ All components demonstrated successfully!");
            println!("═══════════════════════════════════════════════════════════════");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings_path: String) -> DemoResult {
    let mut app = App::new(Some(settings_path))?;

    demo_passwords(&app)?;
    demo_pins(&app)?;
    demo_passphrases(&app)?;
    demo_usernames(&app)?;
    demo_strength(&app);
    demo_bulk(&mut app)?;
    demo_settings(&mut app)?;
    Ok(())
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn show(app: &App, label: &str, request: GenerationRequest) -> DemoResult {
    let credential = app.generator.generate(&request)?;
    let analysis = app.analyze(&credential);
    println!(
        "  {:<22} {:<36} {:>6.1} bits  {:<11} {}",
        label,
        credential.value(),
        analysis.entropy_bits,
        analysis.level.label(),
        analysis.crack_time_label
    );
    for adjustment in credential.adjustments() {
        println!("  {:<22} adjusted: {:?}", "", adjustment);
    }
    Ok(())
}

fn demo_passwords(app: &App) -> DemoResult {
    section("Password Generator");

    show(app, "default", GenerationRequest::Password(PasswordOptions::default()))?;
    show(
        app,
        "32, no ambiguous",
        GenerationRequest::Password(PasswordOptions {
            length: 32,
            exclude_ambiguous: true,
            exclude_brackets: true,
            ..PasswordOptions::default()
        }),
    )?;
    show(
        app,
        "letters only, seeded",
        GenerationRequest::Password(PasswordOptions {
            numbers: false,
            symbols: false,
            begin_with_letter: true,
            ..PasswordOptions::default()
        }),
    )?;
    show(
        app,
        "digits, no repeats",
        GenerationRequest::Password(PasswordOptions {
            length: 40,
            uppercase: false,
            lowercase: false,
            symbols: false,
            no_repeating: true,
            ..PasswordOptions::default()
        }),
    )?;
    println!("  ✓ PasswordGenerator OK");
    println!();
    Ok(())
}

fn demo_pins(app: &App) -> DemoResult {
    section("PIN Generator");

    show(app, "6 digits", GenerationRequest::Pin(PinOptions::default()))?;
    show(
        app,
        "8, no repeats",
        GenerationRequest::Pin(PinOptions {
            length: 8,
            no_repeated_digits: true,
            no_sequential_digits: true,
        }),
    )?;
    println!("  ✓ PinGenerator OK");
    println!();
    Ok(())
}

fn demo_passphrases(app: &App) -> DemoResult {
    section("Passphrase Generator");

    let size = app.generator.wordlist().map(|w| w.len()).unwrap_or(0);
    println!("  Wordlist: {} words", size);
    show(app, "default", GenerationRequest::Passphrase(PassphraseOptions::default()))?;
    show(
        app,
        "6 words, numbered",
        GenerationRequest::Passphrase(PassphraseOptions {
            word_count: 6,
            separator: Separator::Digit,
            capitalize: Capitalization::FirstLetter,
            include_number: true,
        }),
    )?;
    println!("  ✓ PassphraseGenerator OK");
    println!();
    Ok(())
}

fn demo_usernames(app: &App) -> DemoResult {
    section("Username Generator");

    for style in UsernameStyle::ALL {
        let options = UsernameOptions {
            style,
            decorations: true,
            custom_word: Some("forge".to_string()),
            ..UsernameOptions::default()
        };
        let credential = app.generator.generate(&GenerationRequest::Username(options))?;
        println!("  {:<22} {}", format!("{:?}", style), credential.value());
    }
    println!("  ✓ UsernameGenerator OK");
    println!();
    Ok(())
}

fn demo_strength(app: &App) {
    section("Strength Estimator");

    for sample in ["password", "Tr0ub4dor&3", "correct-horse-battery-staple"] {
        let analysis = app.estimator.analyze(sample);
        println!(
            "  {:<30} {:>6.1} bits  {:<11} {}",
            sample,
            analysis.entropy_bits,
            analysis.level.label(),
            analysis.crack_time_label
        );
    }
    for seconds in [0.5, 90.0, 86_400.0 * 400.0, 3.2e22] {
        println!("  {:>10e} s → {}", seconds, format_crack_time(seconds));
    }
    println!("  ✓ StrengthEstimator OK");
    println!();
}

fn demo_bulk(app: &mut App) -> DemoResult {
    section("Bulk Orchestrator");

    let request = GenerationRequest::Pin(PinOptions::default());
    let batch = app.bulk.generate_bulk(&app.generator, &request, 5)?;
    println!("  Batch {} with {} items", batch.id, batch.items.len());

    let text = to_delimited_text(&batch.items)?;
    for line in text.lines() {
        println!("    {}", line);
    }
    let parsed = parse_delimited_text(&text)?;
    println!("  Round-trip preserved {} values in order: {}", parsed.len(), parsed == batch.items);

    app.bulk.clear();
    println!("  ✓ BulkOrchestrator OK");
    println!();
    Ok(())
}

fn demo_settings(app: &mut App) -> DemoResult {
    section("Settings Engine");

    println!("  Config path: {}", app.settings_engine.get_config_path());
    let settings = app.settings_engine.get_settings();
    println!("  Password length: {}", settings.password.length);
    println!("  Thresholds: {:?}", settings.strength.thresholds);

    app.settings_engine.set_value("password.length", serde_json::json!(24))?;
    app.reload()?;
    println!("  Changed password length to: {}", app.settings_engine.get_settings().password.length);

    match app.settings_engine.set_value("strength.thresholds.fair", serde_json::json!(99.0)) {
        Ok(()) => println!("  Non-monotonic thresholds were accepted"),
        Err(e) => println!("  Rejected bad thresholds: {}", e),
    }

    app.settings_engine.reset()?;
    app.reload()?;
    println!("  Reset to defaults");
    println!("  ✓ SettingsEngine OK");
    println!();
    Ok(())
}
