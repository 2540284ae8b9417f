//! App Core for credforge.
//!
//! Central struct holding the settings and the services built from them.

use crate::services::bulk_orchestrator::BulkOrchestrator;
use crate::services::credential_generator::CredentialGenerator;
use crate::services::secure_random::{SecureRandom, SharedRandom};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::strength_estimator::{StrengthEstimator, StrengthEstimatorTrait};
use crate::services::wordlist::Wordlist;
use crate::types::credential::GeneratedCredential;
use crate::types::errors::SettingsError;
use crate::types::strength::StrengthAnalysis;

/// Central application struct holding all services.
///
/// The generator and estimator are derived from the current settings;
/// call [`App::reload`] after changing them.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub generator: CredentialGenerator,
    pub estimator: StrengthEstimator,
    pub bulk: BulkOrchestrator,
    random: SharedRandom,
}

impl App {
    /// Creates a new App backed by the operating system's secure random source.
    ///
    /// `settings_path` overrides the platform config location.
    pub fn new(settings_path: Option<String>) -> Result<Self, SettingsError> {
        Self::with_random(settings_path, SecureRandom::shared())
    }

    /// Creates a new App drawing from `random`.
    ///
    /// A settings file that fails to load is logged and replaced by defaults
    /// in memory; it is not overwritten until a setting changes.
    pub fn with_random(settings_path: Option<String>, random: SharedRandom) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            tracing::warn!(
                path = settings_engine.get_config_path(),
                error = %e,
                "settings failed to load, using defaults"
            );
        }

        let settings = settings_engine.get_settings();
        let wordlist = Wordlist::load(settings.wordlist.path.as_deref());
        let estimator = StrengthEstimator::from_settings(&settings.strength)?;
        let generator = CredentialGenerator::new(random.clone(), wordlist);

        Ok(Self {
            settings_engine,
            generator,
            estimator,
            bulk: BulkOrchestrator::new(),
            random,
        })
    }

    /// Rebuilds the generator and estimator from the current settings.
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        let settings = self.settings_engine.get_settings();
        self.estimator = StrengthEstimator::from_settings(&settings.strength)?;

        let wordlist = Wordlist::load(settings.wordlist.path.as_deref());
        self.generator = CredentialGenerator::new(self.random.clone(), wordlist);
        tracing::debug!("services rebuilt from settings");
        Ok(())
    }

    /// Strength of a credential this app produced.
    pub fn analyze(&self, credential: &GeneratedCredential) -> StrengthAnalysis {
        self.estimator.analyze_credential(credential)
    }
}
