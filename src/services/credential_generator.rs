//! Single entry point dispatching a [`GenerationRequest`] to its generator.

use std::sync::Arc;

use crate::services::passphrase_generator::PassphraseGenerator;
use crate::services::password_generator::PasswordGenerator;
use crate::services::pin_generator::PinGenerator;
use crate::services::secure_random::SharedRandom;
use crate::services::username_generator::UsernameGenerator;
use crate::services::wordlist::Wordlist;
use crate::types::credential::GeneratedCredential;
use crate::types::errors::GeneratorError;
use crate::types::request::GenerationRequest;

/// Trait defining credential generation.
pub trait CredentialGeneratorTrait {
    /// Generates one credential. Numeric ranges are assumed pre-validated;
    /// see [`GenerationRequest::clamped`].
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedCredential, GeneratorError>;
}

/// All generators wired to one random source and one wordlist.
pub struct CredentialGenerator {
    password: PasswordGenerator,
    pin: PinGenerator,
    passphrase: PassphraseGenerator,
    username: UsernameGenerator,
}

impl CredentialGenerator {
    pub fn new(rng: SharedRandom, wordlist: Option<Arc<Wordlist>>) -> Self {
        Self {
            password: PasswordGenerator::new(rng.clone()),
            pin: PinGenerator::new(rng.clone()),
            passphrase: PassphraseGenerator::new(rng.clone(), wordlist),
            username: UsernameGenerator::new(rng),
        }
    }

    /// The passphrase wordlist, if it loaded.
    pub fn wordlist(&self) -> Option<&Arc<Wordlist>> {
        self.passphrase.wordlist()
    }
}

impl CredentialGeneratorTrait for CredentialGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedCredential, GeneratorError> {
        let result = match request {
            GenerationRequest::Password(options) => self.password.generate(options),
            GenerationRequest::Pin(options) => self.pin.generate(options),
            GenerationRequest::Passphrase(options) => self.passphrase.generate(options),
            GenerationRequest::Username(options) => self.username.generate(options),
        };
        if let Ok(credential) = &result {
            tracing::debug!(kind = request.kind_name(), "credential generated");
            for adjustment in credential.adjustments() {
                tracing::warn!(kind = request.kind_name(), ?adjustment, "request adjusted");
            }
        }
        result
    }
}
