// credforge services
// Services provide the core: secure randomness, pool construction, the generators,
// strength estimation, bulk runs and settings.

pub mod bulk_orchestrator;
pub mod character_policy;
pub mod credential_generator;
pub mod passphrase_generator;
pub mod password_generator;
pub mod pin_generator;
pub mod secure_random;
pub mod settings_engine;
pub mod strength_estimator;
pub mod username_generator;
pub mod wordlist;
