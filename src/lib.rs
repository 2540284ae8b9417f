//! credforge: client-side generation of passwords, PINs, passphrases and
//! usernames, with entropy-based strength estimation.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
