// credforge shared type definitions
// Each submodule defines types used across the generators, estimator and RPC layer.

pub mod credential;
pub mod errors;
pub mod request;
pub mod settings;
pub mod strength;
