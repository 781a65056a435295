//! Shared fixtures for the msgseal integration tests and benchmarks
pub mod fixtures;

pub use fixtures::{init_tracing, random_message, rsa_pair, seeded_rng};
