//! Public API traits and types for msgseal
//!
//! This crate provides the public API surface shared by every msgseal crate:
//! the error taxonomy surfaced to callers, the algorithm tag, the derived
//! symmetric key type and the trait behind which symmetric modes are swapped.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use traits::SymmetricMode;
pub use types::{Algorithm, SharedSecretKey, SHARED_SECRET_KEY_SIZE};
