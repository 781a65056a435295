//! Symmetric modes for msgseal
//!
//! The hybrid scheme keys one of these modes with the 32-byte secret derived
//! from the elliptic-curve agreement:
//!
//! - [`Aes256Ecb`]: AES-256 in electronic-codebook mode with PKCS#7 padding.
//!   No nonce, deterministic, and leaks repeated 16-byte blocks. This is the
//!   reference mode and the default.
//! - [`Aes256Gcm`]: AES-256-GCM with a random 12-byte nonce prefixed to the
//!   output. Authenticated and randomized; the hardened replacement.

#![forbid(unsafe_code)]

pub mod ecb;
pub mod gcm;
pub mod mode;

// Re-export main types for convenience
pub use ecb::Aes256Ecb;
pub use gcm::Aes256Gcm;
pub use mode::ModeKind;

// Re-export the API error system instead of custom error types
pub use msgseal_api::error::{Error, Result};
pub use msgseal_api::SymmetricMode;
