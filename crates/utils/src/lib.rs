//! Utilities and helpers for msgseal
//!
//! The only helper the codecs depend on is the transport encoding that turns
//! raw ciphertext bytes into text safe for byte-hostile channels.

#![forbid(unsafe_code)]

pub mod transport;

pub use transport::{decode, encode, encoded_len};
