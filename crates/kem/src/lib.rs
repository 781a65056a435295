//! Key-pair generation and key agreement
//!
//! This crate owns the asymmetric key material of msgseal:
//!
//! - [`KeyPairFactory`] produces RSA or elliptic-curve key pairs at a
//!   requested strength.
//! - [`NamedCurve`] is the bit-length-to-curve table used for elliptic-curve
//!   strengths, with a documented default for unrecognized lengths.
//! - [`ecdh`] performs the Diffie-Hellman agreement the hybrid scheme derives
//!   its symmetric key from.

#![forbid(unsafe_code)]

pub mod curve;
pub mod ecdh;
pub mod factory;
pub mod keys;

// Re-exports
pub use curve::NamedCurve;
pub use ecdh::{agree, derive_shared_key, shared_key, RawSharedSecret};
pub use factory::KeyPairFactory;
pub use keys::{AsymmetricKeyPair, EcPublicKey, EcSecretKey, PrivateKey, PublicKey, Strength};
