//! # msgseal
//!
//! A small toolkit for protecting text messages that travel over narrow,
//! byte-hostile channels such as SMS.
//!
//! Two schemes are offered:
//!
//! - **RSA**: the message is encrypted directly under the recipient's RSA
//!   public key with PKCS#1 v1.5 padding. Payloads are limited to
//!   `modulus_bytes - 11`.
//! - **ECC hybrid**: ECDH over P-256, P-384 or P-521 yields a 32-byte
//!   AES-256 key which encrypts a payload of any length.
//!
//! Ciphertext always leaves the toolkit as single-line standard Base64.
//!
//! ```no_run
//! use msgseal::prelude::*;
//!
//! # fn main() -> msgseal::Result<()> {
//! let pair = msgseal::generate_key_pair(Algorithm::Rsa, 2048)?;
//! let sealed = msgseal::rsa_encrypt("Hello, World!", pair.public_key())?;
//! assert_eq!(msgseal::rsa_decrypt(&sealed, pair.private_key())?, "Hello, World!");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`msgseal-api`]: error taxonomy and shared types
//! - [`msgseal-params`]: algorithm constants
//! - [`msgseal-utils`]: transport encoding
//! - [`msgseal-symmetric`]: AES-256 modes for the hybrid scheme
//! - [`msgseal-kem`]: key generation and ECDH
//! - [`msgseal-pke`]: the RSA and hybrid codecs
//!
//! ## Features
//!
//! - `serde`: (de)serialization of [`SessionConfig`] and the descriptive types

#![forbid(unsafe_code)]

pub use msgseal_api as api;
pub use msgseal_kem as kem;
pub use msgseal_params as params;
pub use msgseal_pke as pke;
pub use msgseal_symmetric as symmetric;
pub use msgseal_utils as utils;

pub mod session;
mod toolkit;

pub use msgseal_api::{Algorithm, Error, ErrorKind, Result, ResultExt};
pub use session::{Session, SessionConfig, SessionError};
pub use toolkit::{ecc_decrypt, ecc_encrypt, generate_key_pair, rsa_decrypt, rsa_encrypt};

/// Common imports for msgseal users
pub mod prelude {
    pub use crate::api::{Algorithm, Error, ErrorKind, Result, ResultExt, SharedSecretKey, SymmetricMode};
    pub use crate::kem::{AsymmetricKeyPair, KeyPairFactory, NamedCurve, PrivateKey, PublicKey, Strength};
    pub use crate::pke::{EccHybridCodec, RsaCodec};
    pub use crate::session::{Session, SessionConfig, SessionError};
    pub use crate::symmetric::{Aes256Ecb, Aes256Gcm, ModeKind};
    pub use crate::utils::{decode, encode, encoded_len};
}
