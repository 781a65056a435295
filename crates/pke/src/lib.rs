//! Message codecs for msgseal
//!
//! - [`RsaCodec`] encrypts directly under an RSA public key with PKCS#1 v1.5
//!   padding. Payloads are bounded by the key size.
//! - [`EccHybridCodec`] derives an AES-256 key by ECDH and encrypts payloads
//!   of any length under it.
//!
//! Both offer byte-level operations and text-level ones that go through the
//! transport encoding.

#![forbid(unsafe_code)]

pub mod hybrid;
pub mod pkcs1;

// Re-export key items
pub use hybrid::EccHybridCodec;
pub use msgseal_api::{Error, Result};
pub use pkcs1::RsaCodec;
