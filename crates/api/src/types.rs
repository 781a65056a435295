//! Core types shared across the msgseal crates

use core::fmt;
use msgseal_params::utils::symmetric::AES256_KEY_SIZE;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size in bytes of the symmetric key derived from a key agreement (AES-256)
pub const SHARED_SECRET_KEY_SIZE: usize = AES256_KEY_SIZE;

/// Asymmetric algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Direct RSA public-key encryption
    Rsa,
    /// Elliptic-curve key agreement feeding a symmetric cipher
    Ecc,
}

impl Algorithm {
    /// Short display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Rsa => "RSA",
            Algorithm::Ecc => "ECC",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Symmetric key derived from a key agreement.
///
/// Lives only for the duration of one cipher operation. Zeroized on drop,
/// compared in constant time, never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecretKey([u8; SHARED_SECRET_KEY_SIZE]);

impl SharedSecretKey {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; SHARED_SECRET_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the key bytes
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_KEY_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for SharedSecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SharedSecretKey {}

impl fmt::Debug for SharedSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecretKey([REDACTED])")
    }
}
