//! Runtime selection between the symmetric modes

use crate::{Aes256Ecb, Aes256Gcm};
use msgseal_api::{Result, SharedSecretKey, SymmetricMode};
use rand::{CryptoRng, RngCore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Symmetric mode chosen at runtime, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModeKind {
    /// AES-256-ECB with PKCS#7 padding
    #[default]
    Ecb,
    /// AES-256-GCM with random nonce
    Gcm,
}

impl SymmetricMode for ModeKind {
    fn name(&self) -> &'static str {
        match self {
            ModeKind::Ecb => Aes256Ecb.name(),
            ModeKind::Gcm => Aes256Gcm.name(),
        }
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        key: &SharedSecretKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        match self {
            ModeKind::Ecb => Aes256Ecb.encrypt(key, plaintext, rng),
            ModeKind::Gcm => Aes256Gcm.encrypt(key, plaintext, rng),
        }
    }

    fn decrypt(&self, key: &SharedSecretKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match self {
            ModeKind::Ecb => Aes256Ecb.decrypt(key, ciphertext),
            ModeKind::Gcm => Aes256Gcm.decrypt(key, ciphertext),
        }
    }
}
