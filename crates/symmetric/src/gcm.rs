//! AES-256-GCM with a random nonce prefix
//!
//! Output layout: `nonce (12) || ciphertext || tag (16)`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm as GcmCipher, Nonce};
use msgseal_api::{Error, Result, SharedSecretKey, SymmetricMode};
use msgseal_params::utils::symmetric::{AES_GCM_NONCE_SIZE, AES_GCM_TAG_SIZE};
use rand::{CryptoRng, RngCore};

/// Smallest valid output: nonce and tag around an empty plaintext
pub const MIN_CIPHERTEXT_LEN: usize = AES_GCM_NONCE_SIZE + AES_GCM_TAG_SIZE;

/// AES-256-GCM authenticated mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aes256Gcm;

impl SymmetricMode for Aes256Gcm {
    fn name(&self) -> &'static str {
        "AES-256-GCM"
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        key: &SharedSecretKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let mut nonce_bytes = [0u8; AES_GCM_NONCE_SIZE];
        rng.fill_bytes(&mut nonce_bytes);

        let cipher = GcmCipher::new(key.as_bytes().into());
        let sealed = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
            .map_err(|e| Error::encryption("AES-256-GCM", e.to_string()))?;

        let mut output = Vec::with_capacity(AES_GCM_NONCE_SIZE + sealed.len());
        output.extend_from_slice(&nonce_bytes);
        output.extend_from_slice(&sealed);
        Ok(output)
    }

    fn decrypt(&self, key: &SharedSecretKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < MIN_CIPHERTEXT_LEN {
            return Err(Error::decryption(
                "AES-256-GCM",
                format!(
                    "ciphertext of {} bytes is shorter than nonce and tag ({})",
                    ciphertext.len(),
                    MIN_CIPHERTEXT_LEN
                ),
            ));
        }

        let (nonce_bytes, sealed) = ciphertext.split_at(AES_GCM_NONCE_SIZE);
        let cipher = GcmCipher::new(key.as_bytes().into());
        cipher
            .decrypt(Nonce::from_slice(nonce_bytes), sealed)
            .map_err(|_| Error::decryption("AES-256-GCM", "authentication failed"))
    }
}
