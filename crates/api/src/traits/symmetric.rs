//! Trait definition for the symmetric step of the hybrid scheme.

use crate::error::Result;
use crate::types::SharedSecretKey;
use rand::{CryptoRng, RngCore};

/// A symmetric cipher mode keyed by a [`SharedSecretKey`].
///
/// The hybrid codec is generic over this trait so the reference
/// electronic-codebook mode can be replaced by an authenticated mode without
/// touching the key-agreement or encoding layers.
pub trait SymmetricMode {
    /// Returns the mode name, e.g. `"AES-256-ECB-PKCS7"`.
    fn name(&self) -> &'static str;

    /// Encrypts `plaintext` of any length under `key`.
    ///
    /// Modes without a nonce ignore `rng`.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        key: &SharedSecretKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext` under `key`.
    ///
    /// # Errors
    /// Returns `Error::DecryptionFailure` when the padding or authentication
    /// check fails, which is the expected outcome for a wrong key.
    fn decrypt(&self, key: &SharedSecretKey, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
