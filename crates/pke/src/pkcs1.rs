//! Direct RSA encryption with PKCS#1 v1.5 padding
//!
//! The whole message goes through the RSA primitive in one block, so its
//! length is bounded by the key: `modulus_bytes - 11`. Longer messages are
//! rejected rather than split.

use msgseal_api::{Algorithm, Error, Result, ResultExt};
use msgseal_kem::{PrivateKey, PublicKey};
use msgseal_params::traditional::rsa::PKCS1_V15_PADDING_OVERHEAD;
use msgseal_utils::transport;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

/// RSA message codec
pub struct RsaCodec;

fn rsa_public(key: &PublicKey) -> Result<&RsaPublicKey> {
    key.as_rsa().ok_or(Error::AlgorithmMismatch {
        expected: Algorithm::Rsa,
        actual: key.algorithm(),
    })
}

fn rsa_private(key: &PrivateKey) -> Result<&RsaPrivateKey> {
    key.as_rsa().ok_or(Error::AlgorithmMismatch {
        expected: Algorithm::Rsa,
        actual: key.algorithm(),
    })
}

impl RsaCodec {
    /// Largest plaintext in bytes that `public_key` can encrypt.
    pub fn max_plaintext_len(public_key: &PublicKey) -> Result<usize> {
        let pk = rsa_public(public_key)?;
        Ok(pk.size().saturating_sub(PKCS1_V15_PADDING_OVERHEAD))
    }

    /// Encrypts `plaintext` to a ciphertext of exactly the modulus size.
    ///
    /// # Errors
    /// - `Error::PayloadTooLarge` when `plaintext` exceeds
    ///   [`RsaCodec::max_plaintext_len`]
    /// - `Error::AlgorithmMismatch` for an elliptic-curve key
    pub fn encrypt<R: RngCore + CryptoRng>(
        plaintext: &[u8],
        public_key: &PublicKey,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let pk = rsa_public(public_key)?;
        let max = pk.size().saturating_sub(PKCS1_V15_PADDING_OVERHEAD);
        if plaintext.len() > max {
            return Err(Error::PayloadTooLarge {
                max,
                actual: plaintext.len(),
            });
        }

        let ciphertext = pk
            .encrypt(rng, Pkcs1v15Encrypt, plaintext)
            .map_err(|e| match e {
                rsa::Error::MessageTooLong => Error::PayloadTooLarge {
                    max,
                    actual: plaintext.len(),
                },
                other => Error::encryption("RsaCodec::encrypt", other.to_string()),
            })?;

        tracing::debug!(
            modulus_bytes = pk.size(),
            plaintext_len = plaintext.len(),
            "RSA encryption complete"
        );
        Ok(ciphertext)
    }

    /// Recovers the plaintext bytes. The private-key operation is blinded
    /// with fresh randomness from the operating system.
    ///
    /// # Errors
    /// `Error::DecryptionFailure` when the padding does not verify, which
    /// includes every wrong-key attempt.
    pub fn decrypt(ciphertext: &[u8], private_key: &PrivateKey) -> Result<Vec<u8>> {
        let sk = rsa_private(private_key)?;
        let plaintext = sk
            .decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, ciphertext)
            .map_err(|e| Error::decryption("RsaCodec::decrypt", e.to_string()))?;

        tracing::debug!(
            ciphertext_len = ciphertext.len(),
            plaintext_len = plaintext.len(),
            "RSA decryption complete"
        );
        Ok(plaintext)
    }

    /// [`RsaCodec::encrypt`] of UTF-8 text, returning transport text.
    pub fn encrypt_text<R: RngCore + CryptoRng>(
        plaintext: &str,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> Result<String> {
        let ciphertext = Self::encrypt(plaintext.as_bytes(), public_key, rng)?;
        Ok(transport::encode(&ciphertext))
    }

    /// Inverse of [`RsaCodec::encrypt_text`].
    ///
    /// # Errors
    /// `Error::EncodingError` for malformed transport text, otherwise as
    /// [`RsaCodec::decrypt`]. Recovered bytes that are not UTF-8 are reported
    /// as `Error::DecryptionFailure`.
    pub fn decrypt_text(ciphertext: &str, private_key: &PrivateKey) -> Result<String> {
        // Reject a mismatched key before touching the text
        rsa_private(private_key)?;
        let raw = transport::decode(ciphertext).with_context("RsaCodec::decrypt_text")?;
        let plaintext = Self::decrypt(&raw, private_key)?;
        String::from_utf8(plaintext)
            .map_err(|_| Error::decryption("RsaCodec::decrypt_text", "recovered bytes are not UTF-8"))
    }
}
