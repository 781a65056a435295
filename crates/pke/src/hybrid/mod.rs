// File: crates/pke/src/hybrid/mod.rs
//! Elliptic-curve hybrid encryption
//!
//! Encryption runs four steps, and decryption undoes them in reverse:
//!
//! 1. ECDH between the caller's private key and the peer's public key
//! 2. the first 32 bytes of the agreed x-coordinate become the AES-256 key
//! 3. the plaintext is encrypted under a [`SymmetricMode`]
//! 4. text forms wrap the ciphertext in the transport encoding
//!
//! The default mode is AES-256-ECB with PKCS#7 padding. It has no nonce, so
//! the same message under the same key pair always yields the same ciphertext
//! and repeated 16-byte blocks are visible. [`msgseal_symmetric::Aes256Gcm`]
//! can be selected through [`EccHybridCodec::with_mode`] instead.

use msgseal_api::{Error, Result, ResultExt, SharedSecretKey, SymmetricMode};
use msgseal_kem::{ecdh, PrivateKey, PublicKey};
use msgseal_symmetric::Aes256Ecb;
use msgseal_utils::transport;
use rand::{CryptoRng, RngCore};

/// Hybrid codec keyed by ECDH, generic over its symmetric step
#[derive(Debug, Clone, Default)]
pub struct EccHybridCodec<M: SymmetricMode = Aes256Ecb> {
    mode: M,
}

fn agreed_key(peer_public_key: &PublicKey, own_private_key: &PrivateKey) -> Result<SharedSecretKey> {
    ecdh::shared_key(own_private_key, peer_public_key)
}

fn self_agreement(peer_public_key: &PublicKey, own_private_key: &PrivateKey) -> bool {
    own_private_key.public_key() == *peer_public_key
}

impl EccHybridCodec<Aes256Ecb> {
    /// Codec with the reference AES-256-ECB mode
    pub fn new() -> Self {
        Self { mode: Aes256Ecb }
    }

    /// Symmetric key both parties derive from their halves. Independent of
    /// the symmetric mode.
    ///
    /// # Errors
    /// `Error::KeyAgreementFailure` for non-EC keys or keys on different
    /// curves.
    pub fn derive_key(peer_public_key: &PublicKey, own_private_key: &PrivateKey) -> Result<SharedSecretKey> {
        agreed_key(peer_public_key, own_private_key)
    }

    /// Whether `peer_public_key` is the public half of `own_private_key`.
    pub fn is_self_agreement(peer_public_key: &PublicKey, own_private_key: &PrivateKey) -> bool {
        self_agreement(peer_public_key, own_private_key)
    }
}

impl<M: SymmetricMode> EccHybridCodec<M> {
    pub fn with_mode(mode: M) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    /// Encrypts `plaintext` of any length.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        peer_public_key: &PublicKey,
        own_private_key: &PrivateKey,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let key = agreed_key(peer_public_key, own_private_key)?;
        let ciphertext = self.mode.encrypt(&key, plaintext, rng)?;

        tracing::debug!(
            mode = self.mode.name(),
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            self_agreement = self_agreement(peer_public_key, own_private_key),
            "hybrid encryption complete"
        );
        Ok(ciphertext)
    }

    /// Recovers the plaintext bytes.
    ///
    /// # Errors
    /// `Error::DecryptionFailure` when the symmetric step rejects the input,
    /// the usual outcome of a wrong key pair.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        peer_public_key: &PublicKey,
        own_private_key: &PrivateKey,
    ) -> Result<Vec<u8>> {
        let key = agreed_key(peer_public_key, own_private_key)?;
        let plaintext = self.mode.decrypt(&key, ciphertext)?;

        tracing::debug!(
            mode = self.mode.name(),
            ciphertext_len = ciphertext.len(),
            plaintext_len = plaintext.len(),
            "hybrid decryption complete"
        );
        Ok(plaintext)
    }

    /// [`EccHybridCodec::encrypt`] of UTF-8 text, returning transport text.
    pub fn encrypt_text<R: RngCore + CryptoRng>(
        &self,
        plaintext: &str,
        peer_public_key: &PublicKey,
        own_private_key: &PrivateKey,
        rng: &mut R,
    ) -> Result<String> {
        let ciphertext = self.encrypt(plaintext.as_bytes(), peer_public_key, own_private_key, rng)?;
        Ok(transport::encode(&ciphertext))
    }

    /// Inverse of [`EccHybridCodec::encrypt_text`].
    pub fn decrypt_text(
        &self,
        ciphertext: &str,
        peer_public_key: &PublicKey,
        own_private_key: &PrivateKey,
    ) -> Result<String> {
        let raw = transport::decode(ciphertext).with_context("EccHybridCodec::decrypt_text")?;
        let plaintext = self.decrypt(&raw, peer_public_key, own_private_key)?;
        String::from_utf8(plaintext).map_err(|_| {
            Error::decryption("EccHybridCodec::decrypt_text", "recovered bytes are not UTF-8")
        })
    }
}
