//! Caller-owned conversation state
//!
//! A [`Session`] remembers the most recently generated key pair for each
//! algorithm, an optional peer public key for the hybrid scheme and the last
//! ciphertext it produced. Every cryptographic operation is forwarded to the
//! stateless codecs.

use msgseal_api::{Algorithm, Error};
use msgseal_kem::{AsymmetricKeyPair, KeyPairFactory, PublicKey};
use msgseal_pke::{EccHybridCodec, RsaCodec};
use msgseal_symmetric::ModeKind;
use rand::rngs::OsRng;
use thiserror::Error as ThisError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime options for a [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Symmetric step of the hybrid scheme
    pub symmetric_mode: ModeKind,
    /// Use the session's own ECC public key when no peer key is set
    pub allow_self_agreement: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            symmetric_mode: ModeKind::Ecb,
            allow_self_agreement: true,
        }
    }
}

/// Errors from [`Session`] operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SessionError {
    #[error(transparent)]
    Crypto(#[from] Error),

    #[error("no {0} key pair has been generated in this session")]
    MissingKeyPair(Algorithm),

    #[error("no peer public key is set and self-agreement is disabled")]
    MissingPeerKey,
}

impl SessionError {
    /// The underlying cryptographic error, if any
    pub fn as_crypto(&self) -> Option<&Error> {
        match self {
            SessionError::Crypto(e) => Some(e),
            _ => None,
        }
    }
}

/// Key pairs and settings for one conversation
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    rsa: Option<AsymmetricKeyPair>,
    ecc: Option<AsymmetricKeyPair>,
    peer: Option<PublicKey>,
    last_ciphertext: Option<String>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replaces the key pair for `algorithm` with a fresh one.
    ///
    /// Ciphertext produced under the previous pair can no longer be
    /// decrypted here, so the remembered last ciphertext is dropped.
    pub fn generate(&mut self, algorithm: Algorithm, bits: u32) -> Result<&AsymmetricKeyPair, SessionError> {
        let pair = KeyPairFactory::generate(algorithm, bits)?;
        tracing::debug!(%algorithm, strength = %pair.strength(), "session key pair replaced");

        self.last_ciphertext = None;
        let slot = match algorithm {
            Algorithm::Rsa => &mut self.rsa,
            Algorithm::Ecc => &mut self.ecc,
        };
        let pair: &AsymmetricKeyPair = slot.insert(pair);
        Ok(pair)
    }

    pub fn key_pair(&self, algorithm: Algorithm) -> Option<&AsymmetricKeyPair> {
        match algorithm {
            Algorithm::Rsa => self.rsa.as_ref(),
            Algorithm::Ecc => self.ecc.as_ref(),
        }
    }

    /// Sets the public key of the other party for the hybrid scheme.
    ///
    /// # Errors
    /// `Error::AlgorithmMismatch` for an RSA key.
    pub fn set_peer_public_key(&mut self, peer: PublicKey) -> Result<(), SessionError> {
        if peer.algorithm() != Algorithm::Ecc {
            return Err(Error::AlgorithmMismatch {
                expected: Algorithm::Ecc,
                actual: peer.algorithm(),
            }
            .into());
        }
        self.peer = Some(peer);
        Ok(())
    }

    pub fn clear_peer_public_key(&mut self) {
        self.peer = None;
    }

    pub fn peer_public_key(&self) -> Option<&PublicKey> {
        self.peer.as_ref()
    }

    /// Transport text of the last successful [`Session::encrypt`]
    pub fn last_ciphertext(&self) -> Option<&str> {
        self.last_ciphertext.as_deref()
    }

    fn pair(&self, algorithm: Algorithm) -> Result<&AsymmetricKeyPair, SessionError> {
        self.key_pair(algorithm)
            .ok_or(SessionError::MissingKeyPair(algorithm))
    }

    fn ecc_peer<'a>(&'a self, own: &'a AsymmetricKeyPair) -> Result<&'a PublicKey, SessionError> {
        match &self.peer {
            Some(peer) => Ok(peer),
            None if self.config.allow_self_agreement => Ok(own.public_key()),
            None => Err(SessionError::MissingPeerKey),
        }
    }

    /// Encrypts `plaintext` with the session's key pair for `algorithm`.
    pub fn encrypt(&mut self, algorithm: Algorithm, plaintext: &str) -> Result<String, SessionError> {
        let pair = self.pair(algorithm)?;
        let ciphertext = match algorithm {
            Algorithm::Rsa => RsaCodec::encrypt_text(plaintext, pair.public_key(), &mut OsRng)?,
            Algorithm::Ecc => {
                let peer = self.ecc_peer(pair)?;
                EccHybridCodec::with_mode(self.config.symmetric_mode).encrypt_text(
                    plaintext,
                    peer,
                    pair.private_key(),
                    &mut OsRng,
                )?
            }
        };

        self.last_ciphertext = Some(ciphertext.clone());
        Ok(ciphertext)
    }

    /// Decrypts transport text; surrounding whitespace from pasting is
    /// ignored.
    pub fn decrypt(&self, algorithm: Algorithm, ciphertext: &str) -> Result<String, SessionError> {
        let pair = self.pair(algorithm)?;
        let ciphertext = ciphertext.trim();
        let plaintext = match algorithm {
            Algorithm::Rsa => RsaCodec::decrypt_text(ciphertext, pair.private_key())?,
            Algorithm::Ecc => {
                let peer = self.ecc_peer(pair)?;
                EccHybridCodec::with_mode(self.config.symmetric_mode).decrypt_text(
                    ciphertext,
                    peer,
                    pair.private_key(),
                )?
            }
        };
        Ok(plaintext)
    }
}
