// File: crates/kem/src/ecdh/mod.rs
//! Elliptic-curve Diffie-Hellman over the NIST prime curves
//!
//! Both parties combine their own private key with the other's public key and
//! obtain the same curve point; its x-coordinate is the raw shared secret.
//! The symmetric key is the leading 32 bytes of that coordinate, used without
//! any further key-derivation function so ciphertexts stay interoperable with
//! existing peers.
//!
//! Raw secrets and derived keys are zeroized when dropped and are never
//! logged.

use crate::curve::NamedCurve;
use crate::keys::{EcPublicKey, EcSecretKey, PrivateKey, PublicKey};
use msgseal_api::{Error, Result, SharedSecretKey, SHARED_SECRET_KEY_SIZE};
use zeroize::Zeroizing;

/// Unprocessed x-coordinate of the agreed point (32, 48 or 66 bytes)
pub struct RawSharedSecret {
    curve: NamedCurve,
    bytes: Zeroizing<Vec<u8>>,
}

impl RawSharedSecret {
    pub fn curve(&self) -> NamedCurve {
        self.curve
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl core::fmt::Debug for RawSharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RawSharedSecret({}, [REDACTED])", self.curve)
    }
}

fn curve_point(sk: &EcSecretKey, pk: &EcPublicKey) -> Result<RawSharedSecret> {
    let bytes = match (sk, pk) {
        (EcSecretKey::P256(sk), EcPublicKey::P256(pk)) => {
            let shared = ::p256::ecdh::diffie_hellman(sk.to_nonzero_scalar(), pk.as_affine());
            shared.raw_secret_bytes().to_vec()
        }
        (EcSecretKey::P384(sk), EcPublicKey::P384(pk)) => {
            let shared = ::p384::ecdh::diffie_hellman(sk.to_nonzero_scalar(), pk.as_affine());
            shared.raw_secret_bytes().to_vec()
        }
        (EcSecretKey::P521(sk), EcPublicKey::P521(pk)) => {
            let shared = ::p521::ecdh::diffie_hellman(sk.to_nonzero_scalar(), pk.as_affine());
            shared.raw_secret_bytes().to_vec()
        }
        (sk, pk) => {
            return Err(Error::key_agreement(
                "ecdh::agree",
                format!("private key is on {} but peer key is on {}", sk.curve(), pk.curve()),
            ))
        }
    };

    Ok(RawSharedSecret {
        curve: sk.curve(),
        bytes: Zeroizing::new(bytes),
    })
}

/// Performs the agreement between `own` and `peer`.
///
/// # Errors
/// `Error::KeyAgreementFailure` when either key is not an elliptic-curve key
/// or the two keys are on different curves.
pub fn agree(own: &PrivateKey, peer: &PublicKey) -> Result<RawSharedSecret> {
    let sk = own.as_ec().ok_or_else(|| {
        Error::key_agreement("ecdh::agree", "own private key is not an elliptic-curve key")
    })?;
    let pk = peer.as_ec().ok_or_else(|| {
        Error::key_agreement("ecdh::agree", "peer public key is not an elliptic-curve key")
    })?;

    let raw = curve_point(sk, pk)?;
    tracing::debug!(curve = %raw.curve(), raw_len = raw.len(), "ecdh agreement complete");
    Ok(raw)
}

/// Takes the first [`SHARED_SECRET_KEY_SIZE`] bytes of the raw secret.
pub fn derive_shared_key(raw: &RawSharedSecret) -> Result<SharedSecretKey> {
    // Every supported curve yields at least 32 bytes
    let head = raw.as_bytes().get(..SHARED_SECRET_KEY_SIZE).ok_or_else(|| {
        Error::key_agreement(
            "ecdh::derive_shared_key",
            format!("raw secret of {} bytes is shorter than the key size", raw.len()),
        )
    })?;

    Ok(SharedSecretKey::new(head.try_into()?))
}

/// [`agree`] followed by [`derive_shared_key`]
pub fn shared_key(own: &PrivateKey, peer: &PublicKey) -> Result<SharedSecretKey> {
    let raw = agree(own, peer)?;
    derive_shared_key(&raw)
}
