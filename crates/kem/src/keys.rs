//! Asymmetric key types
//!
//! Keys are tagged with their algorithm family and, for elliptic-curve keys,
//! their curve. Public keys can be exported for a peer (`to_bytes` /
//! `to_transport`) and imported again; private keys never leave the value
//! that owns them and are zeroized on drop.

use crate::curve::NamedCurve;
use core::fmt;
use msgseal_api::{Algorithm, Error, Result};
use msgseal_utils::transport;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rsa::pkcs1::{DecodeRsaPublicKey, EncodeRsaPublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key strength: modulus size for RSA, named curve for elliptic-curve keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strength {
    RsaModulus(u32),
    Curve(NamedCurve),
}

impl Strength {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Strength::RsaModulus(_) => Algorithm::Rsa,
            Strength::Curve(_) => Algorithm::Ecc,
        }
    }

    /// Bit length as it would be requested from the factory
    pub fn bits(&self) -> u32 {
        match self {
            Strength::RsaModulus(bits) => *bits,
            Strength::Curve(curve) => curve.bits(),
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::RsaModulus(bits) => write!(f, "RSA-{}", bits),
            Strength::Curve(curve) => write!(f, "ECC {}", curve),
        }
    }
}

/// Public point on one of the supported curves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcPublicKey {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
    P521(p521::PublicKey),
}

impl EcPublicKey {
    pub fn curve(&self) -> NamedCurve {
        match self {
            EcPublicKey::P256(_) => NamedCurve::P256,
            EcPublicKey::P384(_) => NamedCurve::P384,
            EcPublicKey::P521(_) => NamedCurve::P521,
        }
    }

    /// Uncompressed SEC1 encoding (`0x04 || x || y`)
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        match self {
            EcPublicKey::P256(pk) => pk.to_encoded_point(false).as_bytes().to_vec(),
            EcPublicKey::P384(pk) => pk.to_encoded_point(false).as_bytes().to_vec(),
            EcPublicKey::P521(pk) => pk.to_encoded_point(false).as_bytes().to_vec(),
        }
    }

    /// Parses an uncompressed SEC1 point; the curve is inferred from its length.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let curve = NamedCurve::from_public_key_len(bytes.len()).ok_or_else(|| {
            Error::invalid_key(
                "EcPublicKey::from_sec1_bytes",
                format!("{} bytes is not an uncompressed point on a supported curve", bytes.len()),
            )
        })?;

        let invalid_point =
            |_| Error::invalid_key("EcPublicKey::from_sec1_bytes", format!("not a valid {} point", curve));

        match curve {
            NamedCurve::P256 => p256::PublicKey::from_sec1_bytes(bytes)
                .map(EcPublicKey::P256)
                .map_err(invalid_point),
            NamedCurve::P384 => p384::PublicKey::from_sec1_bytes(bytes)
                .map(EcPublicKey::P384)
                .map_err(invalid_point),
            NamedCurve::P521 => p521::PublicKey::from_sec1_bytes(bytes)
                .map(EcPublicKey::P521)
                .map_err(invalid_point),
        }
    }
}

/// Private scalar on one of the supported curves
#[derive(Clone)]
pub enum EcSecretKey {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
}

impl EcSecretKey {
    pub fn curve(&self) -> NamedCurve {
        match self {
            EcSecretKey::P256(_) => NamedCurve::P256,
            EcSecretKey::P384(_) => NamedCurve::P384,
            EcSecretKey::P521(_) => NamedCurve::P521,
        }
    }

    pub fn public_key(&self) -> EcPublicKey {
        match self {
            EcSecretKey::P256(sk) => EcPublicKey::P256(sk.public_key()),
            EcSecretKey::P384(sk) => EcPublicKey::P384(sk.public_key()),
            EcSecretKey::P521(sk) => EcPublicKey::P521(sk.public_key()),
        }
    }
}

impl fmt::Debug for EcSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcSecretKey({}, [REDACTED])", self.curve())
    }
}

/// Opaque public half of an [`AsymmetricKeyPair`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Rsa(RsaPublicKey),
    Ec(EcPublicKey),
}

impl PublicKey {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            PublicKey::Rsa(_) => Algorithm::Rsa,
            PublicKey::Ec(_) => Algorithm::Ecc,
        }
    }

    /// Strength recovered from the key itself
    pub fn strength(&self) -> Strength {
        match self {
            PublicKey::Rsa(pk) => Strength::RsaModulus(pk.n().bits() as u32),
            PublicKey::Ec(pk) => Strength::Curve(pk.curve()),
        }
    }

    pub fn as_rsa(&self) -> Option<&RsaPublicKey> {
        match self {
            PublicKey::Rsa(pk) => Some(pk),
            PublicKey::Ec(_) => None,
        }
    }

    pub fn as_ec(&self) -> Option<&EcPublicKey> {
        match self {
            PublicKey::Ec(pk) => Some(pk),
            PublicKey::Rsa(_) => None,
        }
    }

    /// Exports the key for a peer: PKCS#1 DER for RSA, uncompressed SEC1 for
    /// elliptic-curve keys.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            PublicKey::Rsa(pk) => pk
                .to_pkcs1_der()
                .map(|der| der.as_bytes().to_vec())
                .map_err(|e| Error::invalid_key("PublicKey::to_bytes", e.to_string())),
            PublicKey::Ec(pk) => Ok(pk.to_sec1_bytes()),
        }
    }

    /// Imports a key exported by [`PublicKey::to_bytes`].
    ///
    /// # Errors
    /// `Error::InvalidKey` when the bytes are not a well-formed key of
    /// `algorithm`.
    pub fn from_bytes(algorithm: Algorithm, bytes: &[u8]) -> Result<Self> {
        match algorithm {
            Algorithm::Rsa => RsaPublicKey::from_pkcs1_der(bytes)
                .map(PublicKey::Rsa)
                .map_err(|e| Error::invalid_key("PublicKey::from_bytes", e.to_string())),
            Algorithm::Ecc => EcPublicKey::from_sec1_bytes(bytes).map(PublicKey::Ec),
        }
    }

    /// [`PublicKey::to_bytes`] through the transport encoding
    pub fn to_transport(&self) -> Result<String> {
        Ok(transport::encode(&self.to_bytes()?))
    }

    /// Inverse of [`PublicKey::to_transport`]
    pub fn from_transport(algorithm: Algorithm, text: &str) -> Result<Self> {
        let bytes = transport::decode(text)?;
        Self::from_bytes(algorithm, &bytes)
    }
}

/// Opaque private half of an [`AsymmetricKeyPair`]
#[derive(Clone)]
pub enum PrivateKey {
    Rsa(RsaPrivateKey),
    Ec(EcSecretKey),
}

impl PrivateKey {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            PrivateKey::Rsa(_) => Algorithm::Rsa,
            PrivateKey::Ec(_) => Algorithm::Ecc,
        }
    }

    /// The matching public half
    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::Rsa(sk) => PublicKey::Rsa(sk.to_public_key()),
            PrivateKey::Ec(sk) => PublicKey::Ec(sk.public_key()),
        }
    }

    pub fn as_rsa(&self) -> Option<&RsaPrivateKey> {
        match self {
            PrivateKey::Rsa(sk) => Some(sk),
            PrivateKey::Ec(_) => None,
        }
    }

    pub fn as_ec(&self) -> Option<&EcSecretKey> {
        match self {
            PrivateKey::Ec(sk) => Some(sk),
            PrivateKey::Rsa(_) => None,
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateKey::Rsa(sk) => write!(f, "PrivateKey::Rsa({} bits, [REDACTED])", sk.n().bits()),
            PrivateKey::Ec(sk) => write!(f, "PrivateKey::Ec({:?})", sk),
        }
    }
}

/// Public and private halves generated together at one strength.
///
/// Only [`crate::KeyPairFactory`] creates values of this type, so both halves
/// always belong to the same algorithm and strength.
#[derive(Debug, Clone)]
pub struct AsymmetricKeyPair {
    public: PublicKey,
    private: PrivateKey,
    strength: Strength,
}

impl AsymmetricKeyPair {
    pub(crate) fn new(public: PublicKey, private: PrivateKey, strength: Strength) -> Self {
        Self {
            public,
            private,
            strength,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn algorithm(&self) -> Algorithm {
        self.strength.algorithm()
    }
}
