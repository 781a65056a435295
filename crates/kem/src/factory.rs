//! Key-pair generation

use crate::curve::NamedCurve;
use crate::keys::{AsymmetricKeyPair, EcSecretKey, PrivateKey, Strength};
use msgseal_api::{Algorithm, Error, Result};
use msgseal_params::traditional::ecdh::ECC_SUPPORTED_BITS;
use msgseal_params::traditional::rsa::{
    RSA_MAX_MODULUS_BITS, RSA_MIN_MODULUS_BITS, RSA_PUBLIC_EXPONENT, RSA_SUPPORTED_MODULUS_BITS,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::{BigUint, RsaPrivateKey};

/// Produces [`AsymmetricKeyPair`]s for either algorithm family.
///
/// For RSA the requested bits are the modulus size and must lie within
/// `[RSA_MIN_MODULUS_BITS, RSA_MAX_MODULUS_BITS]`. For ECC they select a
/// curve through [`NamedCurve::from_bits`]; lengths outside the table fall
/// back to P-256 instead of failing.
pub struct KeyPairFactory;

impl KeyPairFactory {
    /// Generates a key pair from the operating system's CSPRNG.
    pub fn generate(algorithm: Algorithm, bits: u32) -> Result<AsymmetricKeyPair> {
        Self::generate_with_rng(algorithm, bits, &mut OsRng)
    }

    /// Generates a key pair from a caller-supplied CSPRNG.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        algorithm: Algorithm,
        bits: u32,
        rng: &mut R,
    ) -> Result<AsymmetricKeyPair> {
        match algorithm {
            Algorithm::Rsa => Self::generate_rsa(bits, rng),
            Algorithm::Ecc => {
                let curve = NamedCurve::lookup(bits).unwrap_or_else(|| {
                    tracing::debug!(
                        requested_bits = bits,
                        fallback = %NamedCurve::DEFAULT,
                        "unrecognized ECC strength, using default curve"
                    );
                    NamedCurve::DEFAULT
                });
                Ok(Self::generate_ec(curve, rng))
            }
        }
    }

    /// Generates an RSA key pair with public exponent [`RSA_PUBLIC_EXPONENT`].
    ///
    /// # Errors
    /// `Error::InvalidStrength` when `bits` is outside the supported range or
    /// prime generation fails for that size.
    pub fn generate_rsa<R: RngCore + CryptoRng>(
        bits: u32,
        rng: &mut R,
    ) -> Result<AsymmetricKeyPair> {
        if bits < RSA_MIN_MODULUS_BITS {
            return Err(Error::invalid_strength(
                Algorithm::Rsa,
                bits,
                "modulus is below the minimum supported size",
            ));
        }
        if bits > RSA_MAX_MODULUS_BITS {
            return Err(Error::invalid_strength(
                Algorithm::Rsa,
                bits,
                "modulus is above the maximum supported size",
            ));
        }

        tracing::debug!(bits, "generating RSA key pair");
        let exponent = BigUint::from(RSA_PUBLIC_EXPONENT);
        let private = RsaPrivateKey::new_with_exp(rng, bits as usize, &exponent).map_err(|e| {
            tracing::debug!(bits, error = %e, "RSA key generation failed");
            Error::invalid_strength(Algorithm::Rsa, bits, "key generation failed for this size")
        })?;

        let private = PrivateKey::Rsa(private);
        let public = private.public_key();
        Ok(AsymmetricKeyPair::new(public, private, Strength::RsaModulus(bits)))
    }

    /// Generates a key pair on `curve`. Cannot fail.
    pub fn generate_ec<R: RngCore + CryptoRng>(curve: NamedCurve, rng: &mut R) -> AsymmetricKeyPair {
        tracing::debug!(
            %curve,
            security_bits = curve.security_bits(),
            "generating EC key pair"
        );
        let secret = match curve {
            NamedCurve::P256 => EcSecretKey::P256(::p256::SecretKey::random(rng)),
            NamedCurve::P384 => EcSecretKey::P384(::p384::SecretKey::random(rng)),
            NamedCurve::P521 => EcSecretKey::P521(::p521::SecretKey::random(rng)),
        };

        let private = PrivateKey::Ec(secret);
        let public = private.public_key();
        AsymmetricKeyPair::new(public, private, Strength::Curve(curve))
    }

    /// Strengths offered for selection. Other values may still be accepted by
    /// [`KeyPairFactory::generate`].
    pub fn supported_strengths(algorithm: Algorithm) -> &'static [u32] {
        match algorithm {
            Algorithm::Rsa => &RSA_SUPPORTED_MODULUS_BITS,
            Algorithm::Ecc => &ECC_SUPPORTED_BITS,
        }
    }
}
