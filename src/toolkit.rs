//! Stateless boundary functions
//!
//! Each call draws from the operating system's CSPRNG and keeps nothing once
//! it returns.

use msgseal_api::{Algorithm, Result};
use msgseal_kem::{AsymmetricKeyPair, KeyPairFactory, PrivateKey, PublicKey};
use msgseal_pke::{EccHybridCodec, RsaCodec};
use rand::rngs::OsRng;

/// Generates a key pair. See [`KeyPairFactory::generate`].
pub fn generate_key_pair(algorithm: Algorithm, strength_bits: u32) -> Result<AsymmetricKeyPair> {
    KeyPairFactory::generate(algorithm, strength_bits)
}

/// Encrypts `plaintext` under an RSA public key, returning transport text.
pub fn rsa_encrypt(plaintext: &str, public_key: &PublicKey) -> Result<String> {
    RsaCodec::encrypt_text(plaintext, public_key, &mut OsRng)
}

/// Decrypts transport text produced by [`rsa_encrypt`].
pub fn rsa_decrypt(ciphertext: &str, private_key: &PrivateKey) -> Result<String> {
    RsaCodec::decrypt_text(ciphertext, private_key)
}

/// Encrypts `plaintext` with the reference hybrid scheme (AES-256-ECB).
pub fn ecc_encrypt(plaintext: &str, peer_public_key: &PublicKey, own_private_key: &PrivateKey) -> Result<String> {
    EccHybridCodec::new().encrypt_text(plaintext, peer_public_key, own_private_key, &mut OsRng)
}

/// Decrypts transport text produced by [`ecc_encrypt`].
pub fn ecc_decrypt(ciphertext: &str, peer_public_key: &PublicKey, own_private_key: &PrivateKey) -> Result<String> {
    EccHybridCodec::new().decrypt_text(ciphertext, peer_public_key, own_private_key)
}
