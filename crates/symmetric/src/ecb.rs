//! AES-256 in electronic-codebook mode with PKCS#7 padding
//!
//! Each 16-byte block is encrypted independently under the same key, so equal
//! plaintext blocks produce equal ciphertext blocks. There is no nonce and no
//! authentication; a wrong key is only detected when the padding of the last
//! block happens not to verify.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use msgseal_api::{Error, Result, SharedSecretKey, SymmetricMode};
use msgseal_params::utils::symmetric::AES_BLOCK_SIZE;
use rand::{CryptoRng, RngCore};

type EcbEncryptor = ecb::Encryptor<aes::Aes256>;
type EcbDecryptor = ecb::Decryptor<aes::Aes256>;

/// AES-256-ECB with PKCS#7 padding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aes256Ecb;

impl SymmetricMode for Aes256Ecb {
    fn name(&self) -> &'static str {
        "AES-256-ECB-PKCS7"
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        key: &SharedSecretKey,
        plaintext: &[u8],
        _rng: &mut R,
    ) -> Result<Vec<u8>> {
        let encryptor = EcbEncryptor::new(key.as_bytes().into());
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(&self, key: &SharedSecretKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(Error::decryption(
                "AES-256-ECB",
                format!(
                    "ciphertext length {} is not a positive multiple of {}",
                    ciphertext.len(),
                    AES_BLOCK_SIZE
                ),
            ));
        }

        let decryptor = EcbDecryptor::new(key.as_bytes().into());
        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::decryption("AES-256-ECB", "invalid PKCS#7 padding"))
    }
}
