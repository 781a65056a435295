//! Constants for RSA algorithm

/// RSA with 1024-bit modulus
pub const RSA_MODULUS_1024: u32 = 1024;

/// RSA with 2048-bit modulus
pub const RSA_MODULUS_2048: u32 = 2048;

/// RSA with 4096-bit modulus
pub const RSA_MODULUS_4096: u32 = 4096;

/// Modulus sizes offered to users
pub const RSA_SUPPORTED_MODULUS_BITS: [u32; 3] = [RSA_MODULUS_1024, RSA_MODULUS_2048, RSA_MODULUS_4096];

/// Smallest modulus the key factory accepts
pub const RSA_MIN_MODULUS_BITS: u32 = 512;

/// Largest modulus the key factory accepts; larger public keys are rejected
/// by the encryption primitive.
pub const RSA_MAX_MODULUS_BITS: u32 = 4096;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Fixed overhead of PKCS#1 v1.5 encryption padding in bytes
pub const PKCS1_V15_PADDING_OVERHEAD: usize = 11;

/// Byte length for RSA-1024 key
pub const RSA_1024_BYTE_LENGTH: usize = RSA_MODULUS_1024 as usize / 8;

/// Largest PKCS#1 v1.5 plaintext for RSA-1024 (117 bytes)
pub const RSA_1024_MAX_PLAINTEXT: usize = RSA_1024_BYTE_LENGTH - PKCS1_V15_PADDING_OVERHEAD;
