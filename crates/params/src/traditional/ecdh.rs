//! Constants for Elliptic Curve Diffie-Hellman

/// Requested bit length selecting NIST P-256 (secp256r1)
pub const ECC_P256_BITS: u32 = 256;

/// Requested bit length selecting NIST P-384 (secp384r1)
pub const ECC_P384_BITS: u32 = 384;

/// Requested bit length selecting NIST P-521 (secp521r1)
pub const ECC_P521_BITS: u32 = 521;

/// Curve bit lengths offered to users
pub const ECC_SUPPORTED_BITS: [u32; 3] = [ECC_P256_BITS, ECC_P384_BITS, ECC_P521_BITS];

/// Size of shared secret for ECDH using P-256 in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 32;

/// Size of shared secret for ECDH using P-384 in bytes
pub const ECDH_P384_SHARED_SECRET_SIZE: usize = 48;

/// Size of shared secret for ECDH using P-521 in bytes
pub const ECDH_P521_SHARED_SECRET_SIZE: usize = 66;

/// Size of public key for ECDH using P-256 in bytes (uncompressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 65;

/// Size of public key for ECDH using P-384 in bytes (uncompressed format)
pub const ECDH_P384_PUBLIC_KEY_SIZE: usize = 97;

/// Size of public key for ECDH using P-521 in bytes (uncompressed format)
pub const ECDH_P521_PUBLIC_KEY_SIZE: usize = 133;
