//! Bit-length to named-curve selection

use core::fmt;
use msgseal_params::traditional::ecdh::{
    ECC_P256_BITS, ECC_P384_BITS, ECC_P521_BITS, ECDH_P256_PUBLIC_KEY_SIZE,
    ECDH_P256_SHARED_SECRET_SIZE, ECDH_P384_PUBLIC_KEY_SIZE, ECDH_P384_SHARED_SECRET_SIZE,
    ECDH_P521_PUBLIC_KEY_SIZE, ECDH_P521_SHARED_SECRET_SIZE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// NIST prime curves available for key agreement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NamedCurve {
    /// secp256r1, 128-bit security
    P256,
    /// secp384r1, 192-bit security
    P384,
    /// secp521r1, 256-bit security
    P521,
}

impl NamedCurve {
    /// Curve used when a requested bit length is not in [`NamedCurve::TABLE`].
    pub const DEFAULT: NamedCurve = NamedCurve::P256;

    /// Requested bit length to curve.
    pub const TABLE: [(u32, NamedCurve); 3] = [
        (ECC_P256_BITS, NamedCurve::P256),
        (ECC_P384_BITS, NamedCurve::P384),
        (ECC_P521_BITS, NamedCurve::P521),
    ];

    /// Strict table lookup; `None` for bit lengths not in the table.
    pub fn lookup(bits: u32) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(table_bits, _)| *table_bits == bits)
            .map(|(_, curve)| *curve)
    }

    /// Table lookup falling back to [`NamedCurve::DEFAULT`].
    ///
    /// Unrecognized lengths never fail. Callers that need to reject them use
    /// [`NamedCurve::lookup`] instead.
    pub fn from_bits(bits: u32) -> Self {
        Self::lookup(bits).unwrap_or(Self::DEFAULT)
    }

    /// Curve whose uncompressed SEC1 public key has this length
    pub fn from_public_key_len(len: usize) -> Option<Self> {
        match len {
            ECDH_P256_PUBLIC_KEY_SIZE => Some(NamedCurve::P256),
            ECDH_P384_PUBLIC_KEY_SIZE => Some(NamedCurve::P384),
            ECDH_P521_PUBLIC_KEY_SIZE => Some(NamedCurve::P521),
            _ => None,
        }
    }

    /// Field size in bits, which is also the bit length selecting this curve
    pub fn bits(self) -> u32 {
        match self {
            NamedCurve::P256 => ECC_P256_BITS,
            NamedCurve::P384 => ECC_P384_BITS,
            NamedCurve::P521 => ECC_P521_BITS,
        }
    }

    /// Approximate symmetric-equivalent security level in bits
    pub fn security_bits(self) -> u32 {
        match self {
            NamedCurve::P256 => 128,
            NamedCurve::P384 => 192,
            NamedCurve::P521 => 256,
        }
    }

    /// Length of the raw ECDH output (the x-coordinate) in bytes
    pub fn shared_secret_size(self) -> usize {
        match self {
            NamedCurve::P256 => ECDH_P256_SHARED_SECRET_SIZE,
            NamedCurve::P384 => ECDH_P384_SHARED_SECRET_SIZE,
            NamedCurve::P521 => ECDH_P521_SHARED_SECRET_SIZE,
        }
    }

    /// Length of an uncompressed SEC1 public key in bytes
    pub fn public_key_size(self) -> usize {
        match self {
            NamedCurve::P256 => ECDH_P256_PUBLIC_KEY_SIZE,
            NamedCurve::P384 => ECDH_P384_PUBLIC_KEY_SIZE,
            NamedCurve::P521 => ECDH_P521_PUBLIC_KEY_SIZE,
        }
    }

    /// NIST name, e.g. `"P-256"`
    pub fn name(self) -> &'static str {
        match self {
            NamedCurve::P256 => "P-256",
            NamedCurve::P384 => "P-384",
            NamedCurve::P521 => "P-521",
        }
    }

    /// SEC 2 name, e.g. `"secp256r1"`
    pub fn sec_name(self) -> &'static str {
        match self {
            NamedCurve::P256 => "secp256r1",
            NamedCurve::P384 => "secp384r1",
            NamedCurve::P521 => "secp521r1",
        }
    }
}

impl Default for NamedCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
