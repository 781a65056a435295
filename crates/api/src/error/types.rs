//! Error type definitions for msgseal operations

use crate::types::Algorithm;
use thiserror::Error as ThisError;

/// Primary error type for key generation, encryption, decryption and encoding.
///
/// Every failure is surfaced to the caller as a distinct variant so the
/// calling application can tell "message too long" apart from "wrong key".
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Bad key-generation parameter
    #[error("invalid {algorithm} strength of {bits} bits: {reason}")]
    InvalidStrength {
        algorithm: Algorithm,
        bits: u32,
        reason: &'static str,
    },

    /// RSA plaintext exceeds what the modulus can carry after padding
    #[error("payload too large: {actual} bytes exceeds the {max}-byte limit of this key")]
    PayloadTooLarge { max: usize, actual: usize },

    /// Padding or integrity check failed, including wrong-key attempts
    #[error("decryption failed in {context}: {message}")]
    DecryptionFailure {
        context: &'static str,
        message: String,
    },

    /// Incompatible or malformed key halves handed to the agreement step
    #[error("key agreement failed in {context}: {message}")]
    KeyAgreementFailure {
        context: &'static str,
        message: String,
    },

    /// Malformed transport text
    #[error("encoding error in {context}: {message}")]
    EncodingError {
        context: &'static str,
        message: String,
    },

    /// A key of one family was given to the codec of another
    #[error("algorithm mismatch: expected a {expected} key, got {actual}")]
    AlgorithmMismatch {
        expected: Algorithm,
        actual: Algorithm,
    },

    /// Key bytes could not be parsed
    #[error("invalid key in {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Primitive failure during encryption that is not a size violation
    #[error("encryption failed in {context}: {message}")]
    EncryptionFailure {
        context: &'static str,
        message: String,
    },
}

/// Fieldless tag of an [`Error`], convenient for matching at UI boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidStrength,
    PayloadTooLarge,
    DecryptionFailure,
    KeyAgreementFailure,
    EncodingError,
    AlgorithmMismatch,
    InvalidKey,
    EncryptionFailure,
}

/// Result type for msgseal operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub fn invalid_strength(algorithm: Algorithm, bits: u32, reason: &'static str) -> Self {
        Self::InvalidStrength {
            algorithm,
            bits,
            reason,
        }
    }

    pub fn decryption(context: &'static str, message: impl Into<String>) -> Self {
        Self::DecryptionFailure {
            context,
            message: message.into(),
        }
    }

    pub fn key_agreement(context: &'static str, message: impl Into<String>) -> Self {
        Self::KeyAgreementFailure {
            context,
            message: message.into(),
        }
    }

    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::EncodingError {
            context,
            message: message.into(),
        }
    }

    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    pub fn encryption(context: &'static str, message: impl Into<String>) -> Self {
        Self::EncryptionFailure {
            context,
            message: message.into(),
        }
    }

    /// The taxonomy tag of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStrength { .. } => ErrorKind::InvalidStrength,
            Self::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            Self::DecryptionFailure { .. } => ErrorKind::DecryptionFailure,
            Self::KeyAgreementFailure { .. } => ErrorKind::KeyAgreementFailure,
            Self::EncodingError { .. } => ErrorKind::EncodingError,
            Self::AlgorithmMismatch { .. } => ErrorKind::AlgorithmMismatch,
            Self::InvalidKey { .. } => ErrorKind::InvalidKey,
            Self::EncryptionFailure { .. } => ErrorKind::EncryptionFailure,
        }
    }

    /// The operation context recorded on the error, if the variant carries one
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::DecryptionFailure { context, .. }
            | Self::KeyAgreementFailure { context, .. }
            | Self::EncodingError { context, .. }
            | Self::InvalidKey { context, .. }
            | Self::EncryptionFailure { context, .. } => Some(context),
            Self::InvalidStrength { .. }
            | Self::PayloadTooLarge { .. }
            | Self::AlgorithmMismatch { .. } => None,
        }
    }

    /// Replace the context of an existing error, keeping its kind and detail
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DecryptionFailure { message, .. } => Self::DecryptionFailure { context, message },
            Self::KeyAgreementFailure { message, .. } => {
                Self::KeyAgreementFailure { context, message }
            }
            Self::EncodingError { message, .. } => Self::EncodingError { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::EncryptionFailure { message, .. } => Self::EncryptionFailure { context, message },
            other => other,
        }
    }

    /// Replace the detail message of an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::DecryptionFailure { context, .. } => Self::DecryptionFailure { context, message },
            Self::KeyAgreementFailure { context, .. } => {
                Self::KeyAgreementFailure { context, message }
            }
            Self::EncodingError { context, .. } => Self::EncodingError { context, message },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::EncryptionFailure { context, .. } => Self::EncryptionFailure { context, message },
            other => other,
        }
    }
}
