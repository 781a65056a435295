//! Error handling for the messaging-encryption core

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<core::array::TryFromSliceError> for Error {
    fn from(e: core::array::TryFromSliceError) -> Self {
        Self::InvalidKey {
            context: "array conversion",
            message: e.to_string(),
        }
    }
}
