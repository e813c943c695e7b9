//! Error types for MBR decoding

use std::{error, fmt, io};

/// Result type for MBR operations
pub type Result<T> = core::result::Result<T, MbrError>;

/// Errors that can occur while loading or decoding a boot sector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbrError {
    /// The image could not be opened or read
    Io(io::ErrorKind),

    /// Fewer than 512 bytes were available
    TruncatedInput {
        /// Number of bytes actually supplied
        len: usize,
    },

    /// Bytes 510..512 are not the 0xAA55 boot signature
    InvalidSignature {
        /// Little-endian value found at offset 510
        found: u16,
    },
}

impl fmt::Display for MbrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(kind) => write!(f, "Cannot read image: {}", io::Error::from(*kind)),
            Self::TruncatedInput { len } => {
                write!(f, "Image too short: {} of 512 bytes available", len)
            }
            Self::InvalidSignature { found } => write!(
                f,
                "Invalid signature 0x{:04X}, not an MBR (expected 0xAA55)",
                found
            ),
        }
    }
}

impl error::Error for MbrError {}

impl From<io::Error> for MbrError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}
