//! Error types for OPAX encoding and decoding.

use thiserror::Error;

/// Result type for OPAX encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;

/// Errors that can occur while encoding or decoding OPAX values.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Tried to read past the end of the input buffer.
    #[error("buffer underflow: needed {needed} bytes, have {have}")]
    BufferUnderflow { needed: usize, have: usize },

    /// A length does not fit the signed 32-bit count prefix.
    #[error("length {length} cannot be encoded as a 32-bit count")]
    LengthOverflow { length: usize },

    /// An array exceeds the configured element limit.
    #[error("array of {length} elements exceeds limit {limit}")]
    ArrayTooLong { length: usize, limit: usize },

    /// A string exceeds the configured byte limit.
    #[error("string of {length} bytes exceeds limit {limit}")]
    StringTooLong { length: usize, limit: usize },

    /// A byte string exceeds the configured byte limit.
    #[error("byte string of {length} bytes exceeds limit {limit}")]
    ByteStringTooLong { length: usize, limit: usize },

    /// Extension bodies are nested deeper than the configured limit.
    #[error("extension nesting exceeds depth limit {limit}")]
    DepthLimitExceeded { limit: u32 },

    /// A decoded string is not valid UTF-8.
    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// No encodeable type is registered under this binary encoding id.
    #[error("no encodeable type registered for binary encoding id {0}")]
    UnknownTypeId(u32),

    /// An extension body declared one length but its decoder consumed another.
    #[error("extension body length mismatch: declared {declared} bytes, consumed {consumed}")]
    BodyLengthMismatch { declared: usize, consumed: usize },

    /// Two encodeable types claim the same binary encoding id.
    #[error("encodeable type with binary encoding id {0} registered twice")]
    DuplicateTypeId(u32),
}
