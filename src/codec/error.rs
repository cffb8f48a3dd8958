//! Errors reported when decoding integers from byte buffers.
//!
//! Encoding is total and has no error type.

use std::io;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid offset {offset}: offsets must not be negative")]
    InvalidOffset {
        /// The offset supplied by the caller. Always negative.
        offset: i64,
    },
    #[error("at offset {offset}: not enough bytes to decode: expected {width}, found {available}")]
    OutOfRange {
        /// The number of bytes the decoder needed.
        ///
        /// Invariant: `available < width`.
        width: usize,

        /// The offset at which decoding was attempted.
        ///
        /// May lie past the end of the buffer.
        offset: usize,

        /// The number of bytes present in the buffer from `offset` onwards.
        ///
        /// Invariant: `available < width`.
        available: usize,
    },
}

impl DecodeError {
    /// Builds an `OutOfRange` error for a buffer of length `len`.
    pub(crate) fn out_of_range(width: usize, offset: usize, len: usize) -> Self {
        DecodeError::OutOfRange {
            width,
            offset,
            available: len.saturating_sub(offset),
        }
    }
}

impl From<DecodeError> for io::Error {
    fn from(error: DecodeError) -> Self {
        let kind = match error {
            DecodeError::InvalidOffset { .. } => io::ErrorKind::InvalidInput,
            DecodeError::OutOfRange { .. } => io::ErrorKind::UnexpectedEof,
        };
        io::Error::new(kind, error)
    }
}
