//! This module provides the base primitives for encoding and decoding signed
//! integers to and from fixed-width byte sequences.
//!
//! The layout is the same for every width:
//!
//!   * 32-bit integers are serialized in 4 bytes, 64-bit integers in 8 bytes.
//!   * Bytes are big-endian: the most significant byte comes first.
//!   * Negative values use their two's-complement bit pattern.
//!
//! Bytes are computed from the value with shifts and masks, never by viewing
//! machine memory, so the output does not depend on host endianness.

use log::trace;

use super::error::DecodeError;
use super::offset::Offset;

/// Length of an encoded 32-bit integer in bytes.
pub const I32_BYTE_LEN: usize = 4;

/// Length of an encoded 64-bit integer in bytes.
pub const I64_BYTE_LEN: usize = 8;

/// This trait is implemented by integer types with a fixed-width big-endian
/// encoding.
pub trait FixedWidth: Sized + Copy {
    /// Length of an encoded value in bytes.
    const BYTE_LEN: usize;

    /// The encoded representation, an array of exactly `BYTE_LEN` bytes.
    type Bytes: AsRef<[u8]> + Copy;

    /// Returns the big-endian representation of `self`.
    fn encode(self) -> Self::Bytes;

    /// Attempts to decode a value from `bytes[offset..offset + BYTE_LEN]`.
    fn decode_at(bytes: &[u8], offset: usize) -> Result<Self, DecodeError>;
}

/// Checks that `width` bytes can be read from `bytes` starting at `offset`.
pub(crate) fn check_span(
    bytes: &[u8],
    offset: usize,
    width: usize,
) -> Result<(), DecodeError> {
    match bytes.len().checked_sub(offset) {
        Some(available) if available >= width => Ok(()),
        _ => {
            trace!(
                "rejecting decode of {} bytes at offset {} from buffer of {} bytes",
                width,
                offset,
                bytes.len()
            );
            Err(DecodeError::out_of_range(width, offset, bytes.len()))
        }
    }
}

// Shifting is done on the unsigned counterpart so that no sign bits are
// smeared in, and the final cast reinterprets the bit pattern.
macro_rules! impl_fixed_width {
    ($int:ty, $bits:ty, $len:expr) => {
        impl FixedWidth for $int {
            const BYTE_LEN: usize = $len;

            type Bytes = [u8; $len];

            fn encode(self) -> Self::Bytes {
                let bits = self as $bits;
                let mut bytes = [0u8; $len];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = (bits >> (8 * ($len - 1 - i))) as u8;
                }
                bytes
            }

            fn decode_at(bytes: &[u8], offset: usize) -> Result<Self, DecodeError> {
                check_span(bytes, offset, $len)?;
                let bits = bytes[offset..offset + $len]
                    .iter()
                    .fold(0 as $bits, |acc, &byte| (acc << 8) | <$bits>::from(byte));
                Ok(bits as $int)
            }
        }
    };
}

impl_fixed_width!(i32, u32, I32_BYTE_LEN);
impl_fixed_width!(i64, u64, I64_BYTE_LEN);

/// Returns the 4-byte big-endian representation of `value`.
pub fn encode_i32(value: i32) -> [u8; I32_BYTE_LEN] {
    value.encode()
}

/// Returns the 8-byte big-endian representation of `value`.
pub fn encode_i64(value: i64) -> [u8; I64_BYTE_LEN] {
    value.encode()
}

/// Decodes a 32-bit integer from the first 4 bytes of `bytes`.
///
/// Any bytes past the first 4 are ignored.
pub fn decode_i32(bytes: &[u8]) -> Result<i32, DecodeError> {
    i32::decode_at(bytes, 0)
}

/// Decodes a 32-bit integer from the 4 bytes of `bytes` starting at `offset`.
///
/// ```
/// let frame = [0, 0, 0, 1, 0, 0, 0, 2];
/// assert_eq!(fixint::decode_i32_at(&frame, 4), Ok(2));
/// ```
pub fn decode_i32_at<O: Offset>(bytes: &[u8], offset: O) -> Result<i32, DecodeError> {
    i32::decode_at(bytes, offset.to_index()?)
}

/// Decodes a 64-bit integer from the first 8 bytes of `bytes`.
///
/// Any bytes past the first 8 are ignored.
pub fn decode_i64(bytes: &[u8]) -> Result<i64, DecodeError> {
    i64::decode_at(bytes, 0)
}

/// Decodes a 64-bit integer from the 8 bytes of `bytes` starting at `offset`.
pub fn decode_i64_at<O: Offset>(bytes: &[u8], offset: O) -> Result<i64, DecodeError> {
    i64::decode_at(bytes, offset.to_index()?)
}

/*=======*
 * TESTS *
 *=======*/
