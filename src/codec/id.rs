//! Fixed-width encoding of UUIDs.
//!
//! A UUID is serialized in 16 bytes as two consecutive 64-bit integers: the
//! most significant half first, then the least significant half, each in the
//! big-endian layout of `i64`. This coincides with the RFC 4122 byte order.

use uuid::Uuid;

use super::error::DecodeError;
use super::int::{check_span, FixedWidth, I64_BYTE_LEN};
use super::offset::Offset;

/// Length of an encoded UUID in bytes.
pub const UUID_BYTE_LEN: usize = 2 * I64_BYTE_LEN;

impl FixedWidth for Uuid {
    const BYTE_LEN: usize = UUID_BYTE_LEN;

    type Bytes = [u8; UUID_BYTE_LEN];

    fn encode(self) -> Self::Bytes {
        let (high, low) = self.as_u64_pair();
        let mut bytes = [0u8; UUID_BYTE_LEN];
        bytes[..I64_BYTE_LEN].copy_from_slice(&(high as i64).encode());
        bytes[I64_BYTE_LEN..].copy_from_slice(&(low as i64).encode());
        bytes
    }

    fn decode_at(bytes: &[u8], offset: usize) -> Result<Self, DecodeError> {
        // Checked as a whole so a short buffer reports the full UUID width.
        check_span(bytes, offset, UUID_BYTE_LEN)?;
        let high = i64::decode_at(bytes, offset)?;
        let low = i64::decode_at(bytes, offset + I64_BYTE_LEN)?;
        Ok(Uuid::from_u64_pair(high as u64, low as u64))
    }
}

/// Returns the 16-byte representation of `value`.
pub fn encode_uuid(value: Uuid) -> [u8; UUID_BYTE_LEN] {
    value.encode()
}

/// Decodes a UUID from the first 16 bytes of `bytes`.
pub fn decode_uuid(bytes: &[u8]) -> Result<Uuid, DecodeError> {
    Uuid::decode_at(bytes, 0)
}

/// Decodes a UUID from the 16 bytes of `bytes` starting at `offset`.
pub fn decode_uuid_at<O: Offset>(bytes: &[u8], offset: O) -> Result<Uuid, DecodeError> {
    Uuid::decode_at(bytes, offset.to_index()?)
}

/*=======*
 * TESTS *
 *=======*/
