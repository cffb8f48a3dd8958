//! Fixed-width binary codecs for 32-bit and 64-bit signed integers, and for
//! UUIDs built from a pair of 64-bit halves.
//!
//! Integers are laid out big-endian in two's-complement, in exactly 4 or 8
//! bytes. The layout is fixed and identical on every platform, which makes
//! the encodings suitable for wire formats, storage records and hash inputs.
//!
//! ```
//! use fixint::{decode_i32_at, encode_i32, DecodeError};
//!
//! assert_eq!(encode_i32(-1), [0xFF, 0xFF, 0xFF, 0xFF]);
//!
//! let frame = [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02];
//! assert_eq!(decode_i32_at(&frame, 4), Ok(2));
//! assert_eq!(
//!     decode_i32_at(&frame, -1),
//!     Err(DecodeError::InvalidOffset { offset: -1 })
//! );
//! ```

pub mod codec;

#[cfg(test)]
mod testing;

pub use crate::codec::{
    decode_i32, decode_i32_at, decode_i64, decode_i64_at, decode_uuid, decode_uuid_at,
    encode_i32, encode_i64, encode_uuid, DecodeError, FieldDecoder, FieldEncoder, FixedWidth,
    Offset, I32_BYTE_LEN, I64_BYTE_LEN, UUID_BYTE_LEN,
};
