//! Sequential access to fixed-width fields in a larger buffer, such as
//! the header of a protocol frame or a storage record.

use bytes::BytesMut;
use log::debug;
use uuid::Uuid;

use super::error::DecodeError;
use super::int::{check_span, FixedWidth};

/// A type for decoding consecutive fixed-width fields from a byte buffer.
pub struct FieldDecoder<'a> {
    // The buffer we are decoding from.
    //
    // Invariant: `position <= buffer.len()`.
    buffer: &'a [u8],

    // Our current position within `buffer`. Kept explicitly rather than by
    // re-slicing `buffer` so that errors can report where decoding failed.
    //
    // Invariant: `position <= buffer.len()`.
    position: usize,
}

impl<'a> FieldDecoder<'a> {
    /// Wraps the given byte buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// The current position of this decoder in the input buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining to decode.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Returns whether the underlying buffer has remaining bytes to decode.
    ///
    /// Shorthand for `remaining() > 0`.
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Returns a read-only view of the remaining bytes to decode.
    ///
    /// The returned slice is of size `remaining()`.
    pub fn bytes(&self) -> &'a [u8] {
        &self.buffer[self.position..]
    }

    /// Attempts to decode a value of the given type at the current position.
    ///
    /// Advances past the value on success. On failure the position is left
    /// untouched.
    ///
    /// ```
    /// let frame = [0, 0, 0, 7, 0, 0, 0, 0, 0, 0, 0, 9];
    /// let mut decoder = fixint::FieldDecoder::new(&frame);
    /// let tag: i32 = decoder.decode()?;
    /// let id: i64 = decoder.decode()?;
    /// assert_eq!((tag, id), (7, 9));
    /// # Ok::<(), fixint::DecodeError>(())
    /// ```
    pub fn decode<T: FixedWidth>(&mut self) -> Result<T, DecodeError> {
        let value = T::decode_at(self.buffer, self.position)?;
        self.position += T::BYTE_LEN;
        Ok(value)
    }

    /// Attempts to decode a 32-bit integer.
    pub fn decode_i32(&mut self) -> Result<i32, DecodeError> {
        self.decode()
    }

    /// Attempts to decode a 64-bit integer.
    pub fn decode_i64(&mut self) -> Result<i64, DecodeError> {
        self.decode()
    }

    /// Attempts to decode a UUID.
    pub fn decode_uuid(&mut self) -> Result<Uuid, DecodeError> {
        self.decode()
    }

    /// Attempts to advance over the next `n` bytes without decoding them.
    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        check_span(self.buffer, self.position, n)?;
        self.position += n;
        Ok(())
    }

    /// Consumes this decoder and returns the number of bytes left undecoded.
    pub fn finish(self) -> usize {
        let remaining = self.remaining();
        if remaining > 0 {
            debug!(
                "{} trailing bytes left undecoded at position {}",
                remaining, self.position
            );
        }
        remaining
    }
}

/// A type for appending fixed-width fields to a byte buffer.
pub struct FieldEncoder<'a> {
    /// The buffer to which the encoder appends encoded bytes.
    buffer: &'a mut BytesMut,

    /// Length of `buffer` when this encoder was created.
    start: usize,
}

impl<'a> FieldEncoder<'a> {
    /// Wraps the given buffer for encoding fields into.
    ///
    /// Encoded bytes are appended. The buffer is not pre-cleared.
    pub fn new(buffer: &'a mut BytesMut) -> Self {
        let start = buffer.len();
        FieldEncoder { buffer, start }
    }

    /// Encodes the given value into the underlying buffer.
    pub fn encode<T: FixedWidth>(&mut self, value: T) {
        self.buffer.extend_from_slice(value.encode().as_ref());
    }

    /// Encodes the given 32-bit integer into the underlying buffer.
    pub fn encode_i32(&mut self, value: i32) {
        self.encode(value)
    }

    /// Encodes the given 64-bit integer into the underlying buffer.
    pub fn encode_i64(&mut self, value: i64) {
        self.encode(value)
    }

    /// Encodes the given UUID into the underlying buffer.
    pub fn encode_uuid(&mut self, value: Uuid) {
        self.encode(value)
    }

    /// Returns the number of bytes appended since this encoder was created.
    pub fn len_written(&self) -> usize {
        self.buffer.len() - self.start
    }
}

/*=======*
 * TESTS *
 *=======*/
