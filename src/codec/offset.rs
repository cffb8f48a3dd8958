//! Conversion of caller-supplied start offsets into buffer indices.

use std::convert::TryFrom;

use super::error::DecodeError;

/// A start offset into a byte buffer.
///
/// Unsigned offsets always convert. Signed offsets fail with
/// `DecodeError::InvalidOffset` when negative. Offsets too large to be a
/// `usize` saturate, so the bounds check that follows reports them as
/// `OutOfRange` instead of panicking.
pub trait Offset: Copy {
    /// Returns the buffer index this offset designates.
    fn to_index(self) -> Result<usize, DecodeError>;
}

impl Offset for usize {
    fn to_index(self) -> Result<usize, DecodeError> {
        Ok(self)
    }
}

macro_rules! impl_unsigned_offset {
    ($($int:ty),*) => {
        $(
            impl Offset for $int {
                fn to_index(self) -> Result<usize, DecodeError> {
                    Ok(usize::try_from(self).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

impl_unsigned_offset!(u16, u32, u64);

macro_rules! impl_signed_offset {
    ($($int:ty),*) => {
        $(
            impl Offset for $int {
                fn to_index(self) -> Result<usize, DecodeError> {
                    if self < 0 {
                        return Err(DecodeError::InvalidOffset {
                            offset: self as i64,
                        });
                    }
                    Ok(usize::try_from(self).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

impl_signed_offset!(i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::Offset;
    use crate::codec::DecodeError;

    #[test]
    fn unsigned_offsets_convert() {
        assert_eq!(0usize.to_index(), Ok(0));
        assert_eq!(17usize.to_index(), Ok(17));
        assert_eq!(u32::MAX.to_index(), Ok(u32::MAX as usize));
        assert_eq!(u16::MAX.to_index(), Ok(65535));
        assert_eq!(12u64.to_index(), Ok(12));
    }

    #[test]
    fn oversized_u64_offset_saturates() {
        assert_eq!(u64::MAX.to_index(), Ok(usize::MAX));
    }

    #[test]
    fn non_negative_signed_offsets_convert() {
        assert_eq!(0i32.to_index(), Ok(0));
        assert_eq!(4isize.to_index(), Ok(4));
        assert_eq!(8i64.to_index(), Ok(8));
        assert_eq!(2i16.to_index(), Ok(2));
    }

    #[test]
    fn negative_offsets_are_invalid() {
        assert_eq!(
            (-1i32).to_index(),
            Err(DecodeError::InvalidOffset { offset: -1 })
        );
        assert_eq!(
            isize::MIN.to_index(),
            Err(DecodeError::InvalidOffset {
                offset: isize::MIN as i64
            })
        );
        assert_eq!(
            (-7i16).to_index(),
            Err(DecodeError::InvalidOffset { offset: -7 })
        );
        assert_eq!(
            i64::MIN.to_index(),
            Err(DecodeError::InvalidOffset { offset: i64::MIN })
        );
    }
}
