mod error;
mod field;
mod id;
mod int;
mod offset;

pub use self::error::DecodeError;
pub use self::field::{FieldDecoder, FieldEncoder};
pub use self::id::{decode_uuid, decode_uuid_at, encode_uuid, UUID_BYTE_LEN};
pub use self::int::{
    decode_i32, decode_i32_at, decode_i64, decode_i64_at, encode_i32, encode_i64, FixedWidth,
    I32_BYTE_LEN, I64_BYTE_LEN,
};
pub use self::offset::Offset;
