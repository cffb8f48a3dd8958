//! Exercises the public codec surface from many threads at once.

mod common;

use std::sync::Arc;
use std::thread;

use bytes::BytesMut;
use fixint::{
    decode_i32_at, decode_i64_at, encode_i32, encode_i64, DecodeError, FieldDecoder,
    FieldEncoder, I32_BYTE_LEN, I64_BYTE_LEN,
};

use common::init_logging;

const THREADS: i64 = 8;
const VALUES_PER_THREAD: i64 = 10_000;

#[test]
fn threads_roundtrip_independently() {
    init_logging();

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_index| {
            thread::spawn(move || {
                let base = thread_index * VALUES_PER_THREAD;
                for value in base..base + VALUES_PER_THREAD {
                    let wide = value.wrapping_mul(0x0101_0101_0101_0101).wrapping_sub(1);
                    assert_eq!(decode_i64_at(&encode_i64(wide), 0), Ok(wide));

                    let narrow = wide as i32;
                    assert_eq!(decode_i32_at(&encode_i32(narrow), 0), Ok(narrow));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn threads_share_one_frame() {
    init_logging();

    let mut buffer = BytesMut::new();
    let mut encoder = FieldEncoder::new(&mut buffer);
    for i in 0..THREADS {
        encoder.encode_i32(i as i32);
        encoder.encode_i64(-i);
    }
    let frame: Arc<[u8]> = Arc::from(&buffer[..]);
    let stride = I32_BYTE_LEN + I64_BYTE_LEN;

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let frame = Arc::clone(&frame);
            thread::spawn(move || {
                let offset = i as usize * stride;
                assert_eq!(decode_i32_at(&frame, offset), Ok(i as i32));
                assert_eq!(decode_i64_at(&frame, offset + I32_BYTE_LEN), Ok(-i));
                assert_eq!(
                    decode_i64_at(&frame, frame.len()),
                    Err(DecodeError::OutOfRange {
                        width: I64_BYTE_LEN,
                        offset: frame.len(),
                        available: 0,
                    })
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let mut decoder = FieldDecoder::new(&frame);
    for i in 0..THREADS {
        assert_eq!(decoder.decode_i32(), Ok(i as i32));
        assert_eq!(decoder.decode_i64(), Ok(-i));
    }
    assert_eq!(decoder.finish(), 0);
}
