use std::sync::Arc;
use std::thread;

use packetstream_core::{DecodeError, DecodeOptions, LengthEncoding, decode, decode_with};

#[test]
fn zero_count_is_empty_stream() {
    let stream = decode(&[0x00, 0x00]).unwrap();
    assert!(stream.is_empty());
    assert_eq!(stream.bytes_consumed, 2);
}

#[test]
fn zero_count_ignores_following_bytes() {
    let stream = decode(&[0x00, 0x00, 0x00, 0x04, 0x01, 0x02]).unwrap();
    assert!(stream.is_empty());
}

#[test]
fn single_packet_single_word() {
    let buffer = [0x00, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x05];
    assert_eq!(decode(&buffer).unwrap().into_words(), vec![vec![5]]);
}

#[test]
fn packet_order_is_preserved() {
    let buffer = [
        0x00, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x02,
    ];
    assert_eq!(decode(&buffer).unwrap().into_words(), vec![vec![1], vec![2]]);
}

#[test]
fn partial_word_is_discarded() {
    let buffer = [0x00, 0x01, 0x00, 0x05, 0x00, 0x00, 0x01, 0x00, 0xff];
    let stream = decode(&buffer).unwrap();
    assert_eq!(stream.to_words(), vec![vec![0x100]]);
    assert_eq!(stream.packets[0].discarded_bytes(), 1);
    assert_eq!(stream.bytes_consumed, buffer.len());
}

#[test]
fn partial_word_does_not_shift_next_packet() {
    let buffer = [
        0x00, 0x02, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01, 0xaa, 0xbb, 0x00, 0x04, 0x00, 0x00,
        0x00, 0x02,
    ];
    assert_eq!(decode(&buffer).unwrap().into_words(), vec![vec![1], vec![2]]);
}

#[test]
fn multi_word_payload_is_big_endian() {
    let buffer = [
        0x00, 0x01, 0x00, 0x0c, 0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x01, 0xff, 0xff,
        0xff, 0xff,
    ];
    assert_eq!(
        decode(&buffer).unwrap().into_words(),
        vec![vec![0xdead_beef, 1, u32::MAX]]
    );
}

#[test]
fn truncated_payload_is_buffer_too_short() {
    let buffer = [0x00, 0x01, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01];
    let err = decode(&buffer).unwrap_err();
    assert_eq!(
        err,
        DecodeError::BufferTooShort {
            needed: 12,
            actual: 8
        }
    );
}

#[test]
fn failure_on_later_packet_aborts_decode() {
    let buffer = [
        0x00, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x04, 0x00, 0x00,
    ];
    assert!(matches!(
        decode(&buffer),
        Err(DecodeError::BufferTooShort { .. })
    ));
}

#[test]
fn count_larger_than_buffer_is_buffer_too_short_by_default() {
    let err = decode(&[0xff, 0xff, 0x00, 0x00]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::BufferTooShort {
            needed: 6,
            actual: 4
        }
    );
}

#[test]
fn short_first_payload_is_buffer_too_short_despite_large_count() {
    let buffer = [0x00, 0x04, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01];
    let err = decode(&buffer).unwrap_err();
    assert_eq!(
        err,
        DecodeError::BufferTooShort {
            needed: 12,
            actual: 8
        }
    );
}

#[test]
fn count_validation_rejects_impossible_count() {
    let options = DecodeOptions {
        validate_packet_count: true,
        ..DecodeOptions::default()
    };
    let err = decode_with(&[0xff, 0xff, 0x00, 0x00], options).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidPacketCount { count: 0xffff, .. }
    ));
    assert!(err.to_string().contains("invalid packet count 65535"));
}

#[test]
fn legacy_length_rejects_byte_order_mark() {
    let options = DecodeOptions {
        length_encoding: LengthEncoding::Utf16CodeUnit,
        ..DecodeOptions::default()
    };
    let err = decode_with(&[0x00, 0x01, 0xfe, 0xff], options).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidLengthField {
            index: 0,
            raw: 0xfeff
        }
    );
}

#[test]
fn decode_is_idempotent() {
    let buffer = [
        0x00, 0x03, 0x00, 0x04, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x02, 0x12, 0x34,
    ];
    let first = decode(&buffer).unwrap();
    let second = decode(&buffer).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_words(), vec![vec![9], vec![], vec![]]);
}

#[test]
fn shared_buffer_decodes_concurrently() {
    let buffer: Arc<[u8]> = Arc::from(
        &[
            0x00, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x02,
        ][..],
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || decode(&buffer).map(|stream| stream.into_words()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), vec![vec![1], vec![2]]);
    }
}
