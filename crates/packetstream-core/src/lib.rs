//! Packet stream decoder.
//!
//! Turns an in-memory byte buffer holding a packet stream into nested `u32`
//! words. The wire format is a big-endian packet count followed by that many
//! length-prefixed payloads:
//!
//! ```text
//! [ packet count: u16 BE ]
//! repeated packet count times:
//!   [ length field: 2 bytes ]
//!   [ payload: length bytes, read as u32 BE words ]
//! ```
//!
//! Decoding is a single, pure pass: no I/O, no shared state, and the input
//! is only borrowed, so one buffer can be decoded from several threads at
//! once. Byte offsets live in `stream::layout`, bounds-checked reads in the
//! stream reader, and the algorithm in `stream::parser`.
//!
//! Invariants:
//! - The cursor after each `(length field, payload)` pair is the start of
//!   the next length field.
//! - A packet holds `payload_len / 4` words; a trailing partial word is
//!   dropped.
//! - The first error aborts the decode; no partial stream is returned.
//!
//! # Examples
//! ```
//! use packetstream_core::decode;
//!
//! let buffer = [
//!     0x00, 0x02, // two packets
//!     0x00, 0x04, 0x00, 0x00, 0x00, 0x01,
//!     0x00, 0x04, 0x00, 0x00, 0x00, 0x02,
//! ];
//! let stream = decode(&buffer)?;
//! assert_eq!(stream.to_words(), vec![vec![1], vec![2]]);
//! # Ok::<(), packetstream_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod stream;

pub use stream::layout;
pub use stream::{
    DecodeError, DecodeOptions, DecodedStream, LengthEncoding, Packet, PacketStream, decode,
    decode_with,
};

/// Current summary schema version.
pub const SUMMARY_VERSION: u32 = 1;

/// Counters describing one decoded buffer.
///
/// # Examples
/// ```
/// use packetstream_core::{decode, summarize};
///
/// let buffer = [0x00, 0x01, 0x00, 0x05, 0, 0, 0, 7, 0xff, 0xee];
/// let stream = decode(&buffer)?;
/// let summary = summarize(&stream, buffer.len());
/// assert_eq!(summary.words, 1);
/// assert_eq!(summary.discarded_bytes, 1);
/// assert_eq!(summary.trailing_bytes, 1);
/// # Ok::<(), packetstream_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSummary {
    /// Summary schema version (not the crate version).
    pub summary_version: u32,
    /// Number of decoded packets.
    pub packets: u64,
    /// Total words across all packets.
    pub words: u64,
    /// Bytes read from the start of the buffer through the last payload.
    pub bytes_consumed: u64,
    /// Bytes left after the last payload.
    pub trailing_bytes: u64,
    /// Payload bytes dropped because they did not form a whole word.
    pub discarded_bytes: u64,
}

/// Summarize a decoded stream taken from a buffer of `buffer_len` bytes.
pub fn summarize(stream: &DecodedStream, buffer_len: usize) -> StreamSummary {
    let words: usize = stream.packets.iter().map(|p| p.words.len()).sum();
    let discarded: usize = stream.packets.iter().map(Packet::discarded_bytes).sum();
    StreamSummary {
        summary_version: SUMMARY_VERSION,
        packets: stream.len() as u64,
        words: words as u64,
        bytes_consumed: stream.bytes_consumed as u64,
        trailing_bytes: buffer_len.saturating_sub(stream.bytes_consumed) as u64,
        discarded_bytes: discarded as u64,
    }
}
