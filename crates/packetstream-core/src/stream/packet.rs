use serde::{Deserialize, Serialize};

use super::layout;

/// One decoded packet: its payload read as big-endian `u32` words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Payload length in bytes, as declared by the length field.
    pub payload_len: u16,
    /// Words in payload order.
    pub words: Vec<u32>,
}

impl Packet {
    /// Bytes at the end of the payload that did not form a whole word.
    pub fn discarded_bytes(&self) -> usize {
        usize::from(self.payload_len) % layout::WORD_LEN
    }
}

/// Packets decoded from one buffer, in stream order.
///
/// # Examples
/// ```
/// let stream = packetstream_core::decode(&[0x00, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x05])?;
/// assert_eq!(stream.to_words(), vec![vec![5]]);
/// assert_eq!(stream.bytes_consumed, 8);
/// # Ok::<(), packetstream_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedStream {
    pub packets: Vec<Packet>,
    /// Cursor position after the last payload.
    pub bytes_consumed: usize,
}

impl DecodedStream {
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Nested word view, dropping per-packet metadata.
    pub fn to_words(&self) -> Vec<Vec<u32>> {
        self.packets
            .iter()
            .map(|packet| packet.words.clone())
            .collect()
    }

    pub fn into_words(self) -> Vec<Vec<u32>> {
        self.packets.into_iter().map(|packet| packet.words).collect()
    }
}
