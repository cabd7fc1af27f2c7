pub const PACKET_COUNT_LEN: usize = 2;
pub const HEADER_LEN: usize = PACKET_COUNT_LEN;

pub const LENGTH_FIELD_LEN: usize = 2;
pub const WORD_LEN: usize = 4;

/// Smallest buffer able to hold `count` packets: the header plus one empty
/// length field per packet.
pub const fn min_stream_len(count: u16) -> usize {
    HEADER_LEN + count as usize * LENGTH_FIELD_LEN
}
