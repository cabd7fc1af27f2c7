use thiserror::Error;

/// Errors returned by packet stream decoding.
///
/// Every variant is detected at the offending read; a decode never
/// recovers from one and never returns a partial stream.
///
/// # Examples
/// ```
/// use packetstream_core::DecodeError;
///
/// let err = DecodeError::BufferTooShort { needed: 2, actual: 1 };
/// assert!(err.to_string().contains("buffer too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("buffer too short: need {needed} bytes, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },
    #[error("invalid length field for packet {index}: {raw:#06x}")]
    InvalidLengthField { index: u16, raw: u16 },
    #[error("invalid packet count {count}: need at least {needed} bytes, got {actual}")]
    InvalidPacketCount {
        count: u16,
        needed: usize,
        actual: usize,
    },
    #[error("{count} trailing bytes after last packet")]
    TrailingBytes { count: usize },
}
