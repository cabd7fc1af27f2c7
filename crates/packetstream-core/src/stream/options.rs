use serde::{Deserialize, Serialize};

use super::length::LengthEncoding;

/// Decoder configuration.
///
/// Missing fields deserialize to their defaults, so the struct can be
/// embedded in a larger configuration file.
///
/// # Examples
/// ```
/// use packetstream_core::{DecodeOptions, LengthEncoding};
///
/// let options = DecodeOptions {
///     length_encoding: LengthEncoding::Utf16CodeUnit,
///     ..DecodeOptions::default()
/// };
/// assert!(!options.validate_packet_count);
/// assert!(!options.reject_trailing_bytes);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// How each packet's length field is interpreted.
    pub length_encoding: LengthEncoding,
    /// Reject a packet count that cannot fit in the buffer before reading
    /// any packet. Off by default, so a short buffer fails at the first
    /// out-of-bounds read with `BufferTooShort`.
    pub validate_packet_count: bool,
    /// Fail when bytes remain after the last declared packet.
    pub reject_trailing_bytes: bool,
}

#[cfg(test)]
mod tests {
    use super::DecodeOptions;
    use crate::stream::length::LengthEncoding;

    #[test]
    fn missing_fields_use_defaults() {
        let options: DecodeOptions =
            serde_json::from_str(r#"{"length_encoding":"utf16_code_unit"}"#).expect("options json");
        assert_eq!(options.length_encoding, LengthEncoding::Utf16CodeUnit);
        assert!(!options.validate_packet_count);
        assert!(!options.reject_trailing_bytes);
    }

    #[test]
    fn count_validation_is_opt_in() {
        let options: DecodeOptions =
            serde_json::from_str(r#"{"validate_packet_count":true}"#).expect("options json");
        assert!(options.validate_packet_count);
        assert_eq!(options.length_encoding, LengthEncoding::BigEndian);
    }

    #[test]
    fn empty_object_is_default() {
        let options: DecodeOptions = serde_json::from_str("{}").expect("options json");
        assert_eq!(options, DecodeOptions::default());
    }
}
