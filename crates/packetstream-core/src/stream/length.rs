use serde::{Deserialize, Serialize};

const BYTE_ORDER_MARK: u16 = 0xfeff;
const SWAPPED_BYTE_ORDER_MARK: u16 = 0xfffe;

/// Interpretation of the two-byte length field preceding each payload.
///
/// # Examples
/// ```
/// use packetstream_core::LengthEncoding;
///
/// assert_eq!(LengthEncoding::BigEndian.decode([0xd8, 0x00]), Some(0xd800));
/// assert_eq!(LengthEncoding::Utf16CodeUnit.decode([0xd8, 0x00]), None);
/// assert_eq!(LengthEncoding::Utf16CodeUnit.decode([0x01, 0x00]), Some(0x100));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthEncoding {
    /// Plain big-endian `u16`, the same convention as the packet count.
    #[default]
    BigEndian,
    /// Legacy producers: the bytes form one big-endian UTF-16 code unit and
    /// the decoded scalar value is the length. Surrogates and byte-order
    /// marks do not decode to exactly one scalar.
    Utf16CodeUnit,
}

impl LengthEncoding {
    /// Decode a raw length field, or `None` when it is malformed under this
    /// encoding.
    pub fn decode(self, raw: [u8; 2]) -> Option<u16> {
        let unit = u16::from_be_bytes(raw);
        match self {
            LengthEncoding::BigEndian => Some(unit),
            LengthEncoding::Utf16CodeUnit => utf16_scalar(unit),
        }
    }
}

fn utf16_scalar(unit: u16) -> Option<u16> {
    // A leading BOM is consumed by UTF-16 decoders and leaves no scalar.
    if unit == BYTE_ORDER_MARK || unit == SWAPPED_BYTE_ORDER_MARK {
        return None;
    }
    let mut scalars = char::decode_utf16([unit]);
    match (scalars.next(), scalars.next()) {
        (Some(Ok(scalar)), None) => u16::try_from(u32::from(scalar)).ok(),
        _ => None,
    }
}
