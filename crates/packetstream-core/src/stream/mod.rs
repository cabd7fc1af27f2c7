//! Packet stream decoding.
//!
//! The stream is a big-endian `u16` packet count followed by that many
//! `(length field, payload)` pairs; each payload is read as big-endian `u32`
//! words with any trailing partial word discarded.
//!
//! The module follows a layered structure:
//! - `layout`: field offsets and widths (source of truth)
//! - `reader`: bounds-checked cursor reads
//! - `length`: length field interpretation
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsing is pure: no I/O, no state outside the call's own cursor.

pub mod error;
pub mod layout;
pub mod length;
pub mod options;
pub mod packet;
pub mod parser;
pub(crate) mod reader;

pub use error::DecodeError;
pub use length::LengthEncoding;
pub use options::DecodeOptions;
pub use packet::{DecodedStream, Packet};
pub use parser::{PacketStream, decode, decode_with};
