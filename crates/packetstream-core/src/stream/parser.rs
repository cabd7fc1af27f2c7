use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::error::DecodeError;
use super::layout;
use super::options::DecodeOptions;
use super::packet::{DecodedStream, Packet};
use super::reader::{StreamReader, be_words};

/// Pull decoder yielding one packet at a time.
///
/// The header is read and validated on construction. After the first error
/// the stream is exhausted: further calls return `Ok(None)`.
///
/// # Examples
/// ```
/// use packetstream_core::PacketStream;
///
/// let buffer = [0x00, 0x02, 0x00, 0x04, 0, 0, 0, 1, 0x00, 0x04, 0, 0, 0, 2];
/// let mut stream = PacketStream::new(&buffer)?;
/// assert_eq!(stream.declared_count(), 2);
/// assert_eq!(stream.next_packet()?.map(|p| p.words), Some(vec![1]));
/// assert_eq!(stream.next_packet()?.map(|p| p.words), Some(vec![2]));
/// assert_eq!(stream.next_packet()?, None);
/// # Ok::<(), packetstream_core::DecodeError>(())
/// ```
pub struct PacketStream<'a> {
    reader: StreamReader<'a>,
    options: DecodeOptions,
    declared: u16,
    emitted: u16,
    failed: bool,
}

impl<'a> PacketStream<'a> {
    pub fn new(buffer: &'a [u8]) -> Result<Self, DecodeError> {
        Self::with_options(buffer, DecodeOptions::default())
    }

    pub fn with_options(buffer: &'a [u8], options: DecodeOptions) -> Result<Self, DecodeError> {
        let mut reader = StreamReader::new(buffer);
        let declared = reader.take_u16_be().inspect_err(|err| {
            debug!(
                buffer_len = buffer.len(),
                error = %err,
                "stream header decode failed"
            );
        })?;

        if options.validate_packet_count {
            let needed = layout::min_stream_len(declared);
            if reader.require_len(needed).is_err() {
                debug!(
                    packet_count = declared,
                    buffer_len = buffer.len(),
                    "packet count cannot fit in buffer"
                );
                return Err(DecodeError::InvalidPacketCount {
                    count: declared,
                    needed,
                    actual: buffer.len(),
                });
            }
        }

        debug!(
            packet_count = declared,
            buffer_len = buffer.len(),
            length_encoding = ?options.length_encoding,
            "stream header decoded"
        );

        Ok(Self {
            reader,
            options,
            declared,
            emitted: 0,
            failed: false,
        })
    }

    /// Packet count announced by the header.
    pub fn declared_count(&self) -> u16 {
        self.declared
    }

    /// Packets not yet decoded, or 0 once the stream has failed.
    pub fn remaining_packets(&self) -> u16 {
        if self.failed {
            0
        } else {
            self.declared - self.emitted
        }
    }

    /// Byte offset of the next unread length field.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    pub fn next_packet(&mut self) -> Result<Option<Packet>, DecodeError> {
        if self.remaining_packets() == 0 {
            return Ok(None);
        }
        match self.read_packet() {
            Ok(packet) => {
                self.emitted += 1;
                Ok(Some(packet))
            }
            Err(err) => {
                self.failed = true;
                debug!(
                    index = self.emitted,
                    position = self.reader.position(),
                    error = %err,
                    "packet decode failed"
                );
                Err(err)
            }
        }
    }

    fn read_packet(&mut self) -> Result<Packet, DecodeError> {
        let index = self.emitted;
        let raw = self.reader.take_length_field()?;
        let payload_len = self
            .options
            .length_encoding
            .decode(raw)
            .ok_or(DecodeError::InvalidLengthField {
                index,
                raw: u16::from_be_bytes(raw),
            })?;

        let payload = self.reader.take(usize::from(payload_len))?;
        let words = be_words(payload);
        trace!(index, payload_len, words = words.len(), "packet decoded");

        Ok(Packet { payload_len, words })
    }

    /// Close the stream after all declared packets have been read.
    fn finish(self, packets: Vec<Packet>) -> Result<DecodedStream, DecodeError> {
        let trailing = self.reader.remaining();
        if self.options.reject_trailing_bytes && trailing > 0 {
            return Err(DecodeError::TrailingBytes { count: trailing });
        }
        Ok(DecodedStream {
            packets,
            bytes_consumed: self.reader.position(),
        })
    }
}

impl Iterator for PacketStream<'_> {
    type Item = Result<Packet, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_packet().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(self.remaining_packets())))
    }
}

impl FusedIterator for PacketStream<'_> {}

/// Decode a whole packet stream with the default options.
///
/// # Examples
/// ```
/// let stream = packetstream_core::decode(&[0x00, 0x00])?;
/// assert!(stream.is_empty());
/// # Ok::<(), packetstream_core::DecodeError>(())
/// ```
///
/// # Errors
/// Returns `DecodeError` on the first out-of-bounds read or malformed field;
/// no partial stream is returned.
pub fn decode(buffer: &[u8]) -> Result<DecodedStream, DecodeError> {
    decode_with(buffer, DecodeOptions::default())
}

/// Decode a whole packet stream.
///
/// # Errors
/// See [`decode`]. With `reject_trailing_bytes` set, bytes after the last
/// packet fail with `DecodeError::TrailingBytes`.
pub fn decode_with(buffer: &[u8], options: DecodeOptions) -> Result<DecodedStream, DecodeError> {
    let mut stream = PacketStream::with_options(buffer, options)?;
    if stream.declared_count() == 0 {
        return stream.finish(Vec::new());
    }

    let mut packets = Vec::with_capacity(usize::from(stream.declared_count()));
    while let Some(packet) = stream.next_packet()? {
        packets.push(packet);
    }
    stream.finish(packets)
}
