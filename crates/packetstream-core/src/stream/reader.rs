use super::error::DecodeError;
use super::layout;

/// Bounds-checked cursor over a borrowed packet stream buffer.
///
/// Reads never go past the end of the buffer; every failed read reports the
/// absolute length that would have been needed.
pub struct StreamReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl<'a> StreamReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.buffer.len() < needed {
            return Err(DecodeError::BufferTooShort {
                needed,
                actual: self.buffer.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.buffer
            .get(range.clone())
            .ok_or(DecodeError::BufferTooShort {
                needed: range.end,
                actual: self.buffer.len(),
            })
    }

    /// Consume `len` bytes starting at the cursor.
    ///
    /// The cursor only moves when the whole slice is in bounds.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .cursor
            .checked_add(len)
            .ok_or(DecodeError::BufferTooShort {
                needed: usize::MAX,
                actual: self.buffer.len(),
            })?;
        let bytes = self.read_slice(self.cursor..end)?;
        self.cursor = end;
        Ok(bytes)
    }

    /// Consume exactly `N` bytes as a fixed-width array.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn take_u16_be(&mut self) -> Result<u16, DecodeError> {
        self.take_array().map(u16::from_be_bytes)
    }

    /// Consume a raw length field without interpreting it.
    pub fn take_length_field(&mut self) -> Result<[u8; layout::LENGTH_FIELD_LEN], DecodeError> {
        self.take_array()
    }
}

/// Split a payload into big-endian words, dropping a trailing partial word.
pub fn be_words(payload: &[u8]) -> Vec<u32> {
    payload
        .chunks_exact(layout::WORD_LEN)
        .map(|word| u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
        .collect()
}
