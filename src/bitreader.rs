use crate::{mask, Error, Result};

/// Sequential LSB-first reader over a byte buffer.
///
/// Every read is bounds checked against the buffer, so a truncated or corrupt
/// block reports [`Error::FieldOverrun`] instead of reading neighbouring data.
pub struct BitReaderLsb<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReaderLsb<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read(1)? == 1)
    }

    pub fn read_u8(&mut self, count: usize) -> Result<u8> {
        assert!(count <= 8);
        Ok(self.read(count)? as u8)
    }

    pub fn read(&mut self, count: usize) -> Result<u32> {
        let value = read_bits(self.bytes, self.pos, count)?;
        self.pos += count;
        Ok(value)
    }
}

pub(crate) fn check_span(bytes: &[u8], offset: usize, len: usize) -> Result<()> {
    let limit = bytes.len() * 8;
    match offset.checked_add(len) {
        Some(end) if end <= limit => Ok(()),
        _ => Err(Error::FieldOverrun { offset, len, limit }),
    }
}

/// Reads the bit at `bit_offset`, counting from the least significant bit of
/// the first byte.
pub fn read_bit(bytes: &[u8], bit_offset: usize) -> Result<u8> {
    Ok(read_bits(bytes, bit_offset, 1)? as u8)
}

/// Reads a `len` bit field (at most 32 bits) starting at `bit_offset`.
///
/// Bits are packed LSB-first: the low bits of a field that crosses a byte
/// boundary come from the high end of the first byte and the remaining bits
/// from the low end of the following bytes.
pub fn read_bits(bytes: &[u8], bit_offset: usize, len: usize) -> Result<u32> {
    assert!(len <= 32);
    check_span(bytes, bit_offset, len)?;
    if len == 0 {
        return Ok(0);
    }

    let mut byte = bit_offset / 8;
    let bit = bit_offset % 8;

    let mut result = (bytes[byte] >> bit) as u32;
    let mut read = 8 - bit;
    byte += 1;

    while read < len {
        result |= (bytes[byte] as u32) << read;
        read += 8;
        byte += 1;
    }

    Ok(result & mask!(len as u32))
}
