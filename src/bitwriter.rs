use crate::{bitreader::check_span, mask, Result};

/// Sequential LSB-first writer over a byte buffer.
///
/// Bits outside the written fields are preserved. Writing past the end of the
/// buffer is a bug in the caller's layout and panics.
pub struct BitWriterLsb<'a> {
    bytes: &'a mut [u8],
    bit_pos: usize,
}

impl<'a> BitWriterLsb<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, bit_pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.bit_pos
    }

    pub fn write_bool(&mut self, v: bool) {
        self.write_u32(1, v as u32)
    }

    pub fn write_u8(&mut self, count: usize, v: u8) {
        assert!(count <= 8);
        self.write_u32(count, v as u32)
    }

    pub fn write_u32(&mut self, count: usize, v: u32) {
        assert!(count <= 32);
        let limit = self.bytes.len() * 8;
        assert!(
            self.bit_pos + count <= limit,
            "bit writer overrun: {} bits at offset {} in a {}-bit buffer",
            count,
            self.bit_pos,
            limit
        );
        store_bits(self.bytes, self.bit_pos, count, v);
        self.bit_pos += count;
    }
}

/// Writes the low `len` bits of `value` (at most 32 bits) at `bit_offset`,
/// leaving every other bit of the buffer untouched.
pub fn write_bits(bytes: &mut [u8], bit_offset: usize, len: usize, value: u32) -> Result<()> {
    assert!(len <= 32);
    check_span(bytes, bit_offset, len)?;
    store_bits(bytes, bit_offset, len, value);
    Ok(())
}

fn store_bits(bytes: &mut [u8], bit_offset: usize, count: usize, v: u32) {
    if count == 0 {
        return;
    }
    let field = mask!(count as u32);
    let v = v & field;

    let mut byte = bit_offset / 8;
    let bit = bit_offset % 8;

    {
        let byte_mask = (field << bit) as u8;
        bytes[byte] = (bytes[byte] & !byte_mask) | ((v << bit) as u8 & byte_mask);
    }
    let mut written = 8 - bit;
    byte += 1;

    while written < count {
        let chunk = (count - written).min(8) as u32;
        let byte_mask = mask!(chunk) as u8;
        bytes[byte] = (bytes[byte] & !byte_mask) | ((v >> written) as u8 & byte_mask);
        written += 8;
        byte += 1;
    }
}
