use tracing::debug;

use crate::{bc7::Bc7Fields, Color32, Error, Result, BC7_BLOCK_SIZE, PIXELS_PER_BLOCK};

/// Decodes one code word into 16 pixels in row-major order.
///
/// The reserved encoding (no mode bit set) decodes to transparent black.
pub fn decode_block(block: &[u8; BC7_BLOCK_SIZE]) -> Result<[Color32; PIXELS_PER_BLOCK]> {
    match Bc7Fields::read(block)? {
        Some(fields) => Ok(fields.to_pixels()),
        None => {
            debug!("reserved BC7 block, decoding as transparent black");
            Ok([Color32::default(); PIXELS_PER_BLOCK])
        }
    }
}

/// Decodes the code word starting at byte `offset` of `bytes`.
pub fn decode_block_at(bytes: &[u8], offset: usize) -> Result<[Color32; PIXELS_PER_BLOCK]> {
    decode_block(block_at(bytes, offset)?)
}

/// Mode of a code word, or `None` for the reserved encoding.
pub fn block_mode(block: &[u8; BC7_BLOCK_SIZE]) -> Option<u8> {
    match block[0] {
        0 => None,
        b => Some(b.trailing_zeros() as u8),
    }
}

pub(crate) fn block_at(bytes: &[u8], offset: usize) -> Result<&[u8; BC7_BLOCK_SIZE]> {
    let needed = offset.saturating_add(BC7_BLOCK_SIZE);
    bytes
        .get(offset..needed)
        .and_then(|block| block.try_into().ok())
        .ok_or(Error::BufferTooSmall {
            needed,
            actual: bytes.len(),
        })
}
