use alloc::{vec, vec::Vec};

use tracing::debug;

use crate::{
    decode_block, encode_block, Color32, Error, Result, BC7_BLOCK_SIZE, PIXELS_PER_BLOCK,
};

/// Block layout of a `width` x `height` image, partial edge blocks included.
#[derive(Clone, Copy, Debug)]
struct BlockGrid {
    width: usize,
    height: usize,
    blocks_x: usize,
    blocks_y: usize,
}

impl BlockGrid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocks_x: (width + 3) / 4,
            blocks_y: (height + 3) / 4,
        }
    }

    fn block_count(&self) -> usize {
        self.blocks_x * self.blocks_y
    }

    fn compressed_len(&self) -> usize {
        self.block_count().saturating_mul(BC7_BLOCK_SIZE)
    }

    fn rgba_len(&self) -> usize {
        self.width.saturating_mul(self.height).saturating_mul(4)
    }

    /// Byte offset of pixel `(x, y)` in a tightly packed RGBA8 image.
    fn pixel_offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }
}

fn block_iter<const N: usize>(data: &[u8]) -> impl Iterator<Item = &[u8; N]> {
    data.chunks_exact(N).filter_map(|c| c.try_into().ok())
}

fn block_iter_mut<const N: usize>(data: &mut [u8]) -> impl Iterator<Item = &mut [u8; N]> {
    data.chunks_exact_mut(N).filter_map(|c| c.try_into().ok())
}

/// Decodes row-major BC7 blocks into a tightly packed RGBA8 image, cropping
/// the parts of edge blocks that fall outside `width` x `height`.
pub fn decode_image(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let grid = BlockGrid::new(width, height);
    if data.len() != grid.compressed_len() {
        return Err(Error::InvalidLength {
            expected: grid.compressed_len(),
            actual: data.len(),
        });
    }

    let mut rgba = vec![0u8; grid.rgba_len()];
    for (i, block) in block_iter::<BC7_BLOCK_SIZE>(data).enumerate() {
        let pixels = decode_block(block)?;
        let x0 = 4 * (i % grid.blocks_x);
        let y0 = 4 * (i / grid.blocks_x);
        let columns = (width - x0).min(4);
        for (y, row) in pixels.chunks_exact(4).enumerate().take(height - y0) {
            let start = grid.pixel_offset(x0, y0 + y);
            for (out, pixel) in rgba[start..start + 4 * columns].chunks_exact_mut(4).zip(row) {
                out.copy_from_slice(&pixel.0);
            }
        }
    }

    debug!(width, height, blocks = grid.block_count(), "decoded BC7 image");
    Ok(rgba)
}

/// Encodes a tightly packed RGBA8 image into row-major BC7 blocks. Edge
/// blocks are padded by repeating the last column and row.
pub fn encode_image(rgba: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let grid = BlockGrid::new(width, height);
    if rgba.len() != grid.rgba_len() {
        return Err(Error::InvalidLength {
            expected: grid.rgba_len(),
            actual: rgba.len(),
        });
    }

    let mut data = vec![0u8; grid.compressed_len()];
    for (i, block) in block_iter_mut::<BC7_BLOCK_SIZE>(&mut data).enumerate() {
        let x0 = 4 * (i % grid.blocks_x);
        let y0 = 4 * (i / grid.blocks_x);
        let pixels: [Color32; PIXELS_PER_BLOCK] = core::array::from_fn(|p| {
            let x = (x0 + p % 4).min(width - 1);
            let y = (y0 + p / 4).min(height - 1);
            Color32::from_rgba_slice(&rgba[grid.pixel_offset(x, y)..])
        });
        *block = encode_block(&pixels);
    }

    debug!(width, height, blocks = grid.block_count(), "encoded BC7 image");
    Ok(data)
}
