use byteorder::{ByteOrder, LE};
use core::fmt;
use core::ops::{Index, IndexMut};

pub(crate) const ALPHA_CHANNEL: usize = 3;

/// One RGBA8 sample. Channels are addressed by index: 0 = R, 1 = G, 2 = B, 3 = A.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color32(pub [u8; 4]);

impl Color32 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Reads a color from the first four bytes of `rgba`, in R, G, B, A order.
    pub(crate) fn from_rgba_slice(rgba: &[u8]) -> Self {
        Self([rgba[0], rgba[1], rgba[2], rgba[3]])
    }

    pub fn to_rgba_u32(self) -> u32 {
        LE::read_u32(&self.0)
    }

    pub fn from_rgba_u32(rgba: u32) -> Self {
        let mut bytes = [0; 4];
        LE::write_u32(&mut bytes, rgba);
        Color32(bytes)
    }

    /// Applies a BC7 channel rotation: 0 keeps the color, 1, 2 and 3 exchange
    /// alpha with red, green and blue respectively. Rotations are involutions,
    /// so the same call undoes them.
    pub(crate) fn rotated(mut self, rotation: u8) -> Self {
        if let 1..=3 = rotation {
            self.0.swap(rotation as usize - 1, ALPHA_CHANNEL);
        }
        self
    }
}

impl fmt::Debug for Color32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:08X}", self.to_rgba_u32())
    }
}

impl Index<usize> for Color32 {
    type Output = u8;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Color32 {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}
