use crate::{
    bitreader::BitReaderLsb,
    bitwriter::BitWriterLsb,
    palette::{unquantize, Palette},
    tables::{self, MAX_REGIONS},
    Color32, Result, PIXELS_PER_BLOCK,
};

/// Field layout of one BC7 mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bc7Mode {
    pub id: u8,
    /// Number of regions minus one.
    pub partitions: u8,
    pub pat_bits: u8,
    pub index_bits: u8,
    /// Stored endpoint precision per channel, R, G, B, A.
    pub color_bits: [u8; 4],
    /// Endpoint precision once the parity bit is appended.
    pub endpoint_bits: [u8; 4],
    pub alpha_index_bits: u8,
    pub p_bits: u8,
    pub rotation_bits: u8,
    pub index_mode_bits: u8,
}

#[rustfmt::skip]
pub(crate) static BC7_MODES: [Bc7Mode; 8] = [
    Bc7Mode { id: 0, partitions: 2, pat_bits: 4, index_bits: 3, color_bits: [4, 4, 4, 0], endpoint_bits: [5, 5, 5, 0], alpha_index_bits: 0, p_bits: 6, rotation_bits: 0, index_mode_bits: 0 },
    Bc7Mode { id: 1, partitions: 1, pat_bits: 6, index_bits: 3, color_bits: [6, 6, 6, 0], endpoint_bits: [7, 7, 7, 0], alpha_index_bits: 0, p_bits: 2, rotation_bits: 0, index_mode_bits: 0 },
    Bc7Mode { id: 2, partitions: 2, pat_bits: 6, index_bits: 2, color_bits: [5, 5, 5, 0], endpoint_bits: [5, 5, 5, 0], alpha_index_bits: 0, p_bits: 0, rotation_bits: 0, index_mode_bits: 0 },
    Bc7Mode { id: 3, partitions: 1, pat_bits: 6, index_bits: 2, color_bits: [7, 7, 7, 0], endpoint_bits: [8, 8, 8, 0], alpha_index_bits: 0, p_bits: 4, rotation_bits: 0, index_mode_bits: 0 },
    Bc7Mode { id: 4, partitions: 0, pat_bits: 0, index_bits: 2, color_bits: [5, 5, 5, 6], endpoint_bits: [5, 5, 5, 6], alpha_index_bits: 3, p_bits: 0, rotation_bits: 2, index_mode_bits: 1 },
    Bc7Mode { id: 5, partitions: 0, pat_bits: 0, index_bits: 2, color_bits: [7, 7, 7, 8], endpoint_bits: [7, 7, 7, 8], alpha_index_bits: 2, p_bits: 0, rotation_bits: 2, index_mode_bits: 0 },
    Bc7Mode { id: 6, partitions: 0, pat_bits: 0, index_bits: 4, color_bits: [7, 7, 7, 7], endpoint_bits: [8, 8, 8, 8], alpha_index_bits: 0, p_bits: 2, rotation_bits: 0, index_mode_bits: 0 },
    Bc7Mode { id: 7, partitions: 1, pat_bits: 6, index_bits: 2, color_bits: [5, 5, 5, 5], endpoint_bits: [6, 6, 6, 6], alpha_index_bits: 0, p_bits: 4, rotation_bits: 0, index_mode_bits: 0 },
];

impl Bc7Mode {
    pub fn regions(&self) -> usize {
        self.partitions as usize + 1
    }

    pub fn endpoint_count(&self) -> usize {
        2 * self.regions()
    }

    pub fn shape_count(&self) -> usize {
        1 << self.pat_bits
    }

    pub fn rotation_count(&self) -> u8 {
        1 << self.rotation_bits
    }

    pub fn index_mode_count(&self) -> u8 {
        1 << self.index_mode_bits
    }

    pub fn has_alpha_plane(&self) -> bool {
        self.alpha_index_bits > 0
    }

    /// Whether `channel` carries a parity bit below its stored value.
    pub fn has_p_bit(&self, channel: usize) -> bool {
        self.endpoint_bits[channel] > self.color_bits[channel]
    }

    /// Parity bit shared by endpoint `endpoint` (`2 * region + 0/1`).
    pub fn p_bit_index(&self, endpoint: usize) -> usize {
        endpoint * self.p_bits as usize / self.endpoint_count()
    }

    /// Width of the index field of plane 0 (color indices) or 1 (alpha indices).
    pub fn plane_bits(&self, plane: usize) -> u8 {
        match plane {
            0 => self.index_bits,
            _ => self.alpha_index_bits,
        }
    }

    /// Total width of a code word in this mode.
    pub fn bit_count(&self) -> usize {
        let header = self.id as usize + 1
            + self.rotation_bits as usize
            + self.index_mode_bits as usize
            + self.pat_bits as usize;
        let endpoint_bits: usize = self.color_bits.iter().map(|&b| b as usize).sum();
        let endpoints = self.endpoint_count() * endpoint_bits;
        let color_indices = PIXELS_PER_BLOCK * self.index_bits as usize - self.regions();
        let alpha_indices = if self.has_alpha_plane() {
            PIXELS_PER_BLOCK * self.alpha_index_bits as usize - 1
        } else {
            0
        };
        header + endpoints + self.p_bits as usize + color_indices + alpha_indices
    }
}

/// Every field of one code word, with endpoints kept at their stored precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Bc7Fields {
    pub mode: u8,
    pub rotation: u8,
    pub index_mode: u8,
    pub shape: u8,
    pub endpoints: [[Color32; 2]; MAX_REGIONS],
    pub p_bits: [u8; 6],
    /// Index planes in wire order: plane 0 at `index_bits`, plane 1 at
    /// `alpha_index_bits`.
    pub indices: [[u8; 16]; 2],
}

impl Bc7Fields {
    pub fn new(mode: u8) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> &'static Bc7Mode {
        &BC7_MODES[self.mode as usize]
    }

    /// Reads a code word. Returns `None` for the reserved encoding, which has
    /// no `1` among its mode bits.
    pub fn read(bytes: &[u8]) -> Result<Option<Self>> {
        let reader = &mut BitReaderLsb::new(bytes);

        let mut mode = 0;
        while !reader.read_bool()? {
            mode += 1;
            if mode == BC7_MODES.len() as u8 {
                return Ok(None);
            }
        }

        let mut fields = Self::new(mode);
        let bc7_mode = fields.mode();

        fields.rotation = reader.read_u8(bc7_mode.rotation_bits as usize)?;
        fields.index_mode = reader.read_u8(bc7_mode.index_mode_bits as usize)?;
        fields.shape = reader.read_u8(bc7_mode.pat_bits as usize)?;

        let regions = bc7_mode.regions();
        for channel in 0..4 {
            let bit_count = bc7_mode.color_bits[channel] as usize;
            for pair in fields.endpoints[..regions].iter_mut() {
                for endpoint in pair.iter_mut() {
                    endpoint[channel] = reader.read_u8(bit_count)?;
                }
            }
        }

        for p in fields.p_bits[..bc7_mode.p_bits as usize].iter_mut() {
            *p = reader.read_u8(1)?;
        }

        for plane in 0..fields.plane_count() {
            let bit_count = bc7_mode.plane_bits(plane) as usize;
            for pixel in 0..PIXELS_PER_BLOCK {
                let anchor = fields.is_anchor(plane, pixel) as usize;
                fields.indices[plane][pixel] = reader.read_u8(bit_count - anchor)?;
            }
        }

        debug_assert_eq!(reader.pos(), bc7_mode.bit_count());
        Ok(Some(fields))
    }

    /// Writes the code word into `output`, which must hold at least 16 bytes.
    ///
    /// Anchor indices must have their top bit clear; it is not stored.
    pub fn write(&self, output: &mut [u8]) {
        let bc7_mode = self.mode();
        let writer = &mut BitWriterLsb::new(output);

        writer.write_u8(self.mode as usize + 1, 1 << self.mode);
        writer.write_u8(bc7_mode.rotation_bits as usize, self.rotation);
        writer.write_u8(bc7_mode.index_mode_bits as usize, self.index_mode);
        writer.write_u8(bc7_mode.pat_bits as usize, self.shape);

        let regions = bc7_mode.regions();
        for channel in 0..4 {
            let bit_count = bc7_mode.color_bits[channel] as usize;
            for pair in self.endpoints[..regions].iter() {
                for endpoint in pair.iter() {
                    writer.write_u8(bit_count, endpoint[channel]);
                }
            }
        }

        for &p in self.p_bits[..bc7_mode.p_bits as usize].iter() {
            writer.write_bool(p != 0);
        }

        for plane in 0..self.plane_count() {
            let bit_count = bc7_mode.plane_bits(plane) as usize;
            for pixel in 0..PIXELS_PER_BLOCK {
                let index = self.indices[plane][pixel];
                let anchor = self.is_anchor(plane, pixel);
                debug_assert!(!anchor || index >> (bit_count - 1) == 0);
                writer.write_u8(bit_count - anchor as usize, index);
            }
        }

        debug_assert_eq!(writer.pos(), bc7_mode.bit_count());
    }

    pub fn plane_count(&self) -> usize {
        if self.mode().has_alpha_plane() {
            2
        } else {
            1
        }
    }

    /// Planes driving color and alpha, in that order, as selected by the index mode.
    pub fn planes(&self) -> (usize, usize) {
        match (self.mode().has_alpha_plane(), self.index_mode) {
            (false, _) => (0, 0),
            (true, 0) => (0, 1),
            (true, _) => (1, 0),
        }
    }

    /// Index precision of the color plane and of the separate alpha plane
    /// (0 when alpha shares the color index).
    pub fn palette_bits(&self) -> (u8, u8) {
        let bc7_mode = self.mode();
        let (color, alpha) = self.planes();
        if bc7_mode.has_alpha_plane() {
            (bc7_mode.plane_bits(color), bc7_mode.plane_bits(alpha))
        } else {
            (bc7_mode.index_bits, 0)
        }
    }

    pub fn region(&self, pixel: usize) -> usize {
        tables::region(self.mode().partitions as usize, self.shape as usize, pixel)
    }

    /// Whether the index of `pixel` on `plane` is stored without its top bit.
    pub fn is_anchor(&self, plane: usize, pixel: usize) -> bool {
        match plane {
            0 => tables::is_anchor(self.mode().partitions as usize, self.shape as usize, pixel),
            _ => pixel == 0,
        }
    }

    /// Anchor pixel of `region` on the color-index plane.
    pub fn anchor(&self, region: usize) -> usize {
        tables::anchors(self.mode().partitions as usize, self.shape as usize)[region] as usize
    }

    /// Endpoint `which` (0 or 1) of `region` expanded to 8 bits per channel.
    pub fn endpoint(&self, region: usize, which: usize) -> Color32 {
        let bc7_mode = self.mode();
        let raw = self.endpoints[region][which];
        let p = if bc7_mode.p_bits > 0 {
            self.p_bits[bc7_mode.p_bit_index(2 * region + which)]
        } else {
            0
        };

        let mut color = Color32::default();
        for channel in 0..4 {
            let value = if bc7_mode.has_p_bit(channel) {
                (raw[channel] << 1) | p
            } else {
                raw[channel]
            };
            color[channel] = unquantize(value, bc7_mode.endpoint_bits[channel]);
        }
        color
    }

    pub fn palette(&self, region: usize) -> Palette {
        let (color_bits, alpha_bits) = self.palette_bits();
        Palette::new(self.endpoint(region, 0), self.endpoint(region, 1), color_bits, alpha_bits)
    }

    /// Reconstructs the 16 pixels, rotation applied.
    pub fn to_pixels(&self) -> [Color32; 16] {
        let regions = self.mode().regions();
        let mut palettes = [None, None, None];
        for (region, palette) in palettes[..regions].iter_mut().enumerate() {
            *palette = Some(self.palette(region));
        }

        let (color_plane, alpha_plane) = self.planes();
        let mut pixels = [Color32::default(); 16];
        for (i, pixel) in pixels.iter_mut().enumerate() {
            if let Some(palette) = &palettes[self.region(i)] {
                *pixel = palette
                    .entry(self.indices[color_plane][i], self.indices[alpha_plane][i])
                    .rotated(self.rotation);
            }
        }
        pixels
    }
}
