use crate::{
    color::ALPHA_CHANNEL,
    tables::{self, WEIGHT_MAX, WEIGHT_ROUND, WEIGHT_SHIFT},
    Color32,
};

/// Reduces an 8-bit channel to `bits` bits, rounding to nearest.
pub(crate) fn quantize(value: u8, bits: u8) -> u8 {
    match bits {
        0 => 0,
        8 => value,
        _ => {
            let rounded = (value as u32 + (1 << (7 - bits))).min(255);
            (rounded >> (8 - bits)) as u8
        }
    }
}

/// Expands a `bits`-bit channel back to 8 bits by replicating its top bits
/// into the vacated low bits. A channel without precision is fully saturated.
pub(crate) fn unquantize(value: u8, bits: u8) -> u8 {
    match bits {
        0 => 255,
        8 => value,
        _ => {
            let t = (value as u32) << (8 - bits);
            (t | (t >> bits)) as u8
        }
    }
}

pub(crate) fn interpolate(e0: u8, e1: u8, weight: u8) -> u8 {
    let w = weight as u32;
    ((e0 as u32 * (WEIGHT_MAX - w) + e1 as u32 * w + WEIGHT_ROUND) >> WEIGHT_SHIFT) as u8
}

pub(crate) fn squared_distance(a: Color32, b: Color32, channels: usize) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .take(channels)
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Nearest {
    pub color: u8,
    pub alpha: u8,
    pub error: u32,
}

/// The colors one region can reproduce: interpolations between its two
/// endpoints at the precision of the index planes.
///
/// With a separate alpha plane the color entries cover R, G and B only and
/// alpha is looked up in its own, independently indexed, list.
#[derive(Clone, Debug)]
pub(crate) struct Palette {
    colors: [Color32; 16],
    color_len: usize,
    alphas: [u8; 16],
    alpha_len: usize,
}

impl Palette {
    /// `alpha_bits == 0` means alpha shares the color index.
    pub(crate) fn new(e0: Color32, e1: Color32, color_bits: u8, alpha_bits: u8) -> Self {
        let mut colors = [Color32::default(); 16];
        let color_weights = tables::weights(color_bits);
        for (color, &w) in colors.iter_mut().zip(color_weights) {
            for c in 0..4 {
                color[c] = interpolate(e0[c], e1[c], w);
            }
        }

        let mut alphas = [0; 16];
        let mut alpha_len = 0;
        if alpha_bits > 0 {
            let alpha_weights = tables::weights(alpha_bits);
            for (alpha, &w) in alphas.iter_mut().zip(alpha_weights) {
                *alpha = interpolate(e0[ALPHA_CHANNEL], e1[ALPHA_CHANNEL], w);
            }
            alpha_len = alpha_weights.len();
        }

        Self {
            colors,
            color_len: color_weights.len(),
            alphas,
            alpha_len,
        }
    }

    pub(crate) fn color_len(&self) -> usize {
        self.color_len
    }

    pub(crate) fn alpha_len(&self) -> usize {
        if self.has_alpha_plane() {
            self.alpha_len
        } else {
            self.color_len
        }
    }

    fn has_alpha_plane(&self) -> bool {
        self.alpha_len > 0
    }

    /// Reconstructed sample for a pair of indices. Without a separate alpha
    /// plane `alpha_index` is ignored.
    pub(crate) fn entry(&self, color_index: u8, alpha_index: u8) -> Color32 {
        let mut color = self.colors[color_index as usize];
        if self.has_alpha_plane() {
            color[ALPHA_CHANNEL] = self.alphas[alpha_index as usize];
        }
        color
    }

    /// Closest entry to `pixel` and its squared error.
    pub(crate) fn nearest(&self, pixel: Color32) -> Nearest {
        if !self.has_alpha_plane() {
            let (color, error) = self.nearest_color(pixel, 4);
            return Nearest {
                color,
                alpha: color,
                error,
            };
        }

        let (color, color_error) = self.nearest_color(pixel, 3);

        let mut alpha = 0;
        let mut alpha_error = u32::MAX;
        for (i, &a) in self.alphas[..self.alpha_len].iter().enumerate() {
            let d = a as i32 - pixel[ALPHA_CHANNEL] as i32;
            let error = (d * d) as u32;
            if error < alpha_error {
                alpha = i as u8;
                alpha_error = error;
                if error == 0 {
                    break;
                }
            }
        }

        Nearest {
            color,
            alpha,
            error: color_error + alpha_error,
        }
    }

    fn nearest_color(&self, pixel: Color32, channels: usize) -> (u8, u32) {
        let mut best = 0;
        let mut best_error = u32::MAX;
        for (i, &color) in self.colors[..self.color_len].iter().enumerate() {
            let error = squared_distance(color, pixel, channels);
            if error < best_error {
                best = i as u8;
                best_error = error;
                if error == 0 {
                    break;
                }
            }
        }
        (best, best_error)
    }
}
