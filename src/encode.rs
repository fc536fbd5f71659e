use tracing::trace;

use crate::{
    bc7::{Bc7Fields, Bc7Mode, BC7_MODES},
    color::ALPHA_CHANNEL,
    palette::{quantize, Palette},
    tables::{MAX_REGIONS, MAX_SHAPES},
    Color32, Error, Result, BC7_BLOCK_SIZE, PIXELS_PER_BLOCK,
};

/// Half-width of the window searched around converged endpoint values.
const EXHAUSTIVE_DELTA: u8 = 5;

/// Endpoint pairs of up to three regions at full 8-bit precision.
type EndpointPairs = [[Color32; 2]; MAX_REGIONS];

/// Encodes 16 pixels (row-major) into the code word with the smallest
/// squared reconstruction error found by the search.
pub fn encode_block(pixels: &[Color32; PIXELS_PER_BLOCK]) -> [u8; BC7_BLOCK_SIZE] {
    let mut block = [0; BC7_BLOCK_SIZE];
    search(pixels).write(&mut block);
    block
}

/// Encodes the 4x4 RGBA8 tile whose first row starts at byte `src_offset` of
/// `src`, with rows `src_stride` bytes apart, into `dst` at `dst_offset`.
pub fn encode_block_into(
    src: &[u8],
    src_offset: usize,
    src_stride: usize,
    dst: &mut [u8],
    dst_offset: usize,
) -> Result<()> {
    let dst_end = dst_offset.saturating_add(BC7_BLOCK_SIZE);
    if dst_end > dst.len() {
        return Err(Error::BufferTooSmall {
            needed: dst_end,
            actual: dst.len(),
        });
    }

    let mut pixels = [Color32::default(); PIXELS_PER_BLOCK];
    for (row, line) in pixels.chunks_exact_mut(4).enumerate() {
        let start = src_stride
            .checked_mul(row)
            .and_then(|offset| offset.checked_add(src_offset))
            .unwrap_or(usize::MAX);
        let end = start.saturating_add(4 * 4);
        let bytes = src
            .get(start..end)
            .ok_or(Error::BufferTooSmall {
                needed: end,
                actual: src.len(),
            })?;
        for (pixel, rgba) in line.iter_mut().zip(bytes.chunks_exact(4)) {
            *pixel = Color32::from_rgba_slice(rgba);
        }
    }

    dst[dst_offset..dst_end].copy_from_slice(&encode_block(&pixels));
    Ok(())
}

fn search(pixels: &[Color32; PIXELS_PER_BLOCK]) -> Bc7Fields {
    let mut best = Bc7Fields::default();
    let mut best_error = u32::MAX;

    'modes: for bc7_mode in BC7_MODES.iter() {
        for rotation in 0..bc7_mode.rotation_count() {
            let rotated = pixels.map(|p| p.rotated(rotation));

            for index_mode in 0..bc7_mode.index_mode_count() {
                let mut fields = Bc7Fields::new(bc7_mode.id);
                fields.rotation = rotation;
                fields.index_mode = index_mode;

                for shape in rank_shapes(&mut fields, &rotated) {
                    fields.shape = shape;
                    let (candidate, error) = refine(fields, &rotated);
                    if error < best_error {
                        trace!(
                            mode = bc7_mode.id,
                            rotation,
                            index_mode,
                            shape,
                            error,
                            "new best BC7 candidate"
                        );
                        best = candidate;
                        best_error = error;
                    }
                    if best_error == 0 {
                        trace!(mode = bc7_mode.id, "exact match, stopping search");
                        break 'modes;
                    }
                }
            }
        }
    }

    best
}

/// Shapes worth refining: the quarter with the lowest rough error, at least one.
fn rank_shapes(fields: &mut Bc7Fields, pixels: &[Color32; 16]) -> impl Iterator<Item = u8> {
    let shape_count = fields.mode().shape_count();
    let mut ranked = [(u32::MAX, 0u8); MAX_SHAPES];
    for (shape, rank) in ranked[..shape_count].iter_mut().enumerate() {
        fields.shape = shape as u8;
        let endpoints = rough_endpoints(fields, pixels);
        *rank = (rough_error(fields, &endpoints, pixels), shape as u8);
    }
    ranked[..shape_count].sort_unstable();

    let keep = (shape_count >> 2).max(1);
    ranked.into_iter().take(keep).map(|(_, shape)| shape)
}

fn region_pixels(
    fields: &Bc7Fields,
    pixels: &[Color32; 16],
    region: usize,
) -> ([Color32; 16], usize) {
    let mut members = [Color32::default(); 16];
    let mut count = 0;
    for (i, &pixel) in pixels.iter().enumerate() {
        if fields.region(i) == region {
            members[count] = pixel;
            count += 1;
        }
    }
    (members, count)
}

fn rough_endpoints(fields: &Bc7Fields, pixels: &[Color32; 16]) -> EndpointPairs {
    let bc7_mode = fields.mode();
    let mut endpoints = [[Color32::default(); 2]; MAX_REGIONS];
    for (region, pair) in endpoints[..bc7_mode.regions()].iter_mut().enumerate() {
        let (members, count) = region_pixels(fields, pixels, region);
        *pair = match &members[..count] {
            [] => [Color32::default(); 2],
            &[a] => [a, a],
            &[a, b] => [a, b],
            members => bounding_box(bc7_mode, members),
        };
    }
    endpoints
}

/// Corners of the box spanned by `members`, oriented along the diagonal that
/// follows the widest channel.
fn bounding_box(bc7_mode: &Bc7Mode, members: &[Color32]) -> [Color32; 2] {
    let mut lo = Color32::new(255, 255, 255, 255);
    let mut hi = Color32::new(0, 0, 0, 0);
    let mut sum = [0i32; 4];
    for pixel in members {
        for c in 0..4 {
            lo[c] = lo[c].min(pixel[c]);
            hi[c] = hi[c].max(pixel[c]);
            sum[c] += pixel[c] as i32;
        }
    }

    // A separate alpha plane, or no alpha at all, leaves alpha out of the orientation.
    let channels = if bc7_mode.has_alpha_plane() || bc7_mode.color_bits[ALPHA_CHANNEL] == 0 {
        3
    } else {
        4
    };
    let widest = (0..channels).max_by_key(|&c| hi[c] - lo[c]).unwrap_or(0);

    let n = members.len() as i32;
    let mut e0 = lo;
    let mut e1 = hi;
    for c in (0..channels).filter(|&c| c != widest) {
        let covariance: i32 = members
            .iter()
            .map(|p| (p[c] as i32 * n - sum[c]) * (p[widest] as i32 * n - sum[widest]))
            .sum();
        if covariance < 0 {
            core::mem::swap(&mut e0[c], &mut e1[c]);
        }
    }
    [e0, e1]
}

fn rough_error(fields: &Bc7Fields, endpoints: &EndpointPairs, pixels: &[Color32; 16]) -> u32 {
    let (color_bits, alpha_bits) = fields.palette_bits();
    let regions = fields.mode().regions();
    let mut palettes = [None, None, None];
    for (pair, palette) in endpoints[..regions].iter().zip(palettes.iter_mut()) {
        *palette = Some(Palette::new(pair[0], pair[1], color_bits, alpha_bits));
    }

    pixels
        .iter()
        .enumerate()
        .filter_map(|(i, &pixel)| {
            palettes[fields.region(i)]
                .as_ref()
                .map(|p| p.nearest(pixel).error)
        })
        .sum()
}

/// Quantizes the rough endpoints for `fields.shape`, then optimizes them.
/// Returns the better of the two candidates with its exact error.
fn refine(mut fields: Bc7Fields, pixels: &[Color32; 16]) -> (Bc7Fields, u32) {
    let rough = rough_endpoints(&fields, pixels);
    quantize_endpoints(&mut fields, &rough);
    let error = assign_indices(&mut fields, pixels);
    if error == 0 {
        return (fields, 0);
    }

    let mut optimized = fields;
    for region in 0..fields.mode().regions() {
        optimize_region(&mut optimized, pixels, region);
    }
    let optimized_error = assign_indices(&mut optimized, pixels);

    if optimized_error < error {
        (optimized, optimized_error)
    } else {
        (fields, error)
    }
}

/// Stores `rough` at the mode's precision. Each parity bit takes the majority
/// of the low bits it stands in for.
fn quantize_endpoints(fields: &mut Bc7Fields, rough: &EndpointPairs) {
    let bc7_mode = fields.mode();
    let mut votes = [[0u8; 2]; 6];

    for region in 0..bc7_mode.regions() {
        for which in 0..2 {
            let p_bit = bc7_mode.p_bit_index(2 * region + which);
            for c in 0..4 {
                let bits = bc7_mode.endpoint_bits[c];
                let q = quantize(rough[region][which][c], bits);
                fields.endpoints[region][which][c] = if bc7_mode.has_p_bit(c) {
                    votes[p_bit][(q & 1) as usize] += 1;
                    q >> 1
                } else {
                    q
                };
            }
        }
    }

    for (p, vote) in fields.p_bits.iter_mut().zip(votes.iter()).take(bc7_mode.p_bits as usize) {
        *p = (vote[1] > vote[0]) as u8;
    }
}

/// Picks the nearest palette entry for every pixel, then flips regions whose
/// anchor index would need its omitted top bit. Returns the total error.
fn assign_indices(fields: &mut Bc7Fields, pixels: &[Color32; 16]) -> u32 {
    let bc7_mode = fields.mode();
    let regions = bc7_mode.regions();
    let mut palettes = [None, None, None];
    for (region, palette) in palettes[..regions].iter_mut().enumerate() {
        *palette = Some(fields.palette(region));
    }

    let (color_plane, alpha_plane) = fields.planes();
    let mut error = 0;
    for (i, &pixel) in pixels.iter().enumerate() {
        if let Some(palette) = &palettes[fields.region(i)] {
            let nearest = palette.nearest(pixel);
            fields.indices[color_plane][i] = nearest.color;
            fields.indices[alpha_plane][i] = nearest.alpha;
            error += nearest.error;
        }
    }

    let color_channels = if bc7_mode.has_alpha_plane() { 3 } else { 4 };
    for (region, palette) in palettes[..regions].iter().enumerate() {
        let color_len = palette.as_ref().map_or(0, Palette::color_len) as u8;
        if fields.indices[color_plane][fields.anchor(region)] >= color_len / 2 {
            swap_endpoints(fields, region, 0..color_channels);
            for i in 0..PIXELS_PER_BLOCK {
                if fields.region(i) == region {
                    fields.indices[color_plane][i] = color_len - 1 - fields.indices[color_plane][i];
                }
            }
        }
    }

    if bc7_mode.has_alpha_plane() {
        let alpha_len = palettes[0].as_ref().map_or(0, Palette::alpha_len) as u8;
        if fields.indices[alpha_plane][0] >= alpha_len / 2 {
            swap_endpoints(fields, 0, ALPHA_CHANNEL..ALPHA_CHANNEL + 1);
            for index in fields.indices[alpha_plane].iter_mut() {
                *index = alpha_len - 1 - *index;
            }
        }
    }

    error
}

fn swap_endpoints(fields: &mut Bc7Fields, region: usize, channels: core::ops::Range<usize>) {
    let bc7_mode = fields.mode();
    let [e0, e1] = &mut fields.endpoints[region];
    for c in channels {
        core::mem::swap(&mut e0[c], &mut e1[c]);
    }
    if bc7_mode.p_bits > 0 {
        let p0 = bc7_mode.p_bit_index(2 * region);
        let p1 = bc7_mode.p_bit_index(2 * region + 1);
        fields.p_bits.swap(p0, p1);
    }
}

/// Squared error of the pixels of `region`. Stops summing once `bound` is
/// exceeded, so any result above `bound` only means "worse".
fn region_error(fields: &Bc7Fields, pixels: &[Color32; 16], region: usize, bound: u32) -> u32 {
    let palette = fields.palette(region);
    let mut error = 0u32;
    for (i, &pixel) in pixels.iter().enumerate() {
        if fields.region(i) == region {
            error += palette.nearest(pixel).error;
            if error > bound {
                break;
            }
        }
    }
    error
}

fn optimize_region(fields: &mut Bc7Fields, pixels: &[Color32; 16], region: usize) {
    let bc7_mode = fields.mode();
    let mut error = region_error(fields, pixels, region, u32::MAX);
    for channel in 0..4 {
        if error == 0 {
            break;
        }
        if bc7_mode.color_bits[channel] == 0 {
            continue;
        }
        error = optimize_channel(fields, pixels, region, channel, error);
        error = exhaustive(fields, pixels, region, channel, error);
    }
}

/// Logarithmic search on one endpoint value: tries `value +- step` for halving
/// steps. Returns the improved value and error, leaving `fields` unchanged.
fn perturb(
    fields: &mut Bc7Fields,
    pixels: &[Color32; 16],
    region: usize,
    channel: usize,
    which: usize,
    error: u32,
) -> Option<(u8, u32)> {
    let bits = fields.mode().color_bits[channel];
    let max = ((1u16 << bits) - 1) as u8;
    let original = fields.endpoints[region][which][channel];

    let mut best = (original, error);
    let mut step = 1u8 << (bits - 1);
    while step > 0 {
        let center = best.0;
        let down = center.checked_sub(step);
        let up = center.checked_add(step).filter(|&v| v <= max);
        for candidate in [down, up].into_iter().flatten() {
            fields.endpoints[region][which][channel] = candidate;
            let candidate_error = region_error(fields, pixels, region, best.1);
            if candidate_error < best.1 {
                best = (candidate, candidate_error);
            }
        }
        step >>= 1;
    }

    fields.endpoints[region][which][channel] = original;
    (best.1 < error).then_some(best)
}

/// Perturbs endpoint A or B, whichever improves more, then alternates between
/// them while the error keeps dropping.
fn optimize_channel(
    fields: &mut Bc7Fields,
    pixels: &[Color32; 16],
    region: usize,
    channel: usize,
    mut error: u32,
) -> u32 {
    let a = perturb(fields, pixels, region, channel, 0, error);
    let b = perturb(fields, pixels, region, channel, 1, error);

    let mut which = match (a, b) {
        (Some((value, a_error)), b) if b.map_or(true, |(_, b_error)| a_error < b_error) => {
            fields.endpoints[region][0][channel] = value;
            error = a_error;
            1
        }
        (_, Some((value, b_error))) => {
            fields.endpoints[region][1][channel] = value;
            error = b_error;
            0
        }
        _ => return error,
    };

    while let Some((value, new_error)) = perturb(fields, pixels, region, channel, which, error) {
        fields.endpoints[region][which][channel] = value;
        error = new_error;
        which ^= 1;
    }
    error
}

/// Tries every pair within `EXHAUSTIVE_DELTA` of the current values that keeps
/// A and B in the same order.
fn exhaustive(
    fields: &mut Bc7Fields,
    pixels: &[Color32; 16],
    region: usize,
    channel: usize,
    error: u32,
) -> u32 {
    if error == 0 {
        return 0;
    }

    let bits = fields.mode().color_bits[channel];
    let max = ((1u16 << bits) - 1) as u8;
    let window = |v: u8| {
        let lo = v.saturating_sub(EXHAUSTIVE_DELTA);
        let hi = v.saturating_add(EXHAUSTIVE_DELTA).min(max);
        (lo, hi)
    };

    let a = fields.endpoints[region][0][channel];
    let b = fields.endpoints[region][1][channel];
    let (a_lo, a_hi) = window(a);
    let (b_lo, b_hi) = window(b);

    let mut best = (a, b, error);
    for a2 in a_lo..=a_hi {
        let (lo, hi) = if a <= b { (b_lo.max(a2), b_hi) } else { (b_lo, b_hi.min(a2)) };
        for b2 in lo..=hi {
            if (a2, b2) == (a, b) {
                continue;
            }
            fields.endpoints[region][0][channel] = a2;
            fields.endpoints[region][1][channel] = b2;
            let candidate_error = region_error(fields, pixels, region, best.2);
            if candidate_error < best.2 {
                best = (a2, b2, candidate_error);
            }
        }
    }

    fields.endpoints[region][0][channel] = best.0;
    fields.endpoints[region][1][channel] = best.1;
    best.2
}
