//! Published BC7 partition, fix-up and interpolation weight tables.
//!
//! These values define the wire format; any deviation breaks interoperability
//! with other BC7 encoders and decoders.

pub(crate) const MAX_SHAPES: usize = 64;
pub(crate) const MAX_REGIONS: usize = 3;

pub(crate) const WEIGHT_MAX: u32 = 64;
pub(crate) const WEIGHT_ROUND: u32 = 32;
pub(crate) const WEIGHT_SHIFT: u32 = 6;

#[rustfmt::skip]
pub(crate) static WEIGHTS_2: [u8; 4] = [0, 21, 43, 64];
#[rustfmt::skip]
pub(crate) static WEIGHTS_3: [u8; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
#[rustfmt::skip]
pub(crate) static WEIGHTS_4: [u8; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Interpolation weights for an index of `bits` bits (2, 3 or 4).
pub(crate) fn weights(bits: u8) -> &'static [u8] {
    match bits {
        2 => &WEIGHTS_2,
        3 => &WEIGHTS_3,
        4 => &WEIGHTS_4,
        _ => unreachable!("no BC7 index has {} bits", bits),
    }
}

/// Region of `pixel` for a block with `partitions + 1` regions and the given shape.
pub(crate) fn region(partitions: usize, shape: usize, pixel: usize) -> usize {
    PARTITION_TABLE[partitions][shape][pixel] as usize
}

/// Anchor pixel positions, one per region, for the given shape.
pub(crate) fn anchors(partitions: usize, shape: usize) -> &'static [u8] {
    &FIXUP_TABLE[partitions][shape][..=partitions]
}

/// Whether `pixel` is the anchor of its region, whose index omits the top bit.
pub(crate) fn is_anchor(partitions: usize, shape: usize, pixel: usize) -> bool {
    anchors(partitions, shape).iter().any(|&a| a as usize == pixel)
}

#[rustfmt::skip]
pub(crate) static PARTITION_TABLE: [[[u8; 16]; MAX_SHAPES]; 3] = [
    // One region: every pixel belongs to region 0
    [[0; 16]; MAX_SHAPES],
    // Two regions
    [
        [ 0,0,1,1,0,0,1,1,0,0,1,1,0,0,1,1 ], [ 0,0,0,1,0,0,0,1,0,0,0,1,0,0,0,1 ],
        [ 0,1,1,1,0,1,1,1,0,1,1,1,0,1,1,1 ], [ 0,0,0,1,0,0,1,1,0,0,1,1,0,1,1,1 ],
        [ 0,0,0,0,0,0,0,1,0,0,0,1,0,0,1,1 ], [ 0,0,1,1,0,1,1,1,0,1,1,1,1,1,1,1 ],
        [ 0,0,0,1,0,0,1,1,0,1,1,1,1,1,1,1 ], [ 0,0,0,0,0,0,0,1,0,0,1,1,0,1,1,1 ],
        [ 0,0,0,0,0,0,0,0,0,0,0,1,0,0,1,1 ], [ 0,0,1,1,0,1,1,1,1,1,1,1,1,1,1,1 ],
        [ 0,0,0,0,0,0,0,1,0,1,1,1,1,1,1,1 ], [ 0,0,0,0,0,0,0,0,0,0,0,1,0,1,1,1 ],
        [ 0,0,0,1,0,1,1,1,1,1,1,1,1,1,1,1 ], [ 0,0,0,0,0,0,0,0,1,1,1,1,1,1,1,1 ],
        [ 0,0,0,0,1,1,1,1,1,1,1,1,1,1,1,1 ], [ 0,0,0,0,0,0,0,0,0,0,0,0,1,1,1,1 ],
        [ 0,0,0,0,1,0,0,0,1,1,1,0,1,1,1,1 ], [ 0,1,1,1,0,0,0,1,0,0,0,0,0,0,0,0 ],
        [ 0,0,0,0,0,0,0,0,1,0,0,0,1,1,1,0 ], [ 0,1,1,1,0,0,1,1,0,0,0,1,0,0,0,0 ],
        [ 0,0,1,1,0,0,0,1,0,0,0,0,0,0,0,0 ], [ 0,0,0,0,1,0,0,0,1,1,0,0,1,1,1,0 ],
        [ 0,0,0,0,0,0,0,0,1,0,0,0,1,1,0,0 ], [ 0,1,1,1,0,0,1,1,0,0,1,1,0,0,0,1 ],
        [ 0,0,1,1,0,0,0,1,0,0,0,1,0,0,0,0 ], [ 0,0,0,0,1,0,0,0,1,0,0,0,1,1,0,0 ],
        [ 0,1,1,0,0,1,1,0,0,1,1,0,0,1,1,0 ], [ 0,0,1,1,0,1,1,0,0,1,1,0,1,1,0,0 ],
        [ 0,0,0,1,0,1,1,1,1,1,1,0,1,0,0,0 ], [ 0,0,0,0,1,1,1,1,1,1,1,1,0,0,0,0 ],
        [ 0,1,1,1,0,0,0,1,1,0,0,0,1,1,1,0 ], [ 0,0,1,1,1,0,0,1,1,0,0,1,1,1,0,0 ],
        [ 0,1,0,1,0,1,0,1,0,1,0,1,0,1,0,1 ], [ 0,0,0,0,1,1,1,1,0,0,0,0,1,1,1,1 ],
        [ 0,1,0,1,1,0,1,0,0,1,0,1,1,0,1,0 ], [ 0,0,1,1,0,0,1,1,1,1,0,0,1,1,0,0 ],
        [ 0,0,1,1,1,1,0,0,0,0,1,1,1,1,0,0 ], [ 0,1,0,1,0,1,0,1,1,0,1,0,1,0,1,0 ],
        [ 0,1,1,0,1,0,0,1,0,1,1,0,1,0,0,1 ], [ 0,1,0,1,1,0,1,0,1,0,1,0,0,1,0,1 ],
        [ 0,1,1,1,0,0,1,1,1,1,0,0,1,1,1,0 ], [ 0,0,0,1,0,0,1,1,1,1,0,0,1,0,0,0 ],
        [ 0,0,1,1,0,0,1,0,0,1,0,0,1,1,0,0 ], [ 0,0,1,1,1,0,1,1,1,1,0,1,1,1,0,0 ],
        [ 0,1,1,0,1,0,0,1,1,0,0,1,0,1,1,0 ], [ 0,0,1,1,1,1,0,0,1,1,0,0,0,0,1,1 ],
        [ 0,1,1,0,0,1,1,0,1,0,0,1,1,0,0,1 ], [ 0,0,0,0,0,1,1,0,0,1,1,0,0,0,0,0 ],
        [ 0,1,0,0,1,1,1,0,0,1,0,0,0,0,0,0 ], [ 0,0,1,0,0,1,1,1,0,0,1,0,0,0,0,0 ],
        [ 0,0,0,0,0,0,1,0,0,1,1,1,0,0,1,0 ], [ 0,0,0,0,0,1,0,0,1,1,1,0,0,1,0,0 ],
        [ 0,1,1,0,1,1,0,0,1,0,0,1,0,0,1,1 ], [ 0,0,1,1,0,1,1,0,1,1,0,0,1,0,0,1 ],
        [ 0,1,1,0,0,0,1,1,1,0,0,1,1,1,0,0 ], [ 0,0,1,1,1,0,0,1,1,1,0,0,0,1,1,0 ],
        [ 0,1,1,0,1,1,0,0,1,1,0,0,1,0,0,1 ], [ 0,1,1,0,0,0,1,1,0,0,1,1,1,0,0,1 ],
        [ 0,1,1,1,1,1,1,0,1,0,0,0,0,0,0,1 ], [ 0,0,0,1,1,0,0,0,1,1,1,0,0,1,1,1 ],
        [ 0,0,0,0,1,1,1,1,0,0,1,1,0,0,1,1 ], [ 0,0,1,1,0,0,1,1,1,1,1,1,0,0,0,0 ],
        [ 0,0,1,0,0,0,1,0,1,1,1,0,1,1,1,0 ], [ 0,1,0,0,0,1,0,0,0,1,1,1,0,1,1,1 ],
    ],
    // Three regions
    [
        [ 0,0,1,1,0,0,1,1,0,2,2,1,2,2,2,2 ], [ 0,0,0,1,0,0,1,1,2,2,1,1,2,2,2,1 ],
        [ 0,0,0,0,2,0,0,1,2,2,1,1,2,2,1,1 ], [ 0,2,2,2,0,0,2,2,0,0,1,1,0,1,1,1 ],
        [ 0,0,0,0,0,0,0,0,1,1,2,2,1,1,2,2 ], [ 0,0,1,1,0,0,1,1,0,0,2,2,0,0,2,2 ],
        [ 0,0,2,2,0,0,2,2,1,1,1,1,1,1,1,1 ], [ 0,0,1,1,0,0,1,1,2,2,1,1,2,2,1,1 ],
        [ 0,0,0,0,0,0,0,0,1,1,1,1,2,2,2,2 ], [ 0,0,0,0,1,1,1,1,1,1,1,1,2,2,2,2 ],
        [ 0,0,0,0,1,1,1,1,2,2,2,2,2,2,2,2 ], [ 0,0,1,2,0,0,1,2,0,0,1,2,0,0,1,2 ],
        [ 0,1,1,2,0,1,1,2,0,1,1,2,0,1,1,2 ], [ 0,1,2,2,0,1,2,2,0,1,2,2,0,1,2,2 ],
        [ 0,0,1,1,0,1,1,2,1,1,2,2,1,2,2,2 ], [ 0,0,1,1,2,0,0,1,2,2,0,0,2,2,2,0 ],
        [ 0,0,0,1,0,0,1,1,0,1,1,2,1,1,2,2 ], [ 0,1,1,1,0,0,1,1,2,0,0,1,2,2,0,0 ],
        [ 0,0,0,0,1,1,2,2,1,1,2,2,1,1,2,2 ], [ 0,0,2,2,0,0,2,2,0,0,2,2,1,1,1,1 ],
        [ 0,1,1,1,0,1,1,1,0,2,2,2,0,2,2,2 ], [ 0,0,0,1,0,0,0,1,2,2,2,1,2,2,2,1 ],
        [ 0,0,0,0,0,0,1,1,0,1,2,2,0,1,2,2 ], [ 0,0,0,0,1,1,0,0,2,2,1,0,2,2,1,0 ],
        [ 0,1,2,2,0,1,2,2,0,0,1,1,0,0,0,0 ], [ 0,0,1,2,0,0,1,2,1,1,2,2,2,2,2,2 ],
        [ 0,1,1,0,1,2,2,1,1,2,2,1,0,1,1,0 ], [ 0,0,0,0,0,1,1,0,1,2,2,1,1,2,2,1 ],
        [ 0,0,2,2,1,1,0,2,1,1,0,2,0,0,2,2 ], [ 0,1,1,0,0,1,1,0,2,0,0,2,2,2,2,2 ],
        [ 0,0,1,1,0,1,2,2,0,1,2,2,0,0,1,1 ], [ 0,0,0,0,2,0,0,0,2,2,1,1,2,2,2,1 ],
        [ 0,0,0,0,0,0,0,2,1,1,2,2,1,2,2,2 ], [ 0,2,2,2,0,0,2,2,0,0,1,2,0,0,1,1 ],
        [ 0,0,1,1,0,0,1,2,0,0,2,2,0,2,2,2 ], [ 0,1,2,0,0,1,2,0,0,1,2,0,0,1,2,0 ],
        [ 0,0,0,0,1,1,1,1,2,2,2,2,0,0,0,0 ], [ 0,1,2,0,1,2,0,1,2,0,1,2,0,1,2,0 ],
        [ 0,1,2,0,2,0,1,2,1,2,0,1,0,1,2,0 ], [ 0,0,1,1,2,2,0,0,1,1,2,2,0,0,1,1 ],
        [ 0,0,1,1,1,1,2,2,2,2,0,0,0,0,1,1 ], [ 0,1,0,1,0,1,0,1,2,2,2,2,2,2,2,2 ],
        [ 0,0,0,0,0,0,0,0,2,1,2,1,2,1,2,1 ], [ 0,0,2,2,1,1,2,2,0,0,2,2,1,1,2,2 ],
        [ 0,0,2,2,0,0,1,1,0,0,2,2,0,0,1,1 ], [ 0,2,2,0,1,2,2,1,0,2,2,0,1,2,2,1 ],
        [ 0,1,0,1,2,2,2,2,2,2,2,2,0,1,0,1 ], [ 0,0,0,0,2,1,2,1,2,1,2,1,2,1,2,1 ],
        [ 0,1,0,1,0,1,0,1,0,1,0,1,2,2,2,2 ], [ 0,2,2,2,0,1,1,1,0,2,2,2,0,1,1,1 ],
        [ 0,0,0,2,1,1,1,2,0,0,0,2,1,1,1,2 ], [ 0,0,0,0,2,1,1,2,2,1,1,2,2,1,1,2 ],
        [ 0,2,2,2,0,1,1,1,0,1,1,1,0,2,2,2 ], [ 0,0,0,2,1,1,1,2,1,1,1,2,0,0,0,2 ],
        [ 0,1,1,0,0,1,1,0,0,1,1,0,2,2,2,2 ], [ 0,0,0,0,0,0,0,0,2,1,1,2,2,1,1,2 ],
        [ 0,1,1,0,0,1,1,0,2,2,2,2,2,2,2,2 ], [ 0,0,2,2,0,0,1,1,0,0,1,1,0,0,2,2 ],
        [ 0,0,2,2,1,1,2,2,1,1,2,2,0,0,2,2 ], [ 0,0,0,0,0,0,0,0,0,0,0,0,2,1,1,2 ],
        [ 0,0,0,2,0,0,0,1,0,0,0,2,0,0,0,1 ], [ 0,2,2,2,1,2,2,2,0,2,2,2,1,2,2,2 ],
        [ 0,1,0,1,2,2,2,2,2,2,2,2,2,2,2,2 ], [ 0,1,1,1,2,0,1,1,2,2,0,1,2,2,2,0 ],
    ],
];

#[rustfmt::skip]
pub(crate) static FIXUP_TABLE: [[[u8; 3]; MAX_SHAPES]; 3] = [
    [[0; 3]; MAX_SHAPES],
    [
        [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0],
        [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0],
        [0, 15,  0], [0,  2,  0], [0,  8,  0], [0,  2,  0], [0,  2,  0], [0,  8,  0], [0,  8,  0], [0, 15,  0],
        [0,  2,  0], [0,  8,  0], [0,  2,  0], [0,  2,  0], [0,  8,  0], [0,  8,  0], [0,  2,  0], [0,  2,  0],
        [0, 15,  0], [0, 15,  0], [0,  6,  0], [0,  8,  0], [0,  2,  0], [0,  8,  0], [0, 15,  0], [0, 15,  0],
        [0,  2,  0], [0,  8,  0], [0,  2,  0], [0,  2,  0], [0,  2,  0], [0, 15,  0], [0, 15,  0], [0,  6,  0],
        [0,  6,  0], [0,  2,  0], [0,  6,  0], [0,  8,  0], [0, 15,  0], [0, 15,  0], [0,  2,  0], [0,  2,  0],
        [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0, 15,  0], [0,  2,  0], [0,  2,  0], [0, 15,  0],
    ],
    [
        [0,  3, 15], [0,  3,  8], [0, 15,  8], [0, 15,  3], [0,  8, 15], [0,  3, 15], [0, 15,  3], [0, 15,  8],
        [0,  8, 15], [0,  8, 15], [0,  6, 15], [0,  6, 15], [0,  6, 15], [0,  5, 15], [0,  3, 15], [0,  3,  8],
        [0,  3, 15], [0,  3,  8], [0,  8, 15], [0, 15,  3], [0,  3, 15], [0,  3,  8], [0,  6, 15], [0, 10,  8],
        [0,  5,  3], [0,  8, 15], [0,  8,  6], [0,  6, 10], [0,  8, 15], [0,  5, 15], [0, 15, 10], [0, 15,  8],
        [0,  8, 15], [0, 15,  3], [0,  3, 15], [0,  5, 10], [0,  6, 10], [0, 10,  8], [0,  8,  9], [0, 15, 10],
        [0, 15,  6], [0,  3, 15], [0, 15,  8], [0,  5, 15], [0, 15,  3], [0, 15,  6], [0, 15,  6], [0, 15,  8],
        [0,  3, 15], [0, 15,  3], [0,  5, 15], [0,  5, 15], [0,  5, 15], [0,  8, 15], [0,  5, 15], [0, 10, 15],
        [0,  5, 15], [0, 10, 15], [0,  8, 15], [0, 13, 15], [0, 15,  3], [0, 12, 15], [0,  3, 15], [0,  3,  8],
    ],
];
