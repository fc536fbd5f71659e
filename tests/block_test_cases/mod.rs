#![allow(dead_code)]

use core::fmt;

/// Code words covering every mode, with the pixels they decode to.
#[rustfmt::skip]
pub static BC7_DECODE_CASES: [([u8; 16], [[u8; 4]; 16]); 16] = [
    // mode 0, rotation 0, index mode 0, shape 12
    (
        [0x39, 0x36, 0x5A, 0x46, 0x42, 0xA4, 0x6F, 0xAC, 0x2F, 0x22, 0x5C, 0xA1, 0x52, 0x13, 0xEC, 0xEE],
        [
            [90, 30, 75, 255], [72, 33, 186, 255], [44, 33, 200, 255], [47, 161, 21, 255],
            [68, 34, 69, 255], [44, 33, 200, 255], [44, 33, 200, 255], [50, 149, 22, 255],
            [46, 37, 63, 255], [44, 33, 200, 255], [16, 33, 214, 255], [43, 176, 19, 255],
            [181, 16, 99, 255], [186, 33, 129, 255], [158, 33, 143, 255], [43, 176, 19, 255],
        ],
    ),
    // mode 0, rotation 0, index mode 0, shape 9
    (
        [0xF3, 0x44, 0xA5, 0xBE, 0xD2, 0x47, 0xFB, 0x3E, 0x9B, 0xC2, 0x27, 0x7C, 0xC0, 0xEB, 0xE2, 0x15],
        [
            [115, 82, 115, 255], [105, 92, 135, 255], [72, 125, 196, 255], [41, 156, 255, 255],
            [154, 213, 165, 255], [173, 239, 156, 255], [97, 134, 194, 255], [41, 57, 222, 255],
            [136, 188, 175, 255], [60, 83, 213, 255], [78, 108, 203, 255], [173, 239, 156, 255],
            [255, 222, 24, 255], [209, 208, 38, 255], [136, 187, 60, 255], [90, 173, 74, 255],
        ],
    ),
    // mode 1, rotation 0, index mode 0, shape 27
    (
        [0x6E, 0xA4, 0xAC, 0xCC, 0x90, 0x5C, 0x8D, 0xDF, 0x9F, 0x47, 0xDF, 0xA7, 0x48, 0x1B, 0x2E, 0x12],
        [
            [171, 124, 180, 255], [187, 164, 219, 255], [112, 110, 163, 255], [112, 110, 163, 255],
            [163, 105, 162, 255], [65, 94, 208, 255], [88, 102, 186, 255], [163, 105, 162, 255],
            [171, 124, 180, 255], [112, 110, 163, 255], [42, 86, 231, 255], [203, 203, 255, 255],
            [88, 102, 186, 255], [137, 119, 138, 255], [179, 145, 201, 255], [147, 66, 126, 255],
        ],
    ),
    // mode 1, rotation 0, index mode 0, shape 47
    (
        [0xBE, 0xA8, 0x3E, 0xF7, 0x90, 0x2C, 0xCF, 0x86, 0xDC, 0x1C, 0x74, 0xA5, 0x00, 0x4A, 0x91, 0x59],
        [
            [171, 83, 49, 255], [233, 201, 201, 255], [181, 103, 74, 255], [171, 83, 49, 255],
            [213, 162, 151, 255], [205, 201, 52, 255], [205, 201, 52, 255], [161, 64, 24, 255],
            [181, 103, 74, 255], [211, 202, 49, 255], [234, 204, 35, 255], [161, 64, 24, 255],
            [171, 83, 49, 255], [191, 122, 99, 255], [223, 182, 176, 255], [181, 103, 74, 255],
        ],
    ),
    // mode 2, rotation 0, index mode 0, shape 46
    (
        [0x74, 0xFD, 0xF7, 0x09, 0x86, 0xD3, 0xA7, 0xF1, 0xED, 0xF8, 0x52, 0xD5, 0x85, 0x28, 0xB3, 0x3A],
        [
            [247, 57, 57, 255], [247, 156, 41, 255], [252, 179, 185, 255], [247, 156, 41, 255],
            [49, 153, 154, 255], [49, 153, 154, 255], [132, 247, 82, 255], [49, 153, 154, 255],
            [91, 201, 117, 255], [49, 153, 154, 255], [91, 201, 117, 255], [91, 201, 117, 255],
            [250, 117, 119, 255], [74, 49, 173, 255], [250, 117, 119, 255], [247, 156, 41, 255],
        ],
    ),
    // mode 2, rotation 0, index mode 0, shape 3
    (
        [0x1C, 0x02, 0xE4, 0xC5, 0xD5, 0xC8, 0xAC, 0xF3, 0xCD, 0xDB, 0x6B, 0x98, 0xB7, 0xB8, 0x5B, 0x7E],
        [
            [8, 140, 247, 255], [173, 107, 247, 255], [154, 153, 198, 255], [115, 247, 99, 255],
            [8, 140, 247, 255], [132, 99, 181, 255], [134, 201, 148, 255], [173, 107, 247, 255],
            [49, 127, 225, 255], [132, 99, 181, 255], [103, 137, 95, 255], [231, 181, 189, 255],
            [132, 99, 181, 255], [41, 115, 49, 255], [41, 115, 49, 255], [231, 181, 189, 255],
        ],
    ),
    // mode 3, rotation 0, index mode 0, shape 16
    (
        [0x08, 0x1D, 0x4A, 0xA7, 0x81, 0x29, 0x1F, 0xD2, 0xDC, 0xB3, 0x85, 0x51, 0xCC, 0xF4, 0xF0, 0x8B],
        [
            [34, 131, 219, 255], [34, 131, 219, 255], [55, 188, 198, 255], [34, 131, 219, 255],
            [30, 57, 50, 255], [55, 188, 198, 255], [74, 242, 178, 255], [34, 131, 219, 255],
            [78, 66, 10, 255], [30, 57, 50, 255], [6, 52, 70, 255], [74, 242, 178, 255],
            [54, 61, 30, 255], [54, 61, 30, 255], [78, 66, 10, 255], [54, 61, 30, 255],
        ],
    ),
    // mode 3, rotation 0, index mode 0, shape 19
    (
        [0x38, 0xB1, 0x3C, 0xFB, 0x1F, 0xE9, 0xB1, 0x81, 0xE5, 0xA7, 0x0E, 0x23, 0x79, 0x7E, 0x76, 0xF3],
        [
            [88, 72, 242, 255], [126, 96, 140, 255], [207, 68, 65, 255], [207, 68, 65, 255],
            [69, 44, 191, 255], [60, 30, 166, 255], [126, 96, 140, 255], [207, 68, 65, 255],
            [69, 44, 191, 255], [79, 58, 217, 255], [60, 30, 166, 255], [207, 68, 65, 255],
            [60, 30, 166, 255], [88, 72, 242, 255], [60, 30, 166, 255], [60, 30, 166, 255],
        ],
    ),
    // mode 4, rotation 2, index mode 0, shape 0
    (
        [0x50, 0xFB, 0x90, 0xD4, 0xAE, 0x29, 0xED, 0xF8, 0xEA, 0x3D, 0x4D, 0xD1, 0x1F, 0x2E, 0x93, 0x25],
        [
            [168, 131, 134, 46], [168, 143, 134, 46], [57, 96, 189, 74], [168, 154, 134, 46],
            [222, 96, 107, 33], [57, 73, 189, 74], [57, 73, 189, 74], [168, 154, 134, 46],
            [168, 84, 134, 46], [168, 96, 134, 46], [57, 107, 189, 74], [57, 143, 189, 74],
            [111, 143, 162, 61], [57, 120, 189, 74], [168, 143, 134, 46], [111, 143, 162, 61],
        ],
    ),
    // mode 4, rotation 2, index mode 1, shape 0
    (
        [0xD0, 0x0B, 0xC6, 0x8C, 0x92, 0xFD, 0x47, 0x1A, 0x41, 0x42, 0x46, 0x4D, 0x61, 0x11, 0xA1, 0x91],
        [
            [108, 231, 69, 168], [90, 219, 66, 140], [120, 243, 72, 187], [126, 219, 73, 197],
            [114, 231, 71, 178], [102, 255, 68, 159], [90, 219, 66, 140], [108, 243, 69, 168],
            [96, 219, 67, 149], [102, 219, 68, 159], [114, 243, 71, 178], [90, 219, 66, 140],
            [102, 231, 68, 159], [108, 219, 69, 168], [114, 243, 71, 178], [114, 219, 71, 178],
        ],
    ),
    // mode 5, rotation 1, index mode 0, shape 0
    (
        [0x60, 0x2D, 0x60, 0x31, 0x81, 0x1D, 0x24, 0x24, 0xB8, 0xF9, 0x2D, 0x6B, 0x05, 0x1E, 0x6C, 0x72],
        [
            [9, 139, 177, 90], [9, 18, 6, 129], [9, 99, 121, 103], [9, 18, 6, 129],
            [9, 139, 177, 90], [9, 18, 6, 129], [9, 18, 6, 129], [9, 18, 6, 129],
            [9, 58, 62, 116], [9, 99, 121, 103], [9, 99, 121, 103], [9, 58, 62, 116],
            [9, 99, 121, 103], [9, 99, 121, 103], [9, 18, 6, 129], [9, 58, 62, 116],
        ],
    ),
    // mode 5, rotation 1, index mode 0, shape 0
    (
        [0x60, 0x00, 0xE9, 0xD0, 0xD7, 0x45, 0xA0, 0x7A, 0x32, 0x9C, 0x2D, 0x90, 0x32, 0x1A, 0xED, 0x19],
        [
            [165, 135, 187, 0], [168, 128, 72, 111], [158, 131, 131, 54], [168, 135, 187, 0],
            [161, 128, 72, 111], [161, 124, 16, 165], [165, 135, 187, 0], [168, 124, 16, 165],
            [165, 128, 72, 111], [158, 131, 131, 54], [161, 131, 131, 54], [158, 135, 187, 0],
            [165, 135, 187, 0], [161, 128, 72, 111], [165, 135, 187, 0], [168, 131, 131, 54],
        ],
    ),
    // mode 6, rotation 0, index mode 0, shape 0
    (
        [0x40, 0x9D, 0xA8, 0xC2, 0x3D, 0x68, 0x14, 0xE0, 0x70, 0x8F, 0xE0, 0x22, 0xF2, 0x28, 0x78, 0x76],
        [
            [117, 43, 15, 21], [94, 109, 32, 101], [68, 184, 52, 192], [91, 118, 35, 112],
            [117, 43, 15, 21], [71, 175, 50, 181], [110, 63, 20, 45], [110, 63, 20, 45],
            [110, 63, 20, 45], [68, 184, 52, 192], [91, 118, 35, 112], [110, 63, 20, 45],
            [91, 118, 35, 112], [94, 109, 32, 101], [97, 100, 30, 90], [94, 109, 32, 101],
        ],
    ),
    // mode 6, rotation 0, index mode 0, shape 0
    (
        [0xC0, 0x89, 0x4C, 0x3F, 0x49, 0x96, 0x16, 0xD4, 0x05, 0x1F, 0x8F, 0x63, 0x9F, 0xE9, 0xEE, 0x63],
        [
            [48, 216, 137, 44], [39, 245, 147, 23], [101, 39, 75, 169], [43, 232, 143, 32],
            [101, 39, 75, 169], [72, 136, 109, 101], [52, 203, 132, 53], [64, 161, 118, 82],
            [101, 39, 75, 169], [76, 123, 104, 110], [76, 123, 104, 110], [97, 52, 80, 160],
            [97, 52, 80, 160], [97, 52, 80, 160], [52, 203, 132, 53], [64, 161, 118, 82],
        ],
    ),
    // mode 7, rotation 0, index mode 0, shape 60
    (
        [0x80, 0x7C, 0xE0, 0x0D, 0xCA, 0x48, 0x6E, 0xC7, 0x05, 0x91, 0x96, 0xA2, 0x9E, 0xF8, 0x6D, 0x97],
        [
            [81, 145, 223, 57], [231, 142, 199, 109], [8, 146, 235, 32], [81, 145, 223, 57],
            [105, 32, 40, 73], [134, 190, 69, 142], [134, 190, 69, 142], [134, 190, 69, 142],
            [158, 143, 211, 84], [81, 145, 223, 57], [134, 190, 69, 142], [124, 138, 59, 119],
            [231, 142, 199, 109], [158, 143, 211, 84], [105, 32, 40, 73], [115, 84, 50, 96],
        ],
    ),
    // mode 7, rotation 0, index mode 0, shape 43
    (
        [0x80, 0x6B, 0x96, 0x79, 0x1F, 0x88, 0x23, 0xBB, 0x64, 0x00, 0x72, 0x23, 0xB1, 0x39, 0x07, 0x9F],
        [
            [203, 56, 97, 0], [165, 106, 157, 22], [211, 179, 32, 173], [215, 158, 28, 155],
            [211, 179, 32, 173], [165, 106, 157, 22], [219, 138, 24, 138], [207, 199, 36, 190],
            [219, 138, 24, 138], [211, 179, 32, 173], [203, 56, 97, 0], [207, 199, 36, 190],
            [219, 138, 24, 138], [219, 138, 24, 138], [184, 80, 126, 11], [165, 106, 157, 22],
        ],
    ),
];

/// Formats bytes as bits, most significant byte first, so fields read right to left.
pub struct LsbDisplay<'a>(&'a [u8]);

pub fn lsb_display(data: &[u8]) -> LsbDisplay<'_> {
    LsbDisplay(data)
}

impl fmt::Display for LsbDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.0.iter().rev();
        if let Some(b) = iter.next() {
            write!(f, "{:08b}", b)?;
        }
        for b in iter {
            write!(f, " {:08b}", b)?;
        }
        write!(f, " <=]")
    }
}

pub struct RgbaDisplay<'a>(&'a [[u8; 4]]);

pub fn rgba_display(data: &[[u8; 4]]) -> RgbaDisplay<'_> {
    RgbaDisplay(data)
}

impl fmt::Display for RgbaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, rgba) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}{:02x}{:02x}{:02x}", rgba[0], rgba[1], rgba[2], rgba[3])?;
        }
        write!(f, "]")
    }
}
