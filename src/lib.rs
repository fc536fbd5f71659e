//! Encoder and decoder for BC7 (BPTC) texture blocks.
//!
//! A BC7 code word packs a 4x4 tile of RGBA8 pixels into 16 bytes using one of
//! eight modes. [`decode_block`] turns a code word back into pixels and
//! [`encode_block`] searches the mode, shape, rotation and index-mode space for
//! the code word with the smallest reconstruction error.
//!
//! ```
//! use bc7::{decode_block, encode_block, Color32};
//!
//! let pixels = [Color32::new(200, 100, 50, 255); 16];
//! let block = encode_block(&pixels);
//! assert_eq!(decode_block(&block).unwrap(), pixels);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::all)]

extern crate alloc;

mod bc7;
mod bitreader;
mod bitwriter;
mod color;
mod decode;
mod encode;
mod error;
mod palette;
mod surface;
mod tables;

pub use bitreader::{read_bit, read_bits};
pub use bitwriter::write_bits;
pub use color::Color32;
pub use decode::{block_mode, decode_block, decode_block_at};
pub use encode::{encode_block, encode_block_into};
pub use error::Error;
pub use surface::{decode_image, encode_image};

/// Size of one BC7 code word in bytes.
pub const BC7_BLOCK_SIZE: usize = 16;

/// Number of pixels covered by one code word.
pub const PIXELS_PER_BLOCK: usize = 16;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[doc(hidden)]
#[macro_export]
macro_rules! mask {
    ($size:expr) => {
        !(!($size ^ $size)).checked_shl($size as u32).unwrap_or(0)
    };
}
