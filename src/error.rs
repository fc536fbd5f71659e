use thiserror::Error;

/// Errors reported by the BC7 codec.
///
/// Encoding a block never fails; these only describe malformed code words and
/// buffers that are too small for the requested operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A bit field would extend past the end of the buffer.
    #[error("bit field of {len} bits at offset {offset} overruns the {limit}-bit buffer")]
    FieldOverrun {
        /// Bit offset of the field.
        offset: usize,
        /// Length of the field in bits.
        len: usize,
        /// Size of the buffer in bits.
        limit: usize,
    },

    /// A block or pixel region does not fit into the supplied buffer.
    #[error("buffer too small: need {needed} bytes, but only {actual} bytes available")]
    BufferTooSmall {
        /// The required size in bytes.
        needed: usize,
        /// The actual size in bytes.
        actual: usize,
    },

    /// The length of a surface does not match its dimensions.
    #[error("invalid data length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Length implied by the dimensions.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },
}
