use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libraster` errors
pub enum Error {
    /// Error returned if a pixel vector does not match the stated dimensions
    #[error("pixel count does not match dimensions. dimensions: {dimensions:?}, expected: {expected}, actual: {actual}")]
    PixelCountMismatch {
        /// stated width/height
        dimensions: (u32, u32),
        /// pixel count implied by the dimensions
        expected: usize,
        /// pixel count actually provided
        actual: usize,
    },
    /// Error returned if an image with no pixels is passed to the encoder
    #[error("cannot encode an empty image")]
    EmptyImage,
    /// Error returned if a dimension exceeds what the BMP header fields can express
    #[error("image dimensions too large for BMP: {width}x{height}")]
    DimensionsTooLarge {
        /// image width
        width: u32,
        /// image height
        height: u32,
    },
    /// Error returned if the input ends before the two BMP headers do
    #[error("truncated BMP header: {len} bytes")]
    TruncatedHeader {
        /// length of the input
        len: usize,
    },
    /// Error returned if the input does not start with the `BM` signature
    #[error("bad BMP signature: {found:?}")]
    BadSignature {
        /// the two bytes found instead of `BM`
        found: [u8; 2],
    },
    /// Error returned for bit depths other than 24
    #[error("unsupported BMP bit depth: {0}")]
    UnsupportedDepth(u16),
    /// Error returned for compressed BMP variants
    #[error("unsupported BMP compression method: {0}")]
    UnsupportedCompression(u32),
    /// Error returned if the header declares a non-positive width or height
    #[error("invalid BMP dimensions: {width}x{height}")]
    InvalidDimensions {
        /// declared width
        width: i32,
        /// declared height
        height: i32,
    },
    /// Error returned if the declared pixel data region runs past the end of
    /// the input
    #[error("truncated BMP pixel data: need {needed} bytes at offset {offset}, have {available}")]
    TruncatedPixelData {
        /// pixel data offset declared by the file header
        offset: usize,
        /// bytes required by the declared dimensions
        needed: usize,
        /// bytes available after the offset
        available: usize,
    },
}
