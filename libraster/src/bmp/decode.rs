use super::header::{
    FileHeader, InfoHeader, BITS_PER_PIXEL, COMPRESSION_NONE, FILE_HEADER_LEN, INFO_HEADER_LEN,
};
use super::row_stride;
use crate::{error::Error, Pixel, Pixmap};
use tracing::{debug, trace};

/// Decodes an uncompressed 24-bit BMP byte buffer into a [`Pixmap`]
///
/// The pixel data is read from the offset declared in the file header rather
/// than a fixed position, rows are un-reversed from the on-disk bottom-up
/// order into top-down logical order, and the trailing padding of each row is
/// discarded.
///
/// # Errors
///
/// This function errors if the input is shorter than the two headers, does
/// not carry the `BM` signature, declares a bit depth other than 24 or a
/// compression method other than none, declares a non-positive width or
/// height, or ends before the declared pixel data does.
pub fn decode(bytes: &[u8]) -> Result<Pixmap, Error> {
    if bytes.len() < FILE_HEADER_LEN + INFO_HEADER_LEN {
        return Err(Error::TruncatedHeader { len: bytes.len() });
    }
    let file_header = FileHeader::parse(bytes)?;
    let info_header = InfoHeader::parse(bytes);
    trace!("file header: {file_header:?}, info header: {info_header:?}");

    if info_header.bits_per_pixel != BITS_PER_PIXEL {
        return Err(Error::UnsupportedDepth(info_header.bits_per_pixel));
    }
    if info_header.compression != COMPRESSION_NONE {
        return Err(Error::UnsupportedCompression(info_header.compression));
    }
    if info_header.width <= 0 || info_header.height <= 0 {
        return Err(Error::InvalidDimensions {
            width: info_header.width,
            height: info_header.height,
        });
    }
    let width = info_header.width as u32;
    let height = info_header.height as u32;

    // the encoder always places the pixel data at byte 54, but other writers
    // may leave a gap after the headers
    let offset = file_header.pixel_data_offset as usize;
    let stride = row_stride(width);
    let needed = stride
        .checked_mul(height as usize)
        .ok_or(Error::DimensionsTooLarge { width, height })?;
    let available = bytes.len().saturating_sub(offset);
    if available < needed {
        return Err(Error::TruncatedPixelData {
            offset,
            needed,
            available,
        });
    }
    let data = &bytes[offset..offset + needed];
    debug!("decoding {width}x{height} pixels, stride {stride}");

    let mut pixmap = Pixmap::filled(width, height, Pixel::BLACK);
    // the first row on disk is the bottom row of the image
    for (row, encoded) in pixmap.rows_mut().rev().zip(data.chunks_exact(stride)) {
        for (pixel, bgr) in row.iter_mut().zip(encoded.chunks_exact(3)) {
            *pixel = Pixel {
                r: bgr[2],
                g: bgr[1],
                b: bgr[0],
            };
        }
    }

    Ok(pixmap)
}
