use super::header::{FileHeader, InfoHeader, FILE_HEADER_LEN, INFO_HEADER_LEN, PIXEL_DATA_OFFSET};
use super::row_stride;
use crate::{error::Error, Pixmap};
use std::iter;
use tracing::debug;

/// Encodes a [`Pixmap`] as an uncompressed 24-bit BMP byte buffer
///
/// Rows are written bottom-up, each pixel as a blue, green, red triple, each
/// row zero-padded to a multiple of four bytes. The length of the returned
/// buffer equals the file size recorded in its header.
///
/// # Errors
///
/// This function errors if the pixmap holds no pixels, or if a dimension does
/// not fit the signed 32-bit header fields.
pub fn encode(pixmap: &Pixmap) -> Result<Vec<u8>, Error> {
    if pixmap.is_empty() {
        return Err(Error::EmptyImage);
    }
    let too_large = || Error::DimensionsTooLarge {
        width: pixmap.width(),
        height: pixmap.height(),
    };
    let width = i32::try_from(pixmap.width()).map_err(|_| too_large())?;
    let height = i32::try_from(pixmap.height()).map_err(|_| too_large())?;

    let stride = row_stride(pixmap.width());
    let pixel_data_size = stride * pixmap.height() as usize;
    let file_size = u32::try_from(FILE_HEADER_LEN + INFO_HEADER_LEN + pixel_data_size)
        .map_err(|_| too_large())?;
    debug!("encoding {width}x{height} pixels, stride {stride}");

    let mut out = Vec::with_capacity(file_size as usize);
    FileHeader {
        file_size,
        pixel_data_offset: PIXEL_DATA_OFFSET,
    }
    .write_to(&mut out);
    InfoHeader::for_dimensions(width, height, pixel_data_size as u32).write_to(&mut out);

    let padding = stride - pixmap.width() as usize * 3;
    // the bottom row of the image is stored first on disk
    for row in pixmap.rows().rev() {
        for pixel in row {
            out.extend_from_slice(&[pixel.b, pixel.g, pixel.r]);
        }
        out.extend(iter::repeat(0u8).take(padding));
    }
    debug_assert_eq!(out.len(), file_size as usize);

    Ok(out)
}
