//! Encoder and decoder for uncompressed 24-bit BMP files
//!
//! The supported variant is the one the original Windows tools write most
//! often: a 14-byte file header, a 40-byte `BITMAPINFOHEADER`, and
//! uncompressed pixel rows stored bottom-up in blue, green, red channel
//! order, each row padded to a multiple of four bytes. Compressed files,
//! color tables, and bit depths other than 24 are rejected.
//!
//! [`encode`] and [`decode`] operate on in-memory byte buffers and perform no
//! I/O of their own; [`encode_file`] and [`decode_file`] add the file
//! plumbing on top.

mod decode;
mod encode;
mod header;

pub use decode::decode;
pub use encode::encode;

use crate::Pixmap;
use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

/// Byte length of one encoded pixel row, padded to a multiple of four
pub(crate) fn row_stride(width: u32) -> usize {
    4 * ((width as usize * 3 + 3) / 4)
}

/// Reads and decodes a BMP file
///
/// # Errors
///
/// This function will error if the file cannot be read or if it contains
/// invalid data. See [`decode`] for potential errors
pub fn decode_file<P: AsRef<Path>>(filename: P) -> Result<Pixmap> {
    let bytes = fs::read(&filename)
        .with_context(|| format!("read {}", filename.as_ref().display()))?;
    Ok(decode(&bytes)?)
}

/// Encodes a [`Pixmap`] and writes it to a file
///
/// # Errors
///
/// This will error if the pixmap cannot be encoded (see [`encode`]) or if
/// unable to open and/or write to the provided filename
pub fn encode_file(pixmap: &Pixmap, filename: impl AsRef<Path>) -> Result<()> {
    let bytes = encode(pixmap)?;
    let f = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&filename)?;
    let mut f = BufWriter::new(f);
    f.write_all(&bytes)?;
    f.flush()?;
    info!("Finished writing to file");
    Ok(())
}
