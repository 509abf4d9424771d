//! Byte-exact serialization of the two BMP headers
//!
//! The on-disk layout packs the 14-byte file header and the 40-byte info
//! header back to back with no padding between fields, so both are written
//! and read field by field at fixed little-endian offsets rather than through
//! any in-memory struct layout.

use crate::error::Error;

/// Length of the file header in bytes
pub(crate) const FILE_HEADER_LEN: usize = 14;
/// Length of the info header in bytes
pub(crate) const INFO_HEADER_LEN: usize = 40;
/// Pixel data offset as written by the encoder, directly after both headers
pub(crate) const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_LEN + INFO_HEADER_LEN) as u32;

/// Bit depth handled by this codec
pub(crate) const BITS_PER_PIXEL: u16 = 24;
/// Compression method handled by this codec (uncompressed)
pub(crate) const COMPRESSION_NONE: u32 = 0;

const SIGNATURE: [u8; 2] = *b"BM";
const PLANES: u16 = 1;
// 300 DPI in pixels per meter, informational only
const RESOLUTION_PPM: i32 = 11811;
const USED_COLORS: i32 = 0;
const IMPORTANT_COLORS: i32 = 0x0100_0000;

/// The 14-byte BMP file header
///
/// Layout: 2 signature bytes `BM`, u32 total file size, 4 reserved zero
/// bytes, u32 offset from the start of the file to the pixel data
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct FileHeader {
    pub(crate) file_size: u32,
    pub(crate) pixel_data_offset: u32,
}

impl FileHeader {
    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&SIGNATURE);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // reserved
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }

    /// Parses the file header from the start of `bytes`
    ///
    /// Rejects the input if either signature byte differs from `BM`.
    pub(crate) fn parse(bytes: &[u8]) -> Result<Self, Error> {
        debug_assert!(bytes.len() >= FILE_HEADER_LEN);
        let signature = [bytes[0], bytes[1]];
        if signature != SIGNATURE {
            return Err(Error::BadSignature { found: signature });
        }
        Ok(Self {
            file_size: read_u32(bytes, 2),
            pixel_data_offset: read_u32(bytes, 10),
        })
    }
}

/// The 40-byte BMP info header
///
/// Only the fields the decoder acts on are retained; planes, resolution, and
/// the color counts are fixed constants on write and ignored on read.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct InfoHeader {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) bits_per_pixel: u16,
    pub(crate) compression: u32,
    pub(crate) pixel_data_size: u32,
}

impl InfoHeader {
    pub(crate) const fn for_dimensions(width: i32, height: i32, pixel_data_size: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            pixel_data_size,
        }
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&PLANES.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.pixel_data_size.to_le_bytes());
        out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
        out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
        out.extend_from_slice(&USED_COLORS.to_le_bytes());
        out.extend_from_slice(&IMPORTANT_COLORS.to_le_bytes());
    }

    /// Parses the info header from `bytes`, offsets relative to the start of
    /// the file
    pub(crate) fn parse(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() >= FILE_HEADER_LEN + INFO_HEADER_LEN);
        Self {
            width: read_i32(bytes, 18),
            height: read_i32(bytes, 22),
            bits_per_pixel: read_u16(bytes, 28),
            compression: read_u32(bytes, 30),
            pixel_data_size: read_u32(bytes, 34),
        }
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
