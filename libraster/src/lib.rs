//! # libraster
//!
//!
//! This library provides the in-memory pixel representation and the BMP codec
//! behind the `rastr` conversion tool.
//!
//! The BMP variant implemented here is the plain uncompressed 24-bit one:
//! two packed headers totalling 54 bytes followed by bottom-up pixel rows in
//! blue, green, red channel order, each row padded to a multiple of four
//! bytes. It is the only format whose binary layout is defined in this
//! repository; PPM, JPEG, and friends are better served by the
//! [`image`] crate, which [`Pixmap`] interoperates with directly.
//!
//! ### Usage
//!
//! #### Round-tripping an image through BMP bytes
//!
//! [`bmp::encode`] and [`bmp::decode`] work on in-memory buffers, so no files
//! are involved until you want them to be.
//!
//! ```rust
//! use libraster::{bmp, Pixel, Pixmap};
//!
//! fn main() -> anyhow::Result<()> {
//!     let pixmap = Pixmap::filled(4, 2, Pixel { r: 255, g: 0, b: 0 });
//!
//!     let bytes = bmp::encode(&pixmap)?;
//!     let decoded = bmp::decode(&bytes)?;
//!     assert_eq!(pixmap, decoded);
//!     Ok(())
//! }
//! ```
//!
//! #### Converting a BMP to a PNG with the `image` crate
//!
//! [`Pixmap::as_rgb_iter`] yields the flat RGB byte layout the `image`
//! encoders consume.
//!
//! ```rust
//! use image::{codecs::png::PngEncoder, ImageEncoder};
//! use libraster::{bmp, Pixel, Pixmap};
//!
//! fn main() -> anyhow::Result<()> {
//!     let pixmap = Pixmap::filled(2, 2, Pixel { r: 0, g: 128, b: 255 });
//!     let bmp_bytes = bmp::encode(&pixmap)?;
//!
//!     let decoded = bmp::decode(&bmp_bytes)?;
//!     let as_rgb: Vec<_> = decoded.as_rgb_iter().flatten().collect();
//!
//!     let mut png = Vec::new();
//!     let encoder = PngEncoder::new(&mut png);
//!     encoder.write_image(
//!         &as_rgb,
//!         decoded.width(),
//!         decoded.height(),
//!         image::ExtendedColorType::Rgb8,
//!     )?;
//!     Ok(())
//! }
//! ```
//!
//! #### Errors
//!
//! Malformed input is expected and recoverable: every failure path of the
//! codec surfaces a typed [`Error`] rather than panicking, and a loaded
//! [`Pixmap`] can always be checked cheaply with [`Pixmap::is_empty`].
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

/// Module containing the uncompressed 24-bit BMP encoder and decoder
pub mod bmp;
mod error;
mod pixmap;

pub use error::Error;
pub use pixmap::Pixel;
pub use pixmap::Pixmap;
