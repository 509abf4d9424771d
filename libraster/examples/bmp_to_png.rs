/// Demonstrates how to create a png file from a BMP file
/// using the [`image`] crate
///
use anyhow::Context;
use image::{codecs::png::PngEncoder, ImageEncoder};
use libraster::bmp;
use std::fs::File;

fn main() -> anyhow::Result<()> {
    let input = std::env::args()
        .nth(1)
        .context("usage: bmp_to_png <file.bmp>")?;
    let pixmap = bmp::decode_file(input)?;

    let as_rgb: Vec<_> = pixmap.as_rgb_iter().flatten().collect();

    let output = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open("bmp_to_png_example.png")?;

    let encoder = PngEncoder::new(output);
    encoder.write_image(
        &as_rgb,
        pixmap.width(),
        pixmap.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}
