/// Demonstrates how to create a BMP file from any image
/// the [`image`] crate can open
///
use anyhow::Context;
use libraster::{bmp, Pixel, Pixmap};

fn main() -> anyhow::Result<()> {
    let input = std::env::args()
        .nth(1)
        .context("usage: png_to_bmp <file.png>")?;
    let img = image::open(input)?.into_rgb8();

    let pixels = img
        .pixels()
        .map(|p| Pixel {
            r: p[0],
            g: p[1],
            b: p[2],
        })
        .collect();
    let pixmap = Pixmap::new(img.width(), img.height(), pixels)?;

    bmp::encode_file(&pixmap, "png_to_bmp_example.bmp")?;
    Ok(())
}
