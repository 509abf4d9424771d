use std::path::Path;

use libraster::{bmp, Pixel, Pixmap};
use mktemp::Temp;
use rastr::{convert, ConvertError, Format};

/// Builds a small two-color checkerboard, enough structure to notice
/// misplaced rows or swapped channels after a conversion
fn checkerboard(width: u32, height: u32) -> Pixmap {
    let dark = Pixel { r: 16, g: 32, b: 64 };
    let light = Pixel {
        r: 200,
        g: 220,
        b: 240,
    };
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| if (x + y) % 2 == 0 { dark } else { light })
        })
        .collect();
    Pixmap::new(width, height, pixels).expect("pixel count matches dimensions")
}

#[test]
fn format_is_resolved_from_the_extension() {
    assert_eq!(Format::from_path(Path::new("chart.bmp")), Some(Format::Bmp));
    assert_eq!(Format::from_path(Path::new("chart.ppm")), Some(Format::Ppm));
    assert_eq!(Format::from_path(Path::new("chart.jpg")), Some(Format::Jpeg));
    assert_eq!(
        Format::from_path(Path::new("chart.jpeg")),
        Some(Format::Jpeg)
    );
    // extensions are matched case-insensitively
    assert_eq!(Format::from_path(Path::new("chart.BMP")), Some(Format::Bmp));
    assert_eq!(Format::from_path(Path::new("chart.gif")), None);
    assert_eq!(Format::from_path(Path::new("chart")), None);
}

#[test]
fn bmp_to_ppm_and_back_is_byte_identical() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let dir_path: &Path = dir.as_ref();
    let original = dir_path.join("original.bmp");
    let intermediate = dir_path.join("intermediate.ppm");
    let recreated = dir_path.join("recreated.bmp");

    bmp::encode_file(&checkerboard(5, 4), &original)?;
    convert(&original, &intermediate)?;
    convert(&intermediate, &recreated)?;

    // both byte paths are lossless, so the files must match exactly
    let hash_1 = sha256::try_digest(&original)?;
    let hash_2 = sha256::try_digest(&recreated)?;
    assert_eq!(hash_1, hash_2);
    Ok(())
}

#[test]
fn bmp_to_jpeg_produces_a_decodable_image() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let dir_path: &Path = dir.as_ref();
    let original = dir_path.join("original.bmp");
    let converted = dir_path.join("converted.jpg");

    bmp::encode_file(&checkerboard(8, 6), &original)?;
    convert(&original, &converted)?;

    let img = image::open(&converted)?;
    assert_eq!((img.width(), img.height()), (8, 6));
    Ok(())
}

#[test]
fn unknown_input_extension_is_rejected() {
    let err = convert(Path::new("input.gif"), Path::new("output.bmp")).unwrap_err();
    assert!(matches!(err, ConvertError::UnknownInputFormat(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unknown_output_extension_creates_no_file() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let dir_path: &Path = dir.as_ref();
    let input = dir_path.join("input.bmp");
    let output = dir_path.join("output.gif");
    bmp::encode_file(&checkerboard(2, 2), &input)?;

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, ConvertError::UnknownOutputFormat(_)));
    assert_eq!(err.exit_code(), 3);
    assert!(!output.exists());
    Ok(())
}

#[test]
fn missing_input_file_is_a_load_failure() {
    let err = convert(Path::new("no_such_file.bmp"), Path::new("output.ppm")).unwrap_err();
    assert!(matches!(err, ConvertError::Load { .. }));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn malformed_input_file_is_a_load_failure() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let dir_path: &Path = dir.as_ref();
    let input = dir_path.join("garbage.bmp");
    let output = dir_path.join("output.ppm");
    std::fs::write(&input, b"XM not actually a bitmap")?;

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, ConvertError::Load { .. }));
    assert_eq!(err.exit_code(), 4);
    assert!(!output.exists());
    Ok(())
}
