use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};
use image::{
    codecs::{
        jpeg::JpegEncoder,
        pnm::{PnmEncoder, PnmSubtype, SampleEncoding},
    },
    ExtendedColorType, ImageEncoder,
};
use libraster::{bmp, Pixel, Pixmap};
use strum::{Display, EnumString};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// The closed set of file formats rastr converts between
///
/// BMP is handled by `libraster`; PPM and JPEG are delegated to the `image`
/// crate. The format of each file is chosen purely by its extension.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Format {
    /// Portable pixmap, binary `P6`
    #[strum(serialize = "ppm")]
    Ppm,
    /// JPEG
    #[strum(serialize = "jpg", to_string = "jpeg")]
    Jpeg,
    /// Uncompressed 24-bit bitmap
    #[strum(serialize = "bmp")]
    Bmp,
}

impl Format {
    /// Resolves the format of a path from its extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }
}

/// Errors returned by [`convert`], each carrying its process exit code
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// The input extension is not one of [`Format`]
    #[error("unrecognized input format: {}", .0.display())]
    UnknownInputFormat(PathBuf),
    /// The output extension is not one of [`Format`]
    #[error("unrecognized output format: {}", .0.display())]
    UnknownOutputFormat(PathBuf),
    /// Reading or decoding the input failed
    #[error("loading {} failed: {:#}", path.display(), source)]
    Load {
        /// the input path
        path: PathBuf,
        /// what went wrong
        source: anyhow::Error,
    },
    /// Encoding or writing the output failed
    #[error("saving {} failed: {:#}", path.display(), source)]
    Save {
        /// the output path
        path: PathBuf,
        /// what went wrong
        source: anyhow::Error,
    },
}

impl ConvertError {
    /// The process exit code this failure maps to
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownInputFormat(_) => 2,
            Self::UnknownOutputFormat(_) => 3,
            Self::Load { .. } => 4,
            Self::Save { .. } => 5,
        }
    }
}

/// Converts an image file to the format named by the output extension
///
/// Both formats are resolved before either file is touched, so an
/// unrecognized output extension never creates or clobbers the output file.
///
/// # Errors
///
/// Returns a [`ConvertError`] if either extension is unrecognized, or if
/// loading or saving fails.
#[instrument]
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let Some(input_format) = Format::from_path(input) else {
        return Err(ConvertError::UnknownInputFormat(input.to_path_buf()));
    };
    let Some(output_format) = Format::from_path(output) else {
        return Err(ConvertError::UnknownOutputFormat(output.to_path_buf()));
    };

    let pixmap = load(input, input_format).map_err(|source| ConvertError::Load {
        path: input.to_path_buf(),
        source,
    })?;
    info!(
        "loaded {}x{} {input_format} image",
        pixmap.width(),
        pixmap.height()
    );

    save(output, output_format, &pixmap).map_err(|source| ConvertError::Save {
        path: output.to_path_buf(),
        source,
    })?;
    info!("wrote {output_format} image to {}", output.display());
    Ok(())
}

fn load(path: &Path, format: Format) -> Result<Pixmap> {
    debug!("loading {} as {format}", path.display());
    let pixmap = match format {
        Format::Bmp => bmp::decode_file(path)?,
        Format::Ppm | Format::Jpeg => {
            let img = image::open(path)
                .with_context(|| format!("open {}", path.display()))?
                .into_rgb8();
            let pixels = img
                .pixels()
                .map(|p| Pixel {
                    r: p[0],
                    g: p[1],
                    b: p[2],
                })
                .collect();
            Pixmap::new(img.width(), img.height(), pixels)?
        }
    };
    ensure!(!pixmap.is_empty(), "image has no pixels");
    Ok(pixmap)
}

fn save(path: &Path, format: Format, pixmap: &Pixmap) -> Result<()> {
    debug!("saving {} as {format}", path.display());
    match format {
        Format::Bmp => bmp::encode_file(pixmap, path)?,
        Format::Ppm => {
            let as_rgb: Vec<_> = pixmap.as_rgb_iter().flatten().collect();
            let encoder = PnmEncoder::new(create_output(path)?)
                .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
            encoder.write_image(
                &as_rgb,
                pixmap.width(),
                pixmap.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
        Format::Jpeg => {
            let as_rgb: Vec<_> = pixmap.as_rgb_iter().flatten().collect();
            let encoder = JpegEncoder::new(create_output(path)?);
            encoder.write_image(
                &as_rgb,
                pixmap.width(),
                pixmap.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
    }
    Ok(())
}

fn create_output(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}
