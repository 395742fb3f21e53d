use std::fmt;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

/// Paths of the two files written for one processed input image.
#[derive(Debug, Clone)]
pub struct SplitOutputs {
    /// Left half, rotated clockwise.
    pub left: PathBuf,
    /// Right half, rotated counterclockwise.
    pub right: PathBuf,
}

/// Per-file failure while splitting one image.
#[derive(Debug)]
pub enum SplitError {
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "cannot decode '{}': {source}", path.display())
            }
            Self::Save { path, source } => {
                write!(f, "cannot save '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Save { source, .. } => Some(source),
        }
    }
}

/// Splits `input` at its horizontal midpoint, rotates the left half 90°
/// clockwise and the right half 90° counterclockwise, and writes both halves
/// as `<stem>_left_rotated.jpg` / `<stem>_right_rotated.jpg` in `output_dir`.
///
/// With an odd source width the right half is one column wider than the left;
/// the asymmetry is part of the contract. Outputs are always JPEG at default
/// encoder quality, whatever the source format; sources with an alpha channel
/// are flattened to RGB, so transparency does not survive into the output.
pub fn split_and_rotate(input: &Path, output_dir: &Path) -> Result<SplitOutputs, SplitError> {
    let img = image::open(input).map_err(|source| SplitError::Decode {
        path: input.to_path_buf(),
        source,
    })?;

    let (width, height) = (img.width(), img.height());
    let mid = width / 2;

    let left = img.crop_imm(0, 0, mid, height);
    let right = img.crop_imm(mid, 0, width - mid, height);

    let left_rotated = left.rotate90();
    let right_rotated = right.rotate270();

    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let left_path = output_dir.join(format!("{stem}_left_rotated.jpg"));
    let right_path = output_dir.join(format!("{stem}_right_rotated.jpg"));

    save_jpeg(&left_rotated, &left_path)?;
    save_jpeg(&right_rotated, &right_path)?;

    Ok(SplitOutputs {
        left: left_path,
        right: right_path,
    })
}

fn save_jpeg(image: &DynamicImage, path: &Path) -> Result<(), SplitError> {
    // JPEG carries no alpha channel; flatten before encoding.
    let flattened = DynamicImage::ImageRgb8(image.to_rgb8());
    flattened
        .save_with_format(path, ImageFormat::Jpeg)
        .map_err(|source| SplitError::Save {
            path: path.to_path_buf(),
            source,
        })
}
