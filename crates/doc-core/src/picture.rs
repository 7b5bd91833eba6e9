//! Picture handling for embedded images

use crate::{DocError, Result};
use image::ImageReader;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

impl From<image::ImageError> for DocError {
    fn from(err: image::ImageError) -> Self {
        DocError::ImageError(err.to_string())
    }
}

/// Supported picture formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PictureFormat {
    Jpeg,
    Png,
}

impl PictureFormat {
    /// Determine the format from the suffix of a file name
    ///
    /// Matches the last three or four characters case-insensitively:
    /// `jpeg`, `jpg` and `png` are accepted.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let lower = file_name.to_ascii_lowercase();

        if lower.ends_with("jpeg") || lower.ends_with("jpg") {
            return Ok(PictureFormat::Jpeg);
        }

        if lower.ends_with("png") {
            return Ok(PictureFormat::Png);
        }

        Err(DocError::UnsupportedFormat(format!(
            "Unknown picture format of file {file_name}. Use either png or jpeg."
        )))
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            PictureFormat::Jpeg => image::ImageFormat::Jpeg,
            PictureFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// Pixel dimensions of a picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureDimensions {
    pub width: u32,
    pub height: u32,
}

/// Validate picture bytes against the declared format and read their dimensions
///
/// Only the header is decoded. Bytes that do not match the declared format, or
/// whose header is corrupt, are reported as [`DocError::ImageError`].
pub fn picture_dimensions(data: &[u8], format: PictureFormat) -> Result<PictureDimensions> {
    let expected = format.to_image_format();
    let detected = image::guess_format(data)?;
    if detected != expected {
        return Err(DocError::ImageError(format!(
            "Picture declared as {format:?} but data is {detected:?}"
        )));
    }

    let reader = ImageReader::with_format(Cursor::new(data), expected);
    let (width, height) = reader.into_dimensions()?;

    Ok(PictureDimensions { width, height })
}
