//! Decoding source images into single-channel grey pixels.

use grey_dither::GreyImage;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::error::RenderError;

/// Decode an image file and bring it to the target size as 8-bit luma.
pub fn load_grey(path: &Path, width: u32, height: u32) -> Result<GreyImage, RenderError> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;

    tracing::info!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        "Loaded input image"
    );

    to_grey(decoded, width, height)
}

/// Resize (bilinear) and convert an already decoded image.
pub fn to_grey(image: DynamicImage, width: u32, height: u32) -> Result<GreyImage, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }

    let resized = if image.width() != width || image.height() != height {
        tracing::debug!(
            from_width = image.width(),
            from_height = image.height(),
            width,
            height,
            "Resizing input"
        );
        image.resize_exact(width, height, FilterType::Triangle)
    } else {
        image
    };

    let luma = resized.to_luma8();
    let grey = GreyImage::new(luma.into_raw(), width as usize, height as usize)?;
    Ok(grey)
}
