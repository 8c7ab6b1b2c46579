//! Public API for the grey-dither crate.
//!
//! This module provides the high-level API: the [`GreyDitherer`] builder,
//! the one-shot [`dither`] and [`dither_levels`] functions, and the
//! [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::GreyDitherer;
pub use error::DitherError;

use crate::input::GreyImage;
use crate::output::DitheredImage;
use crate::palette::GreyPalette;

/// Dither `source` to `palette` with a single-threaded raster scan.
///
/// Both arguments are already validated by construction, so this cannot
/// fail.
///
/// # Example
///
/// ```
/// use grey_dither::{dither, GreyImage, GreyPalette};
///
/// let source = GreyImage::new(vec![200], 1, 1).unwrap();
/// let result = dither(&source, &GreyPalette::four_shades());
///
/// assert_eq!(result.levels(), &[170]);
/// ```
pub fn dither(source: &GreyImage, palette: &GreyPalette) -> DitheredImage {
    GreyDitherer::new(palette.clone()).dither(source)
}

/// Dither raw row-major pixels to raw levels.
///
/// All inputs are checked before any pixel is processed.
///
/// # Errors
///
/// Returns [`DitherError::InvalidArgument`] if `levels` is empty, if
/// `width` or `height` is zero, or if `pixels.len() != width * height`.
///
/// # Example
///
/// ```
/// use grey_dither::dither_levels;
///
/// let result = dither_levels(&[100, 100, 100, 100], 2, 2, &[0, 255]).unwrap();
/// assert_eq!(result.levels(), &[0, 255, 0, 0]);
///
/// assert!(dither_levels(&[100], 1, 1, &[]).is_err());
/// assert!(dither_levels(&[], 0, 0, &[0, 255]).is_err());
/// ```
pub fn dither_levels(
    pixels: &[u8],
    width: usize,
    height: usize,
    levels: &[u8],
) -> Result<DitheredImage, DitherError> {
    if levels.is_empty() {
        return Err(DitherError::InvalidArgument(
            "palette cannot be empty".to_string(),
        ));
    }
    let source = GreyImage::new(pixels.to_vec(), width, height)?;
    let palette = GreyPalette::new(levels)?;
    Ok(dither(&source, &palette))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dither_levels_empty_palette_is_invalid_argument() {
        match dither_levels(&[1, 2, 3, 4], 2, 2, &[]) {
            Err(DitherError::InvalidArgument(msg)) => assert!(msg.contains("palette")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_dither_levels_zero_rows() {
        assert!(matches!(
            dither_levels(&[], 3, 0, &[0, 255]),
            Err(DitherError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_dither_levels_mismatched_length() {
        assert!(matches!(
            dither_levels(&[0; 3], 2, 2, &[0, 255]),
            Err(DitherError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_dither_matches_builder() {
        let source = GreyImage::new((0..=255).collect(), 16, 16).unwrap();
        let palette = GreyPalette::four_shades();
        assert_eq!(
            dither(&source, &palette),
            GreyDitherer::new(palette).dither(&source)
        );
    }
}
