//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4
//! neighbours, preserving the local average intensity of the source.

use crate::input::GreyImage;
use crate::palette::GreyPalette;

use super::{dither_wavefront, dither_with_kernel, Dither, DitherOptions, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Total: 16/16 = 100% error propagation. Neighbours outside the image are
/// skipped, and their share is simply not applied.
///
/// # Example
///
/// ```
/// use grey_dither::{Dither, DitherOptions, FloydSteinberg, GreyImage, GreyPalette};
///
/// let palette = GreyPalette::four_shades();
/// let image = GreyImage::new(vec![200], 1, 1).unwrap();
///
/// let levels = FloydSteinberg.dither(&image, &palette, &DitherOptions::new());
/// assert_eq!(levels, vec![170]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &GreyImage, palette: &GreyPalette, options: &DitherOptions) -> Vec<u8> {
        if options.wavefront {
            dither_wavefront(image, palette, &FLOYD_STEINBERG)
        } else {
            dither_with_kernel(image, palette, &FLOYD_STEINBERG)
        }
    }
}
