//! GreyDitherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`GreyDitherer`] wraps the dithering pipeline with fluent configuration.

use crate::dither::{Dither, DitherOptions, FloydSteinberg};
use crate::input::GreyImage;
use crate::output::DitheredImage;
use crate::palette::GreyPalette;

/// High-level dithering builder.
///
/// # Design
///
/// - Constructor requires a [`GreyPalette`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`dither()`](Self::dither) takes `&self` so the builder is **reusable**
///   across multiple images
///
/// # Example
///
/// ```
/// use grey_dither::{GreyDitherer, GreyImage, GreyPalette};
///
/// let ditherer = GreyDitherer::new(GreyPalette::four_shades()).wavefront(true);
///
/// let image = GreyImage::new(vec![128; 12], 4, 3).unwrap();
/// let result = ditherer.dither(&image);
///
/// assert_eq!(result.width(), 4);
/// assert_eq!(result.height(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GreyDitherer {
    palette: GreyPalette,
    dither_opts: DitherOptions,
}

impl GreyDitherer {
    /// Create a new ditherer with the given palette.
    ///
    /// Defaults to a single-threaded raster scan.
    pub fn new(palette: GreyPalette) -> Self {
        Self {
            palette,
            dither_opts: DitherOptions::new(),
        }
    }

    /// Set wavefront (parallel) scheduling.
    #[inline]
    pub fn wavefront(mut self, enabled: bool) -> Self {
        self.dither_opts = self.dither_opts.wavefront(enabled);
        self
    }

    /// Replace all dithering options at once.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.dither_opts = options;
        self
    }

    /// The palette this ditherer quantizes to.
    #[inline]
    pub fn palette(&self) -> &GreyPalette {
        &self.palette
    }

    /// Dither `image` with Floyd-Steinberg error diffusion.
    pub fn dither(&self, image: &GreyImage) -> DitheredImage {
        let levels = FloydSteinberg.dither(image, &self.palette, &self.dither_opts);
        DitheredImage::new(levels, image.width(), image.height(), self.palette.clone())
    }
}
