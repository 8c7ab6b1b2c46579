//! DitheredImage struct with level and index views.
//!
//! [`DitheredImage`] wraps dithered grey levels with dimension metadata and
//! an owned [`GreyPalette`]. The level form is canonical; palette indices are
//! computed on demand for sinks that pack pixels by index.

use crate::palette::GreyPalette;

/// The canonical output of the dithering pipeline.
///
/// Stores one grey level per pixel in row-major order, along with image
/// dimensions and the palette used for dithering. Every stored level is a
/// member of that palette.
///
/// # Example
///
/// ```
/// use grey_dither::{DitheredImage, GreyPalette};
///
/// let palette = GreyPalette::new(&[0, 255]).unwrap();
///
/// // Simulate a 2x2 checkerboard dither result
/// let image = DitheredImage::new(vec![0, 255, 255, 0], 2, 2, palette);
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.levels(), &[0, 255, 255, 0]);
/// assert_eq!(image.indices(), vec![0, 1, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitheredImage {
    /// Grey levels, one per pixel, row-major order.
    levels: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
    /// The palette used for dithering (owned for ergonomic return values).
    palette: GreyPalette,
}

impl DitheredImage {
    /// Create a new `DitheredImage` from dithered grey levels.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `levels.len() == width * height`.
    pub fn new(levels: Vec<u8>, width: usize, height: usize, palette: GreyPalette) -> Self {
        debug_assert_eq!(
            levels.len(),
            width * height,
            "levels length ({}) must match width * height ({}x{}={})",
            levels.len(),
            width,
            height,
            width * height,
        );
        Self {
            levels,
            width,
            height,
            palette,
        }
    }

    /// Returns the grey levels as a slice, in row-major order.
    #[inline]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a reference to the palette used for this image.
    #[inline]
    pub fn palette(&self) -> &GreyPalette {
        &self.palette
    }

    /// Level at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.levels[y * self.width + x]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.levels.chunks_exact(self.width)
    }

    /// Palette index of every pixel (first occurrence for duplicate levels).
    pub fn indices(&self) -> Vec<usize> {
        let lut = self.index_lut();
        self.levels.iter().map(|&l| lut[l as usize]).collect()
    }

    /// Consume the image, returning the grey levels.
    pub fn into_levels(self) -> Vec<u8> {
        self.levels
    }

    fn index_lut(&self) -> [usize; 256] {
        let mut lut = [0usize; 256];
        for &level in self.palette.levels() {
            // Levels outside the palette never occur in `levels`.
            lut[level as usize] = self.palette.position(level).unwrap_or(0);
        }
        lut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bw() -> GreyPalette {
        GreyPalette::new(&[0, 255]).unwrap()
    }

    #[test]
    fn test_accessors() {
        let image = DitheredImage::new(vec![0, 255, 255, 0, 0, 0], 3, 2, bw());
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.get(1, 0), 255);
        assert_eq!(image.get(2, 1), 0);
        assert_eq!(image.palette(), &bw());
    }

    #[test]
    fn test_rows() {
        let image = DitheredImage::new(vec![0, 255, 255, 0], 2, 2, bw());
        let rows: Vec<&[u8]> = image.rows().collect();
        assert_eq!(rows, vec![&[0u8, 255][..], &[255u8, 0][..]]);
    }

    #[test]
    fn test_indices_follow_palette_order() {
        let palette = GreyPalette::new(&[255, 170, 85, 0]).unwrap();
        let image = DitheredImage::new(vec![0, 85, 170, 255], 4, 1, palette);
        assert_eq!(image.indices(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_indices_match_palette_positions() {
        let palette = GreyPalette::new(&[10, 90, 200]).unwrap();
        let levels = vec![200, 10, 90, 90, 200, 10];
        let image = DitheredImage::new(levels.clone(), 3, 2, palette.clone());
        let expected: Vec<usize> = levels
            .iter()
            .map(|&l| palette.position(l).unwrap())
            .collect();
        assert_eq!(image.indices(), expected);
    }

    #[test]
    fn test_indices_duplicate_levels_use_first() {
        let palette = GreyPalette::new(&[0, 128, 128, 255]).unwrap();
        let image = DitheredImage::new(vec![128, 255], 2, 1, palette);
        assert_eq!(image.indices(), vec![1, 3]);
    }

    #[test]
    fn test_into_levels() {
        let image = DitheredImage::new(vec![0, 255], 2, 1, bw());
        assert_eq!(image.into_levels(), vec![0, 255]);
    }
}
