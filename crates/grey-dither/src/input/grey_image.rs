//! Source buffer for the dithering pipeline.

use crate::api::DitherError;

/// A row-major grid of 8-bit grey intensities.
///
/// This is the read-only input of the pipeline. The constructor guarantees
/// that both dimensions are non-zero and that the pixel count matches them,
/// so everything downstream can index without further checks.
///
/// # Example
///
/// ```
/// use grey_dither::GreyImage;
///
/// let image = GreyImage::new(vec![0, 64, 128, 255], 2, 2).unwrap();
///
/// assert_eq!(image.get(1, 1), 255);
/// assert_eq!(image.row(0), &[0, 64]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreyImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl GreyImage {
    /// Wrap row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidArgument`] if `width` or `height` is zero,
    /// or if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self, DitherError> {
        if width == 0 || height == 0 {
            return Err(DitherError::InvalidArgument(format!(
                "image must have at least one row and one column (got {}x{})",
                width, height
            )));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            DitherError::InvalidArgument(format!("image {}x{} is too large", width, height))
        })?;
        if pixels.len() != expected {
            return Err(DitherError::InvalidArgument(format!(
                "pixel count {} does not match {}x{}",
                pixels.len(),
                width,
                height
            )));
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build an image from a slice of equally long rows.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidArgument`] if there are no rows, the rows
    /// are empty, or their lengths differ.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, DitherError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return Err(DitherError::InvalidArgument(
                "rows must all have the same length".to_string(),
            ));
        }
        let pixels = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(pixels, width, rows.len())
    }

    /// Image width in pixels (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Row `y` as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}
