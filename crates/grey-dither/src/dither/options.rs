//! Dithering options and configuration.
//!
//! This module provides the [`DitherOptions`] struct for configuring
//! error diffusion dithering behavior.

/// Configuration options for error diffusion dithering.
///
/// The scan order is always raster order as far as results go; options
/// only choose how the work is scheduled.
///
/// # Defaults
///
/// - Wavefront scheduling: disabled (plain single-threaded raster scan)
///
/// # Example
///
/// ```
/// use grey_dither::DitherOptions;
///
/// let options = DitherOptions::new();
/// assert!(!options.wavefront);
///
/// let options = DitherOptions::new().wavefront(true);
/// assert!(options.wavefront);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DitherOptions {
    /// Quantize anti-diagonals of the image in parallel.
    ///
    /// Produces exactly the same output as the raster scan. Only worth it
    /// on large images; small ones pay more for scheduling than they gain.
    ///
    /// Default: `false`
    pub wavefront: bool,
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set wavefront scheduling.
    #[inline]
    pub fn wavefront(mut self, enabled: bool) -> Self {
        self.wavefront = enabled;
        self
    }
}
