//! Unified error type for the grey-dither public API.
//!
//! [`DitherError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the grey-dither public API.
///
/// Every failure the core can report is a precondition violation detected
/// before any pixel is processed. Once inputs are valid, quantization and
/// diffusion are total.
///
/// # Example
///
/// ```
/// use grey_dither::{DitherError, GreyPalette};
///
/// fn create_palette() -> Result<GreyPalette, DitherError> {
///     let palette = "0,85,170,255".parse::<GreyPalette>()?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum DitherError {
    /// Empty palette, zero-sized image, or a pixel count that does not match
    /// the stated dimensions
    InvalidArgument(String),
    /// Palette validation error (empty or unparsable level)
    Palette(PaletteError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::InvalidArgument(_) => None,
            DitherError::Palette(err) => Some(err),
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}
