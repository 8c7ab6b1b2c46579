//! Palette types and utilities
//!
//! This module provides the grey level palette, the nearest-level quantizer,
//! and the error type for palette validation.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{nearest, GreyPalette};
