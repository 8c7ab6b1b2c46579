//! Output types for the dithering pipeline.
//!
//! This module provides [`DitheredImage`], the canonical output of all
//! dithering operations. It stores palette levels with dimension metadata
//! and an owned [`GreyPalette`](crate::palette::GreyPalette), offering two
//! views on demand:
//!
//! - **Levels** ([`DitheredImage::levels`]): grey values, one per pixel
//! - **Indices** ([`DitheredImage::indices`]): positions in the palette

mod dithered_image;

pub use dithered_image::DitheredImage;
