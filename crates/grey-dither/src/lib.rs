//! grey-dither: Floyd-Steinberg dithering of grey images to a few levels
//!
//! This library reduces an 8-bit grey image to a small, fixed palette of
//! intensity levels while keeping perceived tonal gradation, by diffusing
//! each pixel's quantization error onto its unvisited neighbours.
//!
//! # Quick Start
//!
//! The [`GreyDitherer`] builder is the primary entry point:
//!
//! ```
//! use grey_dither::{GreyDitherer, GreyImage, GreyPalette};
//!
//! let palette = GreyPalette::new(&[0, 85, 170, 255]).unwrap();
//! let image = GreyImage::new(vec![128; 4], 2, 2).unwrap();
//!
//! let result = GreyDitherer::new(palette).dither(&image);
//!
//! assert_eq!(result.width(), 2);
//! assert_eq!(result.height(), 2);
//! ```
//!
//! For raw buffers, [`dither_levels`] validates everything up front:
//!
//! ```
//! use grey_dither::dither_levels;
//!
//! let result = dither_levels(&[200], 1, 1, &[0, 85, 170, 255]).unwrap();
//! assert_eq!(result.levels(), &[170]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! GreyImage (u8)                    source, read-only
//!     |
//!     v
//! working buffer (i32)              widened copy, saturating adds
//!     |
//!     |  for each pixel, raster order:
//!     |    current   = working[y][x]
//!     |    level     = nearest(current)          first minimum wins ties
//!     |    error     = current - level
//!     |    out[y][x] = level
//!     |    east += 7/16, southwest += 3/16, south += 5/16, southeast += 1/16
//!     v
//! DitheredImage (palette levels)    handed to the caller
//! ```
//!
//! Shares are truncated toward zero one by one, so the error actually passed
//! on never exceeds the error made. Shares aimed outside the image are
//! dropped.
//!
//! # Scheduling
//!
//! The raster scan is inherently sequential: each pixel depends on the
//! error of the pixels before it. With [`DitherOptions::wavefront`], pixels
//! on the same anti-diagonal `x + 2y` are quantized in parallel instead,
//! which gives the exact same output.

pub mod api;
pub mod dither;
pub mod input;
pub mod output;
pub mod palette;


pub use api::{dither, dither_levels, DitherError, GreyDitherer};
pub use dither::{Dither, DitherOptions, FloydSteinberg, Kernel, FLOYD_STEINBERG};
pub use input::GreyImage;
pub use output::DitheredImage;
pub use palette::{nearest, GreyPalette, PaletteError};
