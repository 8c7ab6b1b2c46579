//! Error diffusion dithering.
//!
//! This module reduces a grey image to the levels of a [`GreyPalette`]
//! while keeping local average intensity, by pushing each pixel's
//! quantization error onto the neighbours that have not been visited yet.
//!
//! # Architecture
//!
//! The algorithm implements the [`Dither`] trait. Diffusion weights live in
//! a [`Kernel`]; the raster scan ([`dither_with_kernel`]) and the parallel
//! wavefront scan ([`dither_wavefront`]) both take one and produce the same
//! output for it.
//!
//! # Example
//!
//! ```
//! use grey_dither::{Dither, DitherOptions, FloydSteinberg, GreyImage, GreyPalette};
//!
//! let palette = GreyPalette::new(&[0, 255]).unwrap();
//! let image = GreyImage::new(vec![100; 4], 2, 2).unwrap();
//!
//! let levels = FloydSteinberg.dither(&image, &palette, &DitherOptions::new());
//! assert_eq!(levels, vec![0, 255, 0, 0]);
//! ```

mod floyd_steinberg;
mod kernel;
mod options;
mod wavefront;
mod working_buffer;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use options::DitherOptions;
pub use wavefront::dither_wavefront;

use crate::input::GreyImage;
use crate::palette::GreyPalette;
pub(crate) use working_buffer::WorkingBuffer;

/// Trait for error diffusion dithering algorithms.
///
/// # Error Diffusion
///
/// Error diffusion works by:
/// 1. For each pixel, find the nearest palette level
/// 2. Compute the quantization error (accumulated value - level)
/// 3. Distribute that error to neighboring unprocessed pixels
/// 4. Repeat, with accumulated error influencing future decisions
pub trait Dither {
    /// Dither an image to palette levels.
    ///
    /// # Returns
    ///
    /// A `Vec<u8>` with one palette level per pixel, in row-major order.
    fn dither(&self, image: &GreyImage, palette: &GreyPalette, options: &DitherOptions) -> Vec<u8>;
}

/// Dither with an arbitrary kernel in a single raster-order pass.
///
/// Rows are visited top to bottom and each row left to right. The value read
/// for a pixel already holds every share pushed into it by earlier pixels.
/// Shares aimed outside the image are dropped.
pub fn dither_with_kernel(image: &GreyImage, palette: &GreyPalette, kernel: &Kernel) -> Vec<u8> {
    let width = image.width();
    let height = image.height();

    let mut working = WorkingBuffer::from_image(image);
    let mut output = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let current = working.get(x, y);
            let quantized = palette.nearest(current);
            let error = current.saturating_sub(i32::from(quantized));

            output.push(quantized);

            if error == 0 {
                continue;
            }
            for (dx, dy, share) in kernel.contributions(error) {
                working.add_offset(x, y, dx, dy, share);
            }
        }
    }

    output
}
