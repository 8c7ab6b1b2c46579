//! Parallel wavefront scheduling for error diffusion.
//!
//! Error only ever flows to pixels later in raster order, so a pixel's value
//! is final once every pixel that sends error to it has been quantized. With
//! a kernel-specific skew `s` (2 for Floyd-Steinberg), all senders of `(x, y)`
//! lie on waves `x' + s * y'` strictly below `x + s * y`. Pixels on the same
//! wave are therefore independent and are quantized in parallel with rayon.
//!
//! Instead of pushing error into neighbours, each pixel pulls the shares its
//! senders left for it. Shares are truncated individually and are added in
//! the same order the raster scan would add them, so the result is
//! bit-for-bit identical to [`dither_with_kernel`](super::dither_with_kernel).

use rayon::prelude::*;

use super::Kernel;
use crate::input::GreyImage;
use crate::palette::GreyPalette;

/// Sender offsets for a pixel, ordered the way the raster scan delivers them.
///
/// Returns `(sx, sy, weight)` where the sender of `(x, y)` is `(x - sx, y - sy)`.
fn senders_in_raster_order(kernel: &Kernel) -> Vec<(i32, i32, u8)> {
    let mut senders: Vec<(i32, i32, u8)> = kernel.entries.to_vec();
    // Sender row ascending (larger dy first), then sender column ascending.
    senders.sort_by_key(|&(dx, dy, _)| (-dy, -dx));
    senders
}

/// Dither with a kernel, quantizing one anti-diagonal at a time in parallel.
///
/// Returns one palette level per pixel in row-major order.
pub fn dither_wavefront(image: &GreyImage, palette: &GreyPalette, kernel: &Kernel) -> Vec<u8> {
    let width = image.width();
    let height = image.height();
    let skew = kernel.wavefront_skew();
    let senders = senders_in_raster_order(kernel);
    let source = image.pixels();

    let mut output = vec![0u8; width * height];
    // Quantization error left behind by each pixel, written once per wave.
    let mut errors = vec![0i32; width * height];

    let last_wave = (width - 1) + skew * (height - 1);
    for wave in 0..=last_wave {
        // Rows that intersect this wave: x = wave - skew * y must be in 0..width.
        let y_min = wave.saturating_sub(width - 1).div_ceil(skew);
        let y_max = (wave / skew).min(height - 1);
        if y_min > y_max {
            continue;
        }

        let errors_ref = &errors;
        let results: Vec<(usize, u8, i32)> = (y_min..=y_max)
            .into_par_iter()
            .map(|y| {
                let x = wave - skew * y;
                let idx = y * width + x;

                let mut current = i32::from(source[idx]);
                for &(dx, dy, weight) in &senders {
                    let sender = x
                        .checked_add_signed(-dx as isize)
                        .filter(|&sx| sx < width)
                        .zip(y.checked_add_signed(-dy as isize));
                    if let Some((sx, sy)) = sender {
                        let share = kernel.share(errors_ref[sy * width + sx], weight);
                        current = current.saturating_add(share);
                    }
                }

                let quantized = palette.nearest(current);
                (idx, quantized, current.saturating_sub(i32::from(quantized)))
            })
            .collect();

        for (idx, quantized, error) in results {
            output[idx] = quantized;
            errors[idx] = error;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::{dither_with_kernel, FLOYD_STEINBERG};

    #[test]
    fn test_senders_order_matches_raster_delivery() {
        // Into (x, y) arrive: SE of (x-1, y-1), S of (x, y-1), SW of (x+1, y-1), E of (x-1, y).
        let senders = senders_in_raster_order(&FLOYD_STEINBERG);
        let offsets: Vec<(i32, i32)> = senders.iter().map(|&(dx, dy, _)| (dx, dy)).collect();
        assert_eq!(offsets, vec![(1, 1), (0, 1), (-1, 1), (1, 0)]);
    }

    #[test]
    fn test_wavefront_matches_sequential_small() {
        let image = GreyImage::from_rows(&[[100u8, 100], [100, 100]]).unwrap();
        let palette = GreyPalette::new(&[0, 255]).unwrap();
        assert_eq!(
            dither_wavefront(&image, &palette, &FLOYD_STEINBERG),
            dither_with_kernel(&image, &palette, &FLOYD_STEINBERG)
        );
    }

    #[test]
    fn test_wavefront_single_pixel() {
        let image = GreyImage::new(vec![200], 1, 1).unwrap();
        let palette = GreyPalette::four_shades();
        assert_eq!(dither_wavefront(&image, &palette, &FLOYD_STEINBERG), vec![170]);
    }

    #[test]
    fn test_wavefront_single_row_and_column() {
        let palette = GreyPalette::four_shades();
        let ramp: Vec<u8> = (0..=255).collect();

        let row = GreyImage::new(ramp.clone(), 256, 1).unwrap();
        assert_eq!(
            dither_wavefront(&row, &palette, &FLOYD_STEINBERG),
            dither_with_kernel(&row, &palette, &FLOYD_STEINBERG)
        );

        let column = GreyImage::new(ramp, 1, 256).unwrap();
        assert_eq!(
            dither_wavefront(&column, &palette, &FLOYD_STEINBERG),
            dither_with_kernel(&column, &palette, &FLOYD_STEINBERG)
        );
    }
}
