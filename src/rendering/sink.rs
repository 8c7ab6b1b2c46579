//! Writing dithered images to disk.
//!
//! PNG output is produced with the `png` encoder so evenly spaced palettes
//! can be stored at their native bit depth. Every other format goes through
//! the `image` crate.

use grey_dither::{DitheredImage, GreyPalette};
use std::io::Cursor;
use std::path::Path;

use crate::error::RenderError;

/// Bits per pixel when the palette is exactly the evenly spaced ladder of
/// 2, 4 or 16 levels from 0 to 255.
pub fn ladder_bits(palette: &GreyPalette) -> Option<u8> {
    let bits = match palette.len() {
        2 => 1,
        4 => 2,
        16 => 4,
        _ => return None,
    };
    let max_level = (palette.len() - 1) as u32;
    let is_ladder = palette
        .levels()
        .iter()
        .enumerate()
        .all(|(i, &level)| level as u32 == (i as u32 * 255 + max_level / 2) / max_level);

    is_ladder.then_some(bits)
}

/// PNG bit depth used for a palette.
pub fn png_bit_depth(palette: &GreyPalette) -> u8 {
    ladder_bits(palette).unwrap_or(8)
}

/// Encode as a greyscale PNG.
pub fn encode_png(image: &DitheredImage) -> Result<Vec<u8>, RenderError> {
    let width = image.width() as u32;
    let height = image.height() as u32;

    let (bit_depth, data) = match ladder_bits(image.palette()) {
        Some(bits) => {
            let depth = match bits {
                1 => png::BitDepth::One,
                2 => png::BitDepth::Two,
                _ => png::BitDepth::Four,
            };
            (depth, pack_nbits(&image.indices(), image.width(), bits))
        }
        None => (png::BitDepth::Eight, image.levels().to_vec()),
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Best);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack palette indices into N-bit PNG row data (1, 2 or 4 bits per pixel).
fn pack_nbits(indices: &[usize], width: usize, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = width.div_ceil(pixels_per_byte);
    let height = indices.len() / width;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx as u8 & mask) << shift;

            if i % pixels_per_byte == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

/// Write the image to `path`, choosing the format from the extension.
///
/// Returns the number of bytes on disk.
pub fn write_image(image: &DitheredImage, path: &Path) -> Result<u64, RenderError> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(true, |ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        let bytes = encode_png(image)?;
        std::fs::write(path, &bytes)?;
    } else {
        let grey = image::GrayImage::from_raw(
            image.width() as u32,
            image.height() as u32,
            image.levels().to_vec(),
        )
        .ok_or_else(|| RenderError::Encode("pixel buffer does not match dimensions".into()))?;
        grey.save(path)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
    }

    let size = std::fs::metadata(path)?.len();
    tracing::info!(path = %path.display(), bytes = size, "Wrote output image");
    Ok(size)
}
