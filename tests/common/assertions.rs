//! Assertions on written output files.

use image::GrayImage;
use std::path::Path;

/// Decode an output file as 8-bit grey
pub fn read_grey(path: &Path) -> GrayImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()))
        .to_luma8()
}

/// Assert every pixel is one of `levels`
pub fn assert_only_levels(img: &GrayImage, levels: &[u8]) {
    for (x, y, p) in img.enumerate_pixels() {
        assert!(
            levels.contains(&p.0[0]),
            "Pixel ({x}, {y}) = {} is not in {levels:?}",
            p.0[0]
        );
    }
}

/// Return the PNG IHDR bit depth of a file
pub fn png_bit_depth(path: &Path) -> u8 {
    let bytes = std::fs::read(path).expect("Failed to read output");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "Not a PNG file");
    bytes[24]
}
