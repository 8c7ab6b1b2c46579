pub mod loader;
pub mod sink;

use grey_dither::{DitherOptions, GreyDitherer};
use std::path::Path;

use crate::error::RenderError;
use crate::models::TargetSpec;

pub use loader::{load_grey, to_grey};
pub use sink::{encode_png, ladder_bits, png_bit_depth, write_image};

/// Summary of a finished render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub width: u32,
    pub height: u32,
    /// Bytes written to the output file
    pub bytes: u64,
    /// Number of pixels at each palette position
    pub histogram: Vec<usize>,
}

/// Load `input`, dither it for `target` and write the result to `output`.
pub fn render_file(
    input: &Path,
    output: &Path,
    target: &TargetSpec,
    options: DitherOptions,
) -> Result<RenderReport, RenderError> {
    target.validate()?;

    let grey = load_grey(input, target.width, target.height)?;

    let ditherer = GreyDitherer::new(target.palette.clone()).options(options);
    let dithered = ditherer.dither(&grey);
    tracing::debug!(
        width = target.width,
        height = target.height,
        levels = target.palette.len(),
        wavefront = options.wavefront,
        "Dithered image"
    );

    let bytes = write_image(&dithered, output)?;

    let mut histogram = vec![0usize; target.palette.len()];
    for idx in dithered.indices() {
        histogram[idx] += 1;
    }

    Ok(RenderReport {
        width: target.width,
        height: target.height,
        bytes,
        histogram,
    })
}
