//! Widened scratch grid for error diffusion.

use crate::input::GreyImage;

/// Full-image working buffer holding intensities plus accumulated error.
///
/// Cells are `i32`, far wider than the 8-bit source, and every update
/// saturates instead of wrapping. Even a palette that cannot represent the
/// source at all (so error piles up across the whole image) can only pin a
/// cell at the `i32` limits, never flip its sign.
///
/// # Usage Pattern
///
/// 1. Create with [`WorkingBuffer::from_image`]
/// 2. For each pixel in raster order:
///    a. Read the accumulated value with `get(x, y)`
///    b. Push shares of the quantization error with `add_offset`
/// 3. Drop the buffer once the scan is done
#[derive(Debug)]
pub(crate) struct WorkingBuffer {
    cells: Vec<i32>,
    width: usize,
    height: usize,
}

impl WorkingBuffer {
    /// Widened copy of `image`.
    pub(crate) fn from_image(image: &GreyImage) -> Self {
        Self {
            cells: image.pixels().iter().map(|&v| i32::from(v)).collect(),
            width: image.width(),
            height: image.height(),
        }
    }

    /// Accumulated value at `(x, y)`.
    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> i32 {
        self.cells[y * self.width + x]
    }

    /// Add `amount` to the cell at `(x + dx, y + dy)`.
    ///
    /// The target is computed first and the write only happens when it lies
    /// inside the grid: columns are checked against the width and rows
    /// against the height. Returns whether the write happened.
    #[inline]
    pub(crate) fn add_offset(&mut self, x: usize, y: usize, dx: i32, dy: i32, amount: i32) -> bool {
        let Some(tx) = x.checked_add_signed(dx as isize).filter(|&tx| tx < self.width) else {
            return false;
        };
        let Some(ty) = y.checked_add_signed(dy as isize).filter(|&ty| ty < self.height) else {
            return false;
        };

        let cell = &mut self.cells[ty * self.width + tx];
        *cell = cell.saturating_add(amount);
        true
    }

    /// Sum of all cells.
    #[cfg(test)]
    pub(crate) fn total(&self) -> i64 {
        self.cells.iter().map(|&c| i64::from(c)).sum()
    }
}
