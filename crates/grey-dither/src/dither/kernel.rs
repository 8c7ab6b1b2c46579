//! Error diffusion kernel definition.
//!
//! This module defines how quantization error is split between the
//! neighbours of a pixel that have not been visited yet.

/// An error diffusion kernel.
///
/// Each entry specifies an offset `(dx, dy)` and a weight for that neighbour.
/// A neighbour receives `error * weight / divisor`, truncated toward zero.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Because every
/// share is truncated on its own, the shares actually applied never add up to
/// more than the error in magnitude.
///
/// # Scan Order
///
/// Entries must only target pixels later in raster order: `dy > 0`, or
/// `dy == 0` with `dx > 0`. Entries are applied in the order listed.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (0 = current row, positive = below)
    /// - `weight`: numerator of the fraction of error to diffuse
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // east
        (-1, 1, 3), // southwest
        (0, 1, 5),  // south
        (1, 1, 1),  // southeast
    ],
    divisor: 16,
};

impl Kernel {
    /// Share of `error` that goes to a neighbour with the given weight.
    ///
    /// Integer division truncates toward zero, so the share of a negative
    /// error is the negation of the share of the matching positive error.
    #[inline]
    pub fn share(&self, error: i32, weight: u8) -> i32 {
        let share = i64::from(error) * i64::from(weight) / i64::from(self.divisor);
        // |share| <= |error| whenever weight <= divisor, which every kernel here satisfies.
        share as i32
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum()
    }

    /// The `(dx, dy, share)` triples that diffusing `error` would produce.
    pub fn contributions(&self, error: i32) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        self.entries
            .iter()
            .map(move |&(dx, dy, weight)| (dx, dy, self.share(error, weight)))
    }

    /// Smallest skew `s >= 1` such that every entry satisfies `dx + s * dy > 0`.
    ///
    /// With this skew, every pixel that sends error to `(x, y)` lies on a
    /// wave `x' + s * y'` strictly smaller than `x + s * y`, so all pixels
    /// sharing a wave index can be quantized independently.
    pub fn wavefront_skew(&self) -> usize {
        self.entries
            .iter()
            .filter(|&&(_, dy, _)| dy > 0)
            .map(|&(dx, dy, _)| {
                // ceil((1 - dx) / dy) for positive dy
                let need = 1 - dx;
                if need <= 0 {
                    0
                } else {
                    (need + dy - 1) / dy
                }
            })
            .max()
            .unwrap_or(0)
            .max(1) as usize
    }
}
