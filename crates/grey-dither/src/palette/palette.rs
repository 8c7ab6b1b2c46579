//! Grey level palette with nearest-level matching.
//!
//! This module provides the [`GreyPalette`] type, an ordered, non-empty list of
//! permitted output intensities, and the free function [`nearest`] that maps
//! any working intensity onto it.

use std::str::FromStr;

use super::error::PaletteError;
use crate::api::DitherError;

/// Find the position of the level closest to `value`.
///
/// Linear scan with a strict less-than comparison, so the first minimal entry
/// in palette order wins ties. Returns `None` only for an empty slice.
#[inline]
fn nearest_position(value: i32, levels: &[u8]) -> Option<usize> {
    let (&first, rest) = levels.split_first()?;

    let mut best_idx = 0;
    let mut best_dist = value.abs_diff(i32::from(first));

    for (i, &level) in rest.iter().enumerate() {
        let dist = value.abs_diff(i32::from(level));
        if dist < best_dist {
            best_dist = dist;
            best_idx = i + 1;
        }
    }

    Some(best_idx)
}

/// Map an intensity onto the closest level of `levels`.
///
/// `value` may lie anywhere in the `i32` range: the working buffer of the
/// diffusion engine routinely carries values below 0 or above 255.
///
/// When two levels are equally close, the one that appears first in `levels`
/// is returned.
///
/// # Errors
///
/// Returns [`DitherError::InvalidArgument`] if `levels` is empty.
///
/// # Example
///
/// ```
/// use grey_dither::nearest;
///
/// assert_eq!(nearest(200, &[0, 85, 170, 255]).unwrap(), 170);
/// assert_eq!(nearest(5, &[0, 10]).unwrap(), 0);
/// assert_eq!(nearest(-40, &[0, 85, 170, 255]).unwrap(), 0);
/// assert!(nearest(5, &[]).is_err());
/// ```
pub fn nearest(value: i32, levels: &[u8]) -> Result<u8, DitherError> {
    nearest_position(value, levels)
        .map(|idx| levels[idx])
        .ok_or_else(|| DitherError::InvalidArgument("palette cannot be empty".to_string()))
}

/// An ordered, non-empty set of grey output levels.
///
/// The order in which levels are supplied is kept as-is: it decides which
/// level wins when a value is equidistant from two of them. Levels are
/// conventionally ascending but nothing here depends on that.
///
/// # Example
///
/// ```
/// use grey_dither::GreyPalette;
///
/// let palette = GreyPalette::new(&[0, 85, 170, 255]).unwrap();
///
/// assert_eq!(palette.len(), 4);
/// assert_eq!(palette.nearest(100), 85);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreyPalette {
    levels: Vec<u8>,
}

impl GreyPalette {
    /// Create a palette from grey levels.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `levels` is empty.
    pub fn new(levels: &[u8]) -> Result<Self, PaletteError> {
        if levels.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        Ok(Self {
            levels: levels.to_vec(),
        })
    }

    /// Four evenly spaced levels: `0, 85, 170, 255`.
    pub fn four_shades() -> Self {
        Self {
            levels: vec![0, 85, 170, 255],
        }
    }

    /// Number of levels in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`: construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The levels in palette order.
    #[inline]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Position of the first occurrence of `level`, if it is in the palette.
    pub fn position(&self, level: u8) -> Option<usize> {
        self.levels.iter().position(|&l| l == level)
    }

    /// Whether `level` is one of the palette's levels.
    #[inline]
    pub fn contains(&self, level: u8) -> bool {
        self.levels.contains(&level)
    }

    /// Position of the level closest to `value` (first one wins on ties).
    #[inline]
    pub fn index_of_nearest(&self, value: i32) -> usize {
        // Non-empty by construction.
        nearest_position(value, &self.levels).unwrap_or(0)
    }

    /// Level closest to `value` (first one wins on ties).
    #[inline]
    pub fn nearest(&self, value: i32) -> u8 {
        self.levels[self.index_of_nearest(value)]
    }
}

impl FromStr for GreyPalette {
    type Err = PaletteError;

    /// Parse a comma-separated list of levels such as `"0, 85, 170, 255"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let levels = s
            .split(',')
            .map(str::trim)
            .enumerate()
            .filter(|(_, entry)| !entry.is_empty())
            .map(|(index, entry)| {
                entry
                    .parse::<u8>()
                    .map_err(|source| PaletteError::ParseLevel {
                        index,
                        input: entry.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        GreyPalette::new(&levels)
    }
}

impl TryFrom<Vec<u8>> for GreyPalette {
    type Error = PaletteError;

    fn try_from(levels: Vec<u8>) -> Result<Self, Self::Error> {
        if levels.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { levels })
    }
}
