//! Error types for palette operations
//!
//! This module provides error types for level parsing and palette validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for palette validation.
///
/// Returned when a palette cannot be built, either because no levels were
/// supplied or because a textual level is not an integer in `0..=255`.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No levels provided in palette
    EmptyPalette,
    /// A textual level could not be parsed as a `u8`
    ParseLevel {
        /// Position of the offending entry in the input list
        index: usize,
        /// The entry as it was written
        input: String,
        /// Underlying integer parse failure
        source: ParseIntError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::ParseLevel { index, input, .. } => {
                write!(
                    f,
                    "invalid level {:?} at index {} (expected an integer in 0..=255)",
                    input, index
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseLevel { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_empty_palette_message() {
        assert_eq!(
            PaletteError::EmptyPalette.to_string(),
            "palette cannot be empty"
        );
    }

    #[test]
    fn test_parse_level_message_and_source() {
        let source = "300".parse::<u8>().unwrap_err();
        let err = PaletteError::ParseLevel {
            index: 2,
            input: "300".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "invalid level \"300\" at index 2 (expected an integer in 0..=255)"
        );
        assert!(err.source().is_some());
    }
}
