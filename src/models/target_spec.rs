use grey_dither::GreyPalette;

use crate::error::RenderError;

/// Output size and grey levels for a dithering target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub width: u32,
    pub height: u32,
    pub palette: GreyPalette,
}

/// Names of the presets compiled into the binary
pub const BUILTIN_PRESETS: [&str; 2] = ["gbc", "square"];

impl TargetSpec {
    /// Game Boy Color screen: 128x112, four shades
    pub fn gbc() -> Self {
        Self {
            width: 128,
            height: 112,
            palette: GreyPalette::four_shades(),
        }
    }

    /// 512x512, four shades
    pub fn square() -> Self {
        Self {
            width: 512,
            height: 512,
            palette: GreyPalette::four_shades(),
        }
    }

    /// Look up a built-in preset by name (case-insensitive)
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "gbc" => Some(Self::gbc()),
            "square" => Some(Self::square()),
            _ => None,
        }
    }

    /// Apply command-line overrides on top of a preset
    pub fn with_overrides(
        mut self,
        width: Option<u32>,
        height: Option<u32>,
        palette: Option<GreyPalette>,
    ) -> Self {
        if let Some(w) = width {
            self.width = w;
        }
        if let Some(h) = height {
            self.height = h;
        }
        if let Some(p) = palette {
            self.palette = p;
        }
        self
    }

    /// Reject targets with no pixels
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            Err(RenderError::UnsupportedDimensions {
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self::gbc()
    }
}
