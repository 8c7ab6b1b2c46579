use grey_dither::GreyPalette;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::RenderError;
use crate::models::target_spec::{TargetSpec, BUILTIN_PRESETS};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Preset used when none is given on the command line
    #[serde(default)]
    pub default_preset: Option<String>,

    /// Additional (or overriding) presets
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,
}

/// A configured dithering target
#[derive(Debug, Deserialize, Clone)]
pub struct PresetConfig {
    pub width: u32,
    pub height: u32,

    /// Grey levels in palette order
    #[serde(default = "default_palette")]
    pub palette: Vec<u8>,
}

fn default_palette() -> Vec<u8> {
    vec![0, 85, 170, 255]
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, RenderError> {
        serde_yaml::from_str(content).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// Load configuration from a file, falling back to defaults on failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        presets = config.presets.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration if a path was given
    pub fn load_optional(path: Option<&Path>) -> Self {
        path.map(Self::load).unwrap_or_default()
    }

    /// Name of the preset to use when none is requested
    pub fn default_preset_name(&self) -> &str {
        self.default_preset.as_deref().unwrap_or("gbc")
    }

    /// Resolve a preset: configured presets take precedence over built-in ones
    pub fn preset(&self, name: &str) -> Result<TargetSpec, RenderError> {
        if let Some(preset) = self.presets.get(name) {
            let palette = GreyPalette::new(&preset.palette)?;
            return Ok(TargetSpec {
                width: preset.width,
                height: preset.height,
                palette,
            });
        }

        TargetSpec::builtin(name).ok_or_else(|| RenderError::UnknownPreset(name.to_string()))
    }

    /// All preset names, built-in first, then configured ones sorted
    pub fn preset_names(&self) -> Vec<String> {
        let mut configured: Vec<String> = self
            .presets
            .keys()
            .filter(|name| !BUILTIN_PRESETS.contains(&name.as_str()))
            .cloned()
            .collect();
        configured.sort();

        BUILTIN_PRESETS
            .iter()
            .map(|name| name.to_string())
            .chain(configured)
            .collect()
    }
}
