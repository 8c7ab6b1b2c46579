pub mod config;
pub mod target_spec;

pub use config::{AppConfig, PresetConfig};
pub use target_spec::{TargetSpec, BUILTIN_PRESETS};
