//! gbdither - Game Boy style grey dithering
//!
//! Loads an image, scales it to a small target resolution and reduces it to a
//! handful of grey levels with Floyd-Steinberg error diffusion.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
