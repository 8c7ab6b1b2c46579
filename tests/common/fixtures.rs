//! Source images and scratch directories for integration tests.

use image::{GrayImage, Luma, Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding inputs and outputs for one test
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Horizontal grey ramp, saved as PNG
    pub fn gradient_png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let img = GrayImage::from_fn(width, height, |x, _| {
            Luma([(x * 255 / (width - 1).max(1)) as u8])
        });
        let path = self.path(name);
        img.save(&path).expect("Failed to write gradient fixture");
        path
    }

    /// Flat colour image, saved in the format implied by `name`
    pub fn flat_rgb(&self, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        let img = RgbImage::from_pixel(width, height, Rgb(rgb));
        let path = self.path(name);
        img.save(&path).expect("Failed to write flat fixture");
        path
    }

    /// Seeded random noise image
    pub fn noise_png(&self, name: &str, width: u32, height: u32, seed: u64) -> PathBuf {
        let mut rng = StdRng::seed_from_u64(seed);
        let img = GrayImage::from_fn(width, height, |_, _| Luma([rng.gen::<u8>()]));
        let path = self.path(name);
        img.save(&path).expect("Failed to write noise fixture");
        path
    }

    /// Write a YAML config file
    pub fn config(&self, yaml: &str) -> PathBuf {
        let path = self.path("gbdither.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config fixture");
        path
    }
}
