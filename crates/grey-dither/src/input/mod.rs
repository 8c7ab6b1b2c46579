//! Input types for the dithering pipeline.
//!
//! [`GreyImage`] is the validated source buffer every scan reads from.

mod grey_image;

pub use grey_image::GreyImage;
