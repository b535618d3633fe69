//! Branding images, decoded once and prepared for embedding.
//!
//! JPEG files keep their original bytes and are embedded with `DCTDecode`.
//! Everything else is reduced to raw 8-bit samples, with any real
//! transparency split off into a separate greyscale alpha plane.

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Gray,
    Rgb,
}

impl ColorSpace {
    pub fn pdf_name(self) -> &'static str {
        match self {
            ColorSpace::Gray => "DeviceGray",
            ColorSpace::Rgb => "DeviceRGB",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageData {
    /// The untouched JPEG file.
    Jpeg(Vec<u8>),
    /// Interleaved 8-bit samples in `color_space` order, row-major.
    Samples(Vec<u8>),
}

/// An image ready to become a PDF image XObject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    pub data: ImageData,
    /// One byte per pixel, present only when some pixel is not fully opaque.
    pub alpha: Option<Vec<u8>>,
}

impl EmbeddedImage {
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        tracing::debug!(path = %path.display(), "loading image asset");
        let asset_err = |message: String| ExportError::Asset {
            path: path.to_path_buf(),
            message,
        };
        let bytes = std::fs::read(path).map_err(|e| asset_err(e.to_string()))?;
        Self::from_bytes(bytes).map_err(|e| asset_err(e.to_string()))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, image::ImageError> {
        let format = image::guess_format(&bytes)?;
        let decoded = image::load_from_memory_with_format(&bytes, format)?;
        let (width, height) = (decoded.width(), decoded.height());
        let color = decoded.color();
        let color_space = if color.channel_count() <= 2 {
            ColorSpace::Gray
        } else {
            ColorSpace::Rgb
        };

        if format == ImageFormat::Jpeg {
            return Ok(Self {
                width,
                height,
                color_space,
                data: ImageData::Jpeg(bytes),
                alpha: None,
            });
        }

        let alpha = color.has_alpha().then(|| alpha_plane(&decoded)).flatten();
        let samples = match color_space {
            ColorSpace::Gray => decoded.to_luma8().into_raw(),
            ColorSpace::Rgb => decoded.to_rgb8().into_raw(),
        };

        Ok(Self {
            width,
            height,
            color_space,
            data: ImageData::Samples(samples),
            alpha,
        })
    }
}

fn alpha_plane(image: &DynamicImage) -> Option<Vec<u8>> {
    let plane: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
    plane.iter().any(|&a| a != u8::MAX).then_some(plane)
}
