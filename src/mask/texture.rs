//! RGBA mask texture backed by the `image` crate

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::core::types::Result;
use super::{MaskColor, MaskSampler};

/// Resolution brush masks are resampled to before a frame samples them.
pub const DEFAULT_MASK_RESOLUTION: u32 = 256;

/// An owned RGBA8 mask image.
///
/// Row 0 of the underlying image is the top of the mask; UV `v = 0` maps to
/// the bottom row.
#[derive(Clone, Debug)]
pub struct MaskTexture {
    image: RgbaImage,
}

impl MaskTexture {
    /// Wrap an existing image.
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// A mask filled with a single color.
    pub fn solid(width: u32, height: u32, color: MaskColor) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(color.to_rgba8())))
    }

    /// Build a mask from a per-texel function of image coordinates.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> MaskColor) -> Self {
        Self::new(RgbaImage::from_fn(width, height, |x, y| Rgba(f(x, y).to_rgba8())))
    }

    /// Load a mask from any image format the `image` crate can decode.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)?.to_rgba8();
        log::debug!(
            "Loaded mask {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::new(image))
    }

    /// Resampled copy at the given resolution. The source is left untouched.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        if self.image.width() == width && self.image.height() == height {
            return self.clone();
        }
        Self::new(imageops::resize(&self.image, width, height, FilterType::Triangle))
    }

    /// Texel at image coordinates (row 0 at the top).
    pub fn pixel(&self, x: u32, y: u32) -> MaskColor {
        MaskColor::from_rgba8(self.image.get_pixel(x, y).0)
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl MaskSampler for MaskTexture {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn sample_bilinear(&self, u: f32, v: f32) -> MaskColor {
        let (w, h) = (self.image.width(), self.image.height());
        if w == 0 || h == 0 {
            return MaskColor::BLACK;
        }

        // Texel centers sit at half-texel offsets
        let x = (u * w as f32 - 0.5).clamp(0.0, (w - 1) as f32);
        let y = ((1.0 - v) * h as f32 - 0.5).clamp(0.0, (h - 1) as f32);

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(w - 1);
        let y1 = (y0 + 1).min(h - 1);
        let tx = x - x0 as f32;
        let ty = y - y0 as f32;

        let top = self.pixel(x0, y0).lerp(self.pixel(x1, y0), tx);
        let bottom = self.pixel(x0, y1).lerp(self.pixel(x1, y1), tx);
        top.lerp(bottom, ty)
    }
}
