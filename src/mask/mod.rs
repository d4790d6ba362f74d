//! Probability masks sampled by foliage brushes.
//!
//! A mask is any 2D color source that can be bilinearly sampled in UV
//! space. Brushes read either its luminance (brush masks) or its red
//! channel (terrain masks) as a probability.

pub mod texture;

pub use texture::{MaskTexture, DEFAULT_MASK_RESOLUTION};

use serde::{Deserialize, Serialize};

/// Linear RGBA color with channels in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaskColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl MaskColor {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Uniform gray with full alpha.
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value, 1.0)
    }

    /// Convert from 8-bit channels.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
        )
    }

    /// Convert to 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Perceptual luminance (Rec. 601 weights).
    pub fn grayscale(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Component-wise linear interpolation.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

/// Minimal image-sampling capability the brush algorithms depend on.
pub trait MaskSampler {
    /// Width in texels.
    fn width(&self) -> u32;

    /// Height in texels.
    fn height(&self) -> u32;

    /// Bilinear sample at `(u, v)`, where `(0, 0)` is the bottom-left corner
    /// and `(1, 1)` the top-right. Coordinates outside [0, 1] are clamped.
    fn sample_bilinear(&self, u: f32, v: f32) -> MaskColor;
}

/// A single color acts as a 1x1 mask that samples the same everywhere.
impl MaskSampler for MaskColor {
    fn width(&self) -> u32 {
        1
    }

    fn height(&self) -> u32 {
        1
    }

    fn sample_bilinear(&self, _u: f32, _v: f32) -> MaskColor {
        *self
    }
}
