//! Probability gating of instances by brush and terrain masks

use crate::core::types::Vec2;
use crate::mask::MaskSampler;
use super::rng::RandomSource;

/// Result of running an instance through the mask gate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaskDecision {
    /// Leave the instance untouched this frame
    Skip,
    /// Mutate the instance, scaling the change by `weight`
    Pass { weight: f32 },
}

/// The masks active for one paint frame.
///
/// The brush mask is read as luminance: brighter texels make inclusion
/// more likely and weight the change. The terrain mask is read from the red
/// channel with the opposite sense: a redder texel makes rejection more
/// likely. When a terrain mask is active its luminance replaces the brush
/// weight, so the last mask sampled decides how far an instance moves.
pub struct MaskGate<'a> {
    brush_mask: Option<&'a dyn MaskSampler>,
    terrain_mask: Option<&'a dyn MaskSampler>,
}

impl<'a> MaskGate<'a> {
    pub fn new(
        brush_mask: Option<&'a dyn MaskSampler>,
        terrain_mask: Option<&'a dyn MaskSampler>,
    ) -> Self {
        Self { brush_mask, terrain_mask }
    }

    /// A gate that passes everything at full weight.
    pub fn open() -> Self {
        Self::new(None, None)
    }

    /// Decide whether an instance is affected.
    ///
    /// `mask_uv` is the brush-aligned coordinate from the footprint;
    /// `terrain_uv` is the instance's own normalized (x, z) position.
    pub fn evaluate(
        &self,
        mask_uv: Vec2,
        terrain_uv: Vec2,
        rng: &mut dyn RandomSource,
    ) -> MaskDecision {
        let mut weight = 1.0;

        if let Some(mask) = self.brush_mask {
            weight = mask.sample_bilinear(mask_uv.x, mask_uv.y).grayscale();
            if rng.value() > weight {
                return MaskDecision::Skip;
            }
        }

        if let Some(mask) = self.terrain_mask {
            let color = mask.sample_bilinear(terrain_uv.x, terrain_uv.y);
            if rng.value() < color.r {
                return MaskDecision::Skip;
            }
            weight = color.grayscale();
        }

        MaskDecision::Pass { weight }
    }
}
