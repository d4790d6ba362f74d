//! Clamp proposed instance scale into a range

use crate::core::types::Vec3;
use super::{FilterArgs, FilterKind, SpawnFilter};

/// Keeps each scale axis within `[min_scale, max_scale]`.
#[derive(Clone, Debug)]
pub struct ScaleClampFilter {
    pub min_scale: Vec3,
    pub max_scale: Vec3,
    pub ignore: bool,
}

impl ScaleClampFilter {
    pub const KIND: FilterKind = FilterKind::new("scale_clamp");

    pub fn new(min_scale: Vec3, max_scale: Vec3) -> Self {
        Self {
            min_scale,
            max_scale,
            ignore: false,
        }
    }
}

impl Default for ScaleClampFilter {
    fn default() -> Self {
        Self::new(Vec3::splat(0.5), Vec3::splat(2.0))
    }
}

impl SpawnFilter for ScaleClampFilter {
    fn kind(&self) -> FilterKind {
        Self::KIND
    }

    fn ignore(&self) -> bool {
        self.ignore
    }

    fn apply(&self, args: &mut FilterArgs) {
        // Per-axis so a misordered range still yields a value inside it
        let lo = self.min_scale.min(self.max_scale);
        let hi = self.min_scale.max(self.max_scale);
        args.scale = args.scale.clamp(lo, hi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Mat4, Quat};
    use crate::terrain::TerrainTransform;

    fn args_with_scale(scale: Vec3) -> FilterArgs {
        let terrain = TerrainTransform::new(Mat4::IDENTITY, Vec3::splat(10.0));
        FilterArgs::new(terrain, Vec3::ZERO, Quat::IDENTITY, scale)
    }

    #[test]
    fn test_clamps_each_axis() {
        let filter = ScaleClampFilter::new(Vec3::splat(0.5), Vec3::splat(2.0));
        let mut args = args_with_scale(Vec3::new(0.1, 1.0, 5.0));
        filter.apply(&mut args);
        assert_eq!(args.scale, Vec3::new(0.5, 1.0, 2.0));
        assert!(!args.should_exclude);
    }

    #[test]
    fn test_misordered_range() {
        let filter = ScaleClampFilter::new(Vec3::splat(3.0), Vec3::splat(1.0));
        let mut args = args_with_scale(Vec3::splat(10.0));
        filter.apply(&mut args);
        assert_eq!(args.scale, Vec3::splat(3.0));
    }
}
