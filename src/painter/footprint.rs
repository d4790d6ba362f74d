//! Brush stamp geometry for one input frame

use crate::core::types::{Vec2, Vec3};
use crate::math::{UvRect, barycentric, interpolate, is_inside};
use crate::terrain::TerrainSpace;

/// Mask-UV anchors for triangle (c0, c1, c2)
const FIRST_TRIANGLE_UV: [Vec2; 3] = [Vec2::ZERO, Vec2::Y, Vec2::ONE];
/// Mask-UV anchors for triangle (c0, c2, c3)
const SECOND_TRIANGLE_UV: [Vec2; 3] = [Vec2::ZERO, Vec2::ONE, Vec2::X];

/// The world-space quad a brush covers this frame, with its terrain UV bounds.
///
/// The quad is split along the c0-c2 diagonal into triangles (c0, c1, c2)
/// and (c0, c2, c3). Corners map to mask-UV (0,0), (0,1), (1,1), (1,0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushFootprint {
    pub corners: [Vec3; 4],
    /// Bounds of the corners in terrain UV space
    pub uv_rect: UvRect,
}

impl BrushFootprint {
    /// Project the corners onto the terrain. Returns `None` when the stamp
    /// does not overlap the terrain's unit UV square at all.
    pub fn resolve(corners: [Vec3; 4], space: &impl TerrainSpace) -> Option<Self> {
        let uvs = corners.map(|c| space.world_point_to_uv(c));
        let uv_rect = UvRect::containing(&uvs);
        if !uv_rect.overlaps(&UvRect::UNIT) {
            return None;
        }
        Some(Self { corners, uv_rect })
    }

    /// The two triangles in the horizontal (XZ) plane.
    pub fn triangles(&self) -> [[Vec2; 3]; 2] {
        let [c0, c1, c2, c3] = self.corners.map(|c| Vec2::new(c.x, c.z));
        [[c0, c1, c2], [c0, c2, c3]]
    }

    /// Brush-aligned mask coordinate of a horizontal point, or `None` when
    /// it lies outside both triangles. The first triangle wins on the
    /// shared diagonal.
    pub fn mask_uv(&self, point: Vec2) -> Option<Vec2> {
        let [first, second] = self.triangles();

        if let Some(w) = barycentric(point, first[0], first[1], first[2]) {
            if is_inside(w) {
                return Some(interpolate(w, FIRST_TRIANGLE_UV));
            }
        }
        if let Some(w) = barycentric(point, second[0], second[1], second[2]) {
            if is_inside(w) {
                return Some(interpolate(w, SECOND_TRIANGLE_UV));
            }
        }
        None
    }
}
