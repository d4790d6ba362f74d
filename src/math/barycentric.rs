//! Barycentric coordinates for 2D triangles

use crate::core::types::{Vec2, Vec3};

/// Below this the triangle is treated as degenerate (zero area)
const DEGENERATE_EPSILON: f32 = 1e-12;

/// Barycentric weights of `p` with respect to triangle `(a, b, c)`.
///
/// Returns `(wa, wb, wc)` with `wa + wb + wc == 1`, so that
/// `p == a * wa + b * wb + c * wc`. Returns `None` for a degenerate
/// triangle.
pub fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<Vec3> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let wb = (d11 * d20 - d01 * d21) / denom;
    let wc = (d00 * d21 - d01 * d20) / denom;
    Some(Vec3::new(1.0 - wb - wc, wb, wc))
}

/// True when every weight is non-negative, i.e. the point lies inside the
/// triangle or on its boundary.
pub fn is_inside(weights: Vec3) -> bool {
    weights.x >= 0.0 && weights.y >= 0.0 && weights.z >= 0.0
}

/// Blend three anchors by barycentric weights.
pub fn interpolate(weights: Vec3, anchors: [Vec2; 3]) -> Vec2 {
    anchors[0] * weights.x + anchors[1] * weights.y + anchors[2] * weights.z
}
