//! Axis-aligned rectangle in terrain UV space

use crate::core::types::Vec2;

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UvRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl UvRect {
    /// The unit square covering a whole terrain tile
    pub const UNIT: UvRect = UvRect {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    /// Create rect from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest rect containing every point. An empty slice gives a
    /// zero-sized rect at the origin.
    pub fn containing(points: &[Vec2]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        let mut rect = Self::new(*first, *first);
        for p in rest {
            rect.expand(*p);
        }
        rect
    }

    /// Get size (max - min)
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Get center point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if point is inside rect (edges inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y
    }

    /// Check if two rects overlap. Rects that only touch along an edge
    /// do not overlap.
    pub fn overlaps(&self, other: &UvRect) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x &&
        self.max.y > other.min.y && self.min.y < other.max.y
    }

    /// Smallest rect containing both rects
    pub fn union(&self, other: &UvRect) -> UvRect {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Expand rect to include point
    pub fn expand(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}
