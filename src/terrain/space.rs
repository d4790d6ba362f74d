//! Mapping between world space and terrain-normalized space

use crate::core::types::{Mat4, Vec2, Vec3};

/// Coordinate mapping a terrain exposes to brushes.
pub trait TerrainSpace {
    /// Project a world point onto the terrain's unit UV square
    /// (`x` along width, `y` along length).
    fn world_point_to_uv(&self, world: Vec3) -> Vec2;

    /// Transform a point from terrain-local (unnormalized) space to world space.
    fn local_to_world(&self, local: Vec3) -> Vec3;
}

/// Terrain placement and size, detached from the terrain's data so it can
/// be carried around while the data is borrowed mutably.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainTransform {
    local_to_world: Mat4,
    world_to_local: Mat4,
    size: Vec3,
}

impl TerrainTransform {
    pub fn new(local_to_world: Mat4, size: Vec3) -> Self {
        Self {
            local_to_world,
            world_to_local: local_to_world.inverse(),
            size,
        }
    }

    /// Terrain dimensions (width, height, length).
    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn local_to_world_matrix(&self) -> Mat4 {
        self.local_to_world
    }

    /// World position of a point given in terrain-normalized [0, 1] space.
    pub fn normalized_to_world(&self, normalized: Vec3) -> Vec3 {
        self.local_to_world(normalized * self.size)
    }
}

impl TerrainSpace for TerrainTransform {
    fn world_point_to_uv(&self, world: Vec3) -> Vec2 {
        let local = self.world_to_local.transform_point3(world);
        Vec2::new(local.x / self.size.x, local.z / self.size.z)
    }

    fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(local)
    }
}
