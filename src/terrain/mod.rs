//! Terrain tiles as seen by foliage brushes.
//!
//! Heightmap storage, rendering and LOD live elsewhere; this module only
//! carries what brushes read and mark dirty.

pub mod data;
pub mod scene;
pub mod space;

pub use data::{DirtyFlags, TerrainData, TerrainGeometry};
pub use scene::SceneState;
pub use space::{TerrainSpace, TerrainTransform};

use crate::core::types::Mat4;

/// A placed terrain tile.
#[derive(Clone, Debug)]
pub struct Terrain {
    local_to_world: Mat4,
    /// `None` for a tile whose data asset is missing
    pub data: Option<TerrainData>,
}

impl Terrain {
    pub fn new(local_to_world: Mat4, data: TerrainData) -> Self {
        Self {
            local_to_world,
            data: Some(data),
        }
    }

    /// A tile with no data attached.
    pub fn without_data(local_to_world: Mat4) -> Self {
        Self {
            local_to_world,
            data: None,
        }
    }

    pub fn local_to_world(&self) -> Mat4 {
        self.local_to_world
    }

    pub fn set_local_to_world(&mut self, local_to_world: Mat4) {
        self.local_to_world = local_to_world;
    }

    /// Coordinate mapping for this tile, if it has data to size it.
    pub fn space(&self) -> Option<TerrainTransform> {
        self.data
            .as_ref()
            .map(|data| TerrainTransform::new(self.local_to_world, data.geometry.size()))
    }

    /// Recompute every tree's cached world position from its local data.
    pub fn update_trees_position(&mut self) {
        let Some(space) = self.space() else {
            return;
        };
        if let Some(data) = self.data.as_mut() {
            data.foliage
                .refresh_world_positions(|normalized| space.normalized_to_world(normalized));
        }
    }
}
