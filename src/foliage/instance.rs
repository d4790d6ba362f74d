//! A single placed tree

use serde::{Deserialize, Serialize};

use crate::core::types::{Quat, Vec3};

/// One tree placed on a terrain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeInstance {
    /// Index into the terrain's tree prototype list
    pub prototype_index: usize,
    /// Position in terrain-normalized local space, each axis in [0, 1]
    pub position: Vec3,
    /// Orientation around the instance origin
    pub rotation: Quat,
    /// Per-axis scale, never negative
    pub scale: Vec3,
}

impl TreeInstance {
    /// Unit-scaled, unrotated instance.
    pub fn new(prototype_index: usize, position: Vec3) -> Self {
        Self {
            prototype_index,
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale.max(Vec3::ZERO);
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}
