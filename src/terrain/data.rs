//! Terrain tile data: geometry, foliage and masks

use std::ops::{BitOr, BitOrAssign};

use crate::core::types::Vec3;
use crate::foliage::FoliageData;
use crate::mask::MaskTexture;

/// Physical dimensions of a terrain tile in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainGeometry {
    pub width: f32,
    pub height: f32,
    pub length: f32,
}

impl TerrainGeometry {
    pub fn new(width: f32, height: f32, length: f32) -> Self {
        Self { width, height, length }
    }

    /// Dimensions as (width, height, length).
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.length)
    }
}

impl Default for TerrainGeometry {
    fn default() -> Self {
        Self::new(1000.0, 600.0, 1000.0)
    }
}

/// Set of terrain data categories that need rebuilding or saving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct DirtyFlags(pub u32);

impl DirtyFlags {
    pub const NONE: Self = Self(0);
    pub const FOLIAGE: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for DirtyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DirtyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Everything a terrain tile stores besides its placement.
#[derive(Clone, Debug, Default)]
pub struct TerrainData {
    pub geometry: TerrainGeometry,
    pub foliage: FoliageData,
    /// Persistent terrain-aligned mask map (red channel used for foliage rejection)
    pub mask: Option<MaskTexture>,
    dirty: DirtyFlags,
}

impl TerrainData {
    pub fn new(geometry: TerrainGeometry, foliage: FoliageData) -> Self {
        Self {
            geometry,
            foliage,
            mask: None,
            dirty: DirtyFlags::NONE,
        }
    }

    pub fn with_mask(mut self, mask: MaskTexture) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Flag categories as changed.
    pub fn set_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Return and reset the accumulated flags.
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::take(&mut self.dirty)
    }
}
