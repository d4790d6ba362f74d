//! Tree instance collection with change and dirty-region tracking

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::{Result, Vec3};
use crate::math::UvRect;
use super::instance::TreeInstance;

/// The foliage owned by one terrain tile.
///
/// Only the instances are persisted. World-position caches, change
/// generations and dirty regions are runtime bookkeeping.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FoliageData {
    /// `None` when the tile has no tree storage at all
    trees: Option<Vec<TreeInstance>>,
    /// World positions, index-aligned with `trees` after the last refresh
    #[serde(skip)]
    world_positions: Vec<Vec3>,
    /// UV regions touched since the last clear, for incremental rebuilds
    #[serde(skip)]
    dirty_regions: Vec<UvRect>,
    /// Bumped whenever the whole collection may have changed
    #[serde(skip)]
    tree_generation: u32,
    /// Set when the data needs to be saved
    #[serde(skip)]
    persist_dirty: bool,
}

impl FoliageData {
    /// Create foliage with the given trees.
    pub fn new(trees: Vec<TreeInstance>) -> Self {
        Self {
            trees: Some(trees),
            ..Default::default()
        }
    }

    /// Create foliage with no tree storage.
    pub fn without_trees() -> Self {
        Self::default()
    }

    pub fn trees(&self) -> Option<&[TreeInstance]> {
        self.trees.as_deref()
    }

    pub fn trees_mut(&mut self) -> Option<&mut Vec<TreeInstance>> {
        self.trees.as_mut()
    }

    /// Number of trees (0 when there is no storage).
    pub fn tree_count(&self) -> usize {
        self.trees.as_ref().map_or(0, Vec::len)
    }

    /// Signal that every instance may have changed.
    pub fn tree_all_changed(&mut self) {
        self.tree_generation = self.tree_generation.wrapping_add(1);
    }

    /// Change counter; differs whenever cached aggregates are stale.
    pub fn tree_generation(&self) -> u32 {
        self.tree_generation
    }

    /// Record a UV region whose trees need rebuilding. A region overlapping
    /// the last one recorded is merged into it.
    pub fn set_tree_region_dirty(&mut self, region: UvRect) {
        if let Some(last) = self.dirty_regions.last_mut() {
            if last.overlaps(&region) {
                *last = last.union(&region);
                return;
            }
        }
        self.dirty_regions.push(region);
    }

    pub fn tree_dirty_regions(&self) -> &[UvRect] {
        &self.dirty_regions
    }

    pub fn clear_tree_dirty_regions(&mut self) {
        self.dirty_regions.clear();
    }

    /// Flag the foliage for saving.
    pub fn mark_persist_dirty(&mut self) {
        self.persist_dirty = true;
    }

    pub fn is_persist_dirty(&self) -> bool {
        self.persist_dirty
    }

    /// Cached world positions from the last refresh.
    pub fn world_positions(&self) -> &[Vec3] {
        &self.world_positions
    }

    /// Recompute cached world positions from local data.
    pub fn refresh_world_positions(&mut self, to_world: impl Fn(Vec3) -> Vec3) {
        self.world_positions.clear();
        if let Some(trees) = &self.trees {
            self.world_positions
                .extend(trees.iter().map(|tree| to_world(tree.position)));
        }
    }

    /// Save instances to a JSON file and clear the persist flag.
    pub fn save_sync(&mut self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        self.persist_dirty = false;
        Ok(())
    }

    /// Load instances from a JSON file.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
