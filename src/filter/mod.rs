//! Spawn filters: pluggable per-instance adjustments applied by foliage
//! brushes before a change is committed.
//!
//! Filters form a runtime-open set. Each one carries a [`FilterKind`] tag;
//! a brush only runs filters whose tag is on its allow-list, which is its
//! built-in kinds plus any custom kinds registered in a [`FilterRegistry`].

pub mod registry;
pub mod scale_clamp;

pub use registry::FilterRegistry;
pub use scale_clamp::ScaleClampFilter;

use crate::core::types::{Quat, Vec3};
use crate::terrain::TerrainTransform;

/// Identifies a family of spawn filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FilterKind(&'static str);

impl FilterKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Proposed placement for one instance, passed through the filter chain.
#[derive(Clone, Copy, Debug)]
pub struct FilterArgs {
    /// Terrain the instance belongs to
    pub terrain: TerrainTransform,
    /// World-space position
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Set by a filter to drop the change entirely
    pub should_exclude: bool,
}

impl FilterArgs {
    pub fn new(terrain: TerrainTransform, position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            terrain,
            position,
            rotation,
            scale,
            should_exclude: false,
        }
    }
}

/// A pluggable spawn filter.
pub trait SpawnFilter {
    /// Tag checked against a brush's allow-list.
    fn kind(&self) -> FilterKind;

    /// Disabled filters stay in the chain but are skipped.
    fn ignore(&self) -> bool {
        false
    }

    /// Adjust the proposal or set `should_exclude`.
    fn apply(&self, args: &mut FilterArgs);
}

/// Run `filters` in order over `args`, skipping ignored filters and kinds
/// not in `allowed`. Stops as soon as a filter excludes the instance.
pub fn apply_chain(filters: &[Box<dyn SpawnFilter>], allowed: &[FilterKind], args: &mut FilterArgs) {
    for filter in filters {
        if !filter.ignore() && allowed.contains(&filter.kind()) {
            filter.apply(args);
        }
        if args.should_exclude {
            log::trace!("Instance excluded by filter '{}'", filter.kind().name());
            break;
        }
    }
}
