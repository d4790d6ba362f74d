//! Interactive foliage painters.
//!
//! A painter is driven once per input event while the user drags a brush
//! over a terrain. Drag frames resolve the brush footprint, gate instances
//! through the active masks and mutate them; the release frame finalizes
//! the stroke instead.

pub mod args;
pub mod footprint;
pub mod mask_gate;
pub mod rng;
pub mod tree_scaler;

pub use args::{MouseEvent, PainterAction, PainterArgs};
pub use footprint::BrushFootprint;
pub use mask_gate::{MaskDecision, MaskGate};
pub use rng::{FixedRandom, RandomSource, SimpleRng};
pub use tree_scaler::TreeScaler;

use crate::filter::FilterKind;
use crate::terrain::{SceneState, Terrain};

/// Terrain resources a painter touches, for history snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceFlag {
    TreeInstances,
}

/// Why a paint call did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No prototype is selected
    EmptySelection,
    /// The terrain has no data attached
    MissingTerrainData,
    /// The terrain data has no tree storage
    MissingTreeStorage,
    /// The brush does not overlap the terrain
    OffTerrain,
}

/// Per-frame counters for a painting pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Instances visited
    pub scanned: usize,
    /// Not the prototype drawn for this instance
    pub prototype_mismatch: usize,
    /// Outside both footprint triangles
    pub outside_footprint: usize,
    /// Rejected by a mask probability test
    pub masked_out: usize,
    /// Excluded by a spawn filter
    pub excluded: usize,
    /// Instances whose scale was written back
    pub mutated: usize,
}

/// What a paint call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    Skipped(SkipReason),
    Painted(PaintStats),
    /// The stroke was finalized
    Committed,
}

/// Common interface of foliage brushes.
pub trait FoliagePainter {
    /// Usage hint shown in the editor.
    fn instruction(&self) -> String;

    /// Prefix for history entries this painter records.
    fn history_prefix(&self) -> &str;

    /// Filter kinds this painter will run.
    fn suitable_filter_kinds(&self) -> Vec<FilterKind>;

    /// Resources to snapshot before a stroke.
    fn resource_flags_for_history(&self, args: &PainterArgs<'_>) -> Vec<ResourceFlag>;

    /// Handle one input frame.
    fn paint(
        &self,
        terrain: &mut Terrain,
        scene: &mut SceneState,
        rng: &mut dyn RandomSource,
        args: &PainterArgs<'_>,
    ) -> PaintOutcome;
}
