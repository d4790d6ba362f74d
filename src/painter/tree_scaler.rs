//! Brush that grows or shrinks tree instances under its footprint

use crate::config::ScalerConfig;
use crate::core::EditingFlag;
use crate::core::types::{Vec2, Vec3};
use crate::filter::{self, FilterArgs, FilterKind, FilterRegistry, ScaleClampFilter};
use crate::foliage::TreeInstance;
use crate::mask::{MaskColor, MaskSampler, DEFAULT_MASK_RESOLUTION};
use crate::terrain::{DirtyFlags, SceneState, Terrain, TerrainTransform};
use super::args::PainterArgs;
use super::footprint::BrushFootprint;
use super::mask_gate::{MaskDecision, MaskGate};
use super::rng::RandomSource;
use super::{FoliagePainter, PaintOutcome, PaintStats, ResourceFlag, SkipReason};

/// Stands in for a terrain that has no mask map of its own.
static DEFAULT_TERRAIN_MASK: MaskColor = MaskColor::BLACK;

/// Add `delta` to every axis of `scale`, never going below zero.
pub fn apply_scale_delta(scale: Vec3, delta: f32) -> Vec3 {
    (scale + Vec3::splat(delta)).max(Vec3::ZERO)
}

/// Scales tree instances while the brush is dragged.
///
/// Prototype selection policy: for every instance visited, one prototype
/// index is drawn at random from the selection and the instance is only
/// eligible if it matches that draw. With several prototypes selected each
/// one is therefore touched only part of the time on any given frame, which
/// evens out over a stroke.
#[derive(Clone, Debug, Default)]
pub struct TreeScaler {
    config: ScalerConfig,
    registry: FilterRegistry,
    editing: EditingFlag,
}

impl TreeScaler {
    pub const HISTORY_PREFIX: &'static str = "Scale Tree";

    /// Filter kinds the scaler runs without registration.
    pub const BUILT_IN_FILTERS: [FilterKind; 1] = [ScaleClampFilter::KIND];

    /// Create a scaler that reports stroke activity through `editing`.
    ///
    /// A zero mask resolution falls back to the default.
    pub fn new(mut config: ScalerConfig, editing: EditingFlag) -> Self {
        if config.mask_resolution == 0 {
            log::warn!(
                "{}: mask_resolution 0 replaced with {}",
                Self::HISTORY_PREFIX,
                DEFAULT_MASK_RESOLUTION
            );
            config.mask_resolution = DEFAULT_MASK_RESOLUTION;
        }
        Self {
            config,
            registry: FilterRegistry::new(),
            editing,
        }
    }

    pub fn with_registry(mut self, registry: FilterRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    pub fn registry_mut(&mut self) -> &mut FilterRegistry {
        &mut self.registry
    }

    /// Handle observers can clone to watch stroke activity.
    pub fn editing_flag(&self) -> &EditingFlag {
        &self.editing
    }

    fn skip(&self, reason: SkipReason) -> PaintOutcome {
        log::debug!("{}: skipped frame ({:?})", Self::HISTORY_PREFIX, reason);
        PaintOutcome::Skipped(reason)
    }

    /// Finalize a stroke: refresh positions and hand dirty state to persistence.
    fn commit(&self, terrain: &mut Terrain) {
        terrain.update_trees_position();
        if let Some(data) = terrain.data.as_mut() {
            data.foliage.clear_tree_dirty_regions();
            data.foliage.mark_persist_dirty();
        }
        self.editing.end();
        log::debug!("{}: stroke committed", Self::HISTORY_PREFIX);
    }

    /// One pass over every instance, mutating those the brush reaches.
    fn scan(
        &self,
        trees: &mut [TreeInstance],
        space: TerrainTransform,
        footprint: &BrushFootprint,
        gate: &MaskGate<'_>,
        rng: &mut dyn RandomSource,
        args: &PainterArgs<'_>,
    ) -> PaintStats {
        let allowed = self.suitable_filter_kinds();
        let step = args.action.sign() * args.scale_strength * args.delta_time;
        let mut stats = PaintStats::default();

        for tree in trees.iter_mut() {
            stats.scanned += 1;

            let drawn = args.tree_indices[rng.range(0, args.tree_indices.len())];
            if tree.prototype_index != drawn {
                stats.prototype_mismatch += 1;
                continue;
            }

            let world = space.normalized_to_world(tree.position);
            let Some(mask_uv) = footprint.mask_uv(Vec2::new(world.x, world.z)) else {
                stats.outside_footprint += 1;
                continue;
            };

            let terrain_uv = Vec2::new(tree.position.x, tree.position.z);
            let weight = match gate.evaluate(mask_uv, terrain_uv, rng) {
                MaskDecision::Pass { weight } => weight,
                MaskDecision::Skip => {
                    stats.masked_out += 1;
                    continue;
                }
            };

            let scale = apply_scale_delta(tree.scale, step * weight);
            let mut filter_args = FilterArgs::new(space, world, tree.rotation, scale);
            filter::apply_chain(args.filters, &allowed, &mut filter_args);
            if filter_args.should_exclude {
                stats.excluded += 1;
                continue;
            }

            tree.scale = filter_args.scale.max(Vec3::ZERO);
            stats.mutated += 1;
        }

        stats
    }
}

impl FoliagePainter for TreeScaler {
    fn instruction(&self) -> String {
        [
            "Scale tree instances.",
            "   - Hold Left Mouse to scale up.",
            "   - Hold Ctrl & Left Mouse to scale down.",
        ]
        .join("\n")
    }

    fn history_prefix(&self) -> &str {
        Self::HISTORY_PREFIX
    }

    fn suitable_filter_kinds(&self) -> Vec<FilterKind> {
        self.registry.allow_list(&Self::BUILT_IN_FILTERS)
    }

    fn resource_flags_for_history(&self, _args: &PainterArgs<'_>) -> Vec<ResourceFlag> {
        vec![ResourceFlag::TreeInstances]
    }

    fn paint(
        &self,
        terrain: &mut Terrain,
        scene: &mut SceneState,
        rng: &mut dyn RandomSource,
        args: &PainterArgs<'_>,
    ) -> PaintOutcome {
        if args.tree_indices.is_empty() {
            return self.skip(SkipReason::EmptySelection);
        }
        let Some(space) = terrain.space() else {
            return self.skip(SkipReason::MissingTerrainData);
        };
        let has_trees = terrain
            .data
            .as_ref()
            .is_some_and(|data| data.foliage.trees().is_some());
        if !has_trees {
            return self.skip(SkipReason::MissingTreeStorage);
        }

        if args.is_commit() {
            self.commit(terrain);
            return PaintOutcome::Committed;
        }

        let Some(footprint) = BrushFootprint::resolve(args.world_corners, &space) else {
            return self.skip(SkipReason::OffTerrain);
        };
        let Some(data) = terrain.data.as_mut() else {
            return self.skip(SkipReason::MissingTerrainData);
        };
        let Some(trees) = data.foliage.trees_mut() else {
            return self.skip(SkipReason::MissingTreeStorage);
        };
        self.editing.begin();

        // Frame-local copy so the caller's mask can change underneath us
        let resolution = self.config.mask_resolution;
        let brush_mask = args.mask.map(|mask| mask.resized(resolution, resolution));

        let terrain_mask = if args.enable_terrain_mask {
            Some(match data.mask.as_ref() {
                Some(mask) => mask as &dyn MaskSampler,
                None => &DEFAULT_TERRAIN_MASK,
            })
        } else {
            None
        };
        let gate = MaskGate::new(
            brush_mask.as_ref().map(|mask| mask as &dyn MaskSampler),
            terrain_mask,
        );

        let stats = self.scan(trees, space, &footprint, &gate, rng, args);

        data.foliage.tree_all_changed();
        data.foliage.set_tree_region_dirty(footprint.uv_rect);
        data.set_dirty(DirtyFlags::FOLIAGE);
        scene.mark_dirty();

        log::debug!(
            "{}: scanned {} trees, scaled {} ({} outside brush, {} masked, {} excluded)",
            Self::HISTORY_PREFIX,
            stats.scanned,
            stats.mutated,
            stats.outside_footprint,
            stats.masked_out,
            stats.excluded,
        );

        PaintOutcome::Painted(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::core::types::Mat4;
    use crate::filter::SpawnFilter;
    use crate::foliage::FoliageData;
    use crate::mask::{MaskColor, MaskTexture};
    use crate::math::UvRect;
    use crate::painter::args::{MouseEvent, PainterAction};
    use crate::painter::rng::FixedRandom;
    use crate::terrain::{TerrainData, TerrainGeometry};

    const BRUSH_CENTER: Vec3 = Vec3::new(50.0, 0.0, 50.0);
    const BRUSH_RADIUS: f32 = 20.0;
    /// Grid trees whose world x and z are both in 35..=65
    const UNDER_BRUSH: usize = 16;

    /// 10x10 grid of trees at world (5 + 10i, 0, 5 + 10j) on a 100m tile.
    fn grid_trees(prototype_of: impl Fn(usize) -> usize) -> Vec<TreeInstance> {
        let mut trees = Vec::new();
        for j in 0..10 {
            for i in 0..10 {
                let position = Vec3::new(0.05 + 0.1 * i as f32, 0.0, 0.05 + 0.1 * j as f32);
                trees.push(TreeInstance::new(prototype_of(trees.len()), position));
            }
        }
        trees
    }

    fn terrain_with(trees: Vec<TreeInstance>) -> Terrain {
        let data = TerrainData::new(
            TerrainGeometry::new(100.0, 50.0, 100.0),
            FoliageData::new(trees),
        );
        Terrain::new(Mat4::IDENTITY, data)
    }

    fn under_brush(tree: &TreeInstance) -> bool {
        let world = tree.position * 100.0;
        (world.x - BRUSH_CENTER.x).abs() <= BRUSH_RADIUS
            && (world.z - BRUSH_CENTER.z).abs() <= BRUSH_RADIUS
    }

    fn drag_args<'a>(scaler: &TreeScaler) -> PainterArgs<'a> {
        let corners = PainterArgs::square_corners(BRUSH_CENTER, BRUSH_RADIUS);
        let mut args = PainterArgs::from_config(scaler.config(), corners);
        args.tree_indices = vec![0];
        args.scale_strength = 1.0;
        args.delta_time = 1.0;
        args
    }

    fn trees(terrain: &Terrain) -> &[TreeInstance] {
        terrain.data.as_ref().unwrap().foliage.trees().unwrap()
    }

    fn painted(outcome: PaintOutcome) -> PaintStats {
        match outcome {
            PaintOutcome::Painted(stats) => stats,
            other => panic!("Expected Painted, got {:?}", other),
        }
    }

    #[test]
    fn test_scale_delta_never_negative() {
        let scales = [0.0, 0.3, 1.0, 7.5];
        let deltas = [-100.0, -1.0, -0.3, 0.0, 0.2, 5.0];
        for &s in &scales {
            for &d in &deltas {
                let out = apply_scale_delta(Vec3::splat(s), d);
                assert_eq!(out, Vec3::splat((s + d).max(0.0)));
                assert!(out.min_element() >= 0.0);
            }
        }
    }

    #[test]
    fn test_grow_under_brush() {
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let args = drag_args(&scaler);

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));

        assert_eq!(stats.scanned, 100);
        assert_eq!(stats.mutated, UNDER_BRUSH);
        assert_eq!(stats.outside_footprint, 100 - UNDER_BRUSH);
        for tree in trees(&terrain) {
            let expected = if under_brush(tree) { 2.0 } else { 1.0 };
            assert_eq!(tree.scale, Vec3::splat(expected), "tree at {:?}", tree.position);
        }
    }

    #[test]
    fn test_paint_marks_dirty_state() {
        let scaler = TreeScaler::default();
        let observer = scaler.editing_flag().clone();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let args = drag_args(&scaler);

        scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args);

        let data = terrain.data.as_ref().unwrap();
        assert_eq!(data.foliage.tree_generation(), 1);
        assert_eq!(data.foliage.tree_dirty_regions().len(), 1);
        let region = data.foliage.tree_dirty_regions()[0];
        assert!((region.min - Vec2::splat(0.3)).length() < 1e-5);
        assert!((region.max - Vec2::splat(0.7)).length() < 1e-5);
        assert!(data.dirty().contains(DirtyFlags::FOLIAGE));
        assert!(scene.is_dirty());
        assert!(observer.is_editing());
    }

    #[test]
    fn test_off_terrain_is_noop() {
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        // UV rect (2,2)-(3,3)
        args.world_corners = [
            Vec3::new(200.0, 0.0, 200.0),
            Vec3::new(200.0, 0.0, 300.0),
            Vec3::new(300.0, 0.0, 300.0),
            Vec3::new(300.0, 0.0, 200.0),
        ];

        let outcome = scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args);

        assert_eq!(outcome, PaintOutcome::Skipped(SkipReason::OffTerrain));
        assert!(trees(&terrain).iter().all(|t| t.scale == Vec3::ONE));
        let data = terrain.data.as_ref().unwrap();
        assert_eq!(data.foliage.tree_generation(), 0);
        assert!(data.foliage.tree_dirty_regions().is_empty());
        assert!(data.dirty().is_empty());
        assert!(!scene.is_dirty());
        assert!(!scaler.editing_flag().is_editing());
    }

    #[test]
    fn test_black_mask_skips_everything() {
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let black = MaskTexture::solid(16, 16, MaskColor::BLACK);
        let mut args = drag_args(&scaler);
        args.mask = Some(&black);

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.5), &args));

        assert_eq!(stats.mutated, 0);
        assert_eq!(stats.masked_out, UNDER_BRUSH);
        assert!(trees(&terrain).iter().all(|t| t.scale == Vec3::ONE));
    }

    #[test]
    fn test_mask_brightness_weights_delta() {
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let gray = MaskTexture::solid(16, 16, MaskColor::gray(0.5));
        let weight = gray.pixel(0, 0).grayscale();
        let mut args = drag_args(&scaler);
        args.mask = Some(&gray);
        args.scale_strength = 2.0;

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));

        assert_eq!(stats.mutated, UNDER_BRUSH);
        for tree in trees(&terrain).iter().filter(|t| under_brush(t)) {
            assert!((tree.scale.x - (1.0 + 2.0 * weight)).abs() < 0.01);
            assert_eq!(tree.scale.x, tree.scale.y);
            assert_eq!(tree.scale.y, tree.scale.z);
        }
    }

    #[test]
    fn test_shrink_clamps_to_zero() {
        let scaler = TreeScaler::default();
        let trees_in = grid_trees(|_| 0)
            .into_iter()
            .map(|t| t.with_scale(Vec3::splat(0.5)))
            .collect();
        let mut terrain = terrain_with(trees_in);
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.action = PainterAction::Negative;
        args.scale_strength = 10.0;

        painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));

        for tree in trees(&terrain) {
            let expected = if under_brush(tree) { 0.0 } else { 0.5 };
            assert_eq!(tree.scale, Vec3::splat(expected));
        }
    }

    #[test]
    fn test_release_commits_without_scaling() {
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let args = drag_args(&scaler);

        // One drag frame, then release
        scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args);
        let after_drag: Vec<Vec3> = trees(&terrain).iter().map(|t| t.scale).collect();
        assert!(scaler.editing_flag().is_editing());

        let mut release = drag_args(&scaler);
        release.mouse_event = MouseEvent::Up;
        let outcome = scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &release);

        assert_eq!(outcome, PaintOutcome::Committed);
        let after_release: Vec<Vec3> = trees(&terrain).iter().map(|t| t.scale).collect();
        assert_eq!(after_drag, after_release);

        let data = terrain.data.as_ref().unwrap();
        assert_eq!(data.foliage.world_positions().len(), 100);
        assert!(data.foliage.tree_dirty_regions().is_empty());
        assert!(data.foliage.is_persist_dirty());
        assert!(!scaler.editing_flag().is_editing());
    }

    #[test]
    fn test_commit_now_overrides_drag() {
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        terrain
            .data
            .as_mut()
            .unwrap()
            .foliage
            .set_tree_region_dirty(UvRect::UNIT);
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.commit_now = true;

        let outcome = scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args);

        assert_eq!(outcome, PaintOutcome::Committed);
        assert!(trees(&terrain).iter().all(|t| t.scale == Vec3::ONE));
        let data = terrain.data.as_ref().unwrap();
        assert!(data.foliage.tree_dirty_regions().is_empty());
        assert_eq!(data.foliage.tree_generation(), 0);
    }

    #[test]
    fn test_preconditions() {
        let scaler = TreeScaler::default();
        let mut scene = SceneState::new();
        let mut rng = FixedRandom::new(0.0);

        let mut args = drag_args(&scaler);
        args.tree_indices.clear();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        assert_eq!(
            scaler.paint(&mut terrain, &mut scene, &mut rng, &args),
            PaintOutcome::Skipped(SkipReason::EmptySelection)
        );

        let args = drag_args(&scaler);
        let mut bare = Terrain::without_data(Mat4::IDENTITY);
        assert_eq!(
            scaler.paint(&mut bare, &mut scene, &mut rng, &args),
            PaintOutcome::Skipped(SkipReason::MissingTerrainData)
        );

        let data = TerrainData::new(TerrainGeometry::default(), FoliageData::without_trees());
        let mut treeless = Terrain::new(Mat4::IDENTITY, data);
        assert_eq!(
            scaler.paint(&mut treeless, &mut scene, &mut rng, &args),
            PaintOutcome::Skipped(SkipReason::MissingTreeStorage)
        );

        assert!(!scene.is_dirty());
        assert!(!scaler.editing_flag().is_editing());
    }

    #[test]
    fn test_single_prototype_draw_per_instance() {
        let scaler = TreeScaler::default();
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.tree_indices = vec![0, 1];

        for pick in 0..2 {
            let mut terrain = terrain_with(grid_trees(|i| i % 2));
            let mut rng = FixedRandom::new(0.0).with_pick(pick);
            let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut rng, &args));

            assert_eq!(stats.prototype_mismatch, 50);
            assert_eq!(stats.mutated, UNDER_BRUSH / 2);
            for tree in trees(&terrain) {
                let grown = tree.prototype_index == pick && under_brush(tree);
                assert_eq!(tree.scale.x > 1.0, grown);
            }
        }
    }

    #[test]
    fn test_unselected_prototype_untouched() {
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 3));
        let mut scene = SceneState::new();
        let args = drag_args(&scaler);

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));

        assert_eq!(stats.prototype_mismatch, 100);
        assert_eq!(stats.mutated, 0);
    }

    #[test]
    fn test_scale_clamp_filter_applied() {
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let filters: Vec<Box<dyn SpawnFilter>> =
            vec![Box::new(ScaleClampFilter::new(Vec3::splat(0.5), Vec3::splat(1.5)))];
        let mut args = drag_args(&scaler);
        args.filters = filters.as_slice();

        scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args);

        for tree in trees(&terrain).iter().filter(|t| under_brush(t)) {
            assert_eq!(tree.scale, Vec3::splat(1.5));
        }
    }

    const VETO: FilterKind = FilterKind::new("veto");

    struct Veto {
        calls: Rc<Cell<usize>>,
    }

    impl SpawnFilter for Veto {
        fn kind(&self) -> FilterKind {
            VETO
        }

        fn apply(&self, args: &mut FilterArgs) {
            self.calls.set(self.calls.get() + 1);
            args.should_exclude = true;
        }
    }

    #[test]
    fn test_unregistered_custom_filter_ignored() {
        let scaler = TreeScaler::default();
        let calls = Rc::new(Cell::new(0));
        let filters: Vec<Box<dyn SpawnFilter>> = vec![Box::new(Veto { calls: calls.clone() })];
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.filters = filters.as_slice();

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));

        assert_eq!(calls.get(), 0);
        assert_eq!(stats.mutated, UNDER_BRUSH);
    }

    #[test]
    fn test_registered_custom_filter_excludes() {
        let mut scaler = TreeScaler::default();
        scaler.registry_mut().register(VETO);
        let calls = Rc::new(Cell::new(0));
        let filters: Vec<Box<dyn SpawnFilter>> = vec![Box::new(Veto { calls: calls.clone() })];
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.filters = filters.as_slice();

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));

        assert_eq!(calls.get(), UNDER_BRUSH);
        assert_eq!(stats.excluded, UNDER_BRUSH);
        assert_eq!(stats.mutated, 0);
        assert!(trees(&terrain).iter().all(|t| t.scale == Vec3::ONE));
    }

    #[test]
    fn test_terrain_mask_gate() {
        let scaler = TreeScaler::default();
        let red = MaskTexture::solid(8, 8, MaskColor::new(1.0, 0.0, 0.0, 1.0));
        let mut scene = SceneState::new();

        let mut terrain = terrain_with(grid_trees(|_| 0));
        terrain.data.as_mut().unwrap().mask = Some(red);

        let mut args = drag_args(&scaler);
        args.enable_terrain_mask = false;
        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.5), &args));
        assert_eq!(stats.mutated, UNDER_BRUSH);

        args.enable_terrain_mask = true;
        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.5), &args));
        assert_eq!(stats.mutated, 0);
        assert_eq!(stats.masked_out, UNDER_BRUSH);
    }

    #[test]
    fn test_terrain_mask_enabled_without_map() {
        // A missing map reads as black: nothing is rejected, nothing grows
        let scaler = TreeScaler::default();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.enable_terrain_mask = true;

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));
        assert_eq!(stats.masked_out, 0);
        assert_eq!(stats.mutated, UNDER_BRUSH);
        assert!(trees(&terrain).iter().all(|t| t.scale == Vec3::ONE));
    }

    #[test]
    fn test_terrain_mask_luminance_weights_delta() {
        let scaler = TreeScaler::default();
        let green = MaskTexture::solid(8, 8, MaskColor::new(0.0, 0.5, 0.0, 1.0));
        let weight = green.pixel(0, 0).grayscale();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        terrain.data.as_mut().unwrap().mask = Some(green);
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.enable_terrain_mask = true;

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));

        assert_eq!(stats.mutated, UNDER_BRUSH);
        for tree in trees(&terrain).iter().filter(|t| under_brush(t)) {
            assert!((tree.scale.x - (1.0 + weight)).abs() < 1e-4, "got {:?}", tree.scale);
        }
    }

    #[test]
    fn test_brush_and_terrain_masks_together() {
        let scaler = TreeScaler::default();
        let brush = MaskTexture::solid(16, 16, MaskColor::gray(0.8));
        let green = MaskTexture::solid(8, 8, MaskColor::new(0.0, 0.5, 0.0, 1.0));
        let terrain_weight = green.pixel(0, 0).grayscale();
        let mut terrain = terrain_with(grid_trees(|_| 0));
        terrain.data.as_mut().unwrap().mask = Some(green);
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.mask = Some(&brush);
        args.enable_terrain_mask = true;

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.0), &args));

        // The terrain sample is taken last and sets the weight
        assert_eq!(stats.mutated, UNDER_BRUSH);
        for tree in trees(&terrain).iter().filter(|t| under_brush(t)) {
            assert!((tree.scale.x - (1.0 + terrain_weight)).abs() < 1e-4, "got {:?}", tree.scale);
        }

        // A draw above the brush luminance rejects before the terrain is consulted
        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.9), &args));
        assert_eq!(stats.masked_out, UNDER_BRUSH);
    }

    #[test]
    fn test_zero_mask_resolution_falls_back() {
        let config = ScalerConfig { mask_resolution: 0, ..ScalerConfig::default() };
        let scaler = TreeScaler::new(config, EditingFlag::new());
        assert_eq!(scaler.config().mask_resolution, DEFAULT_MASK_RESOLUTION);

        let white = MaskTexture::solid(4, 4, MaskColor::WHITE);
        let mut terrain = terrain_with(grid_trees(|_| 0));
        let mut scene = SceneState::new();
        let mut args = drag_args(&scaler);
        args.mask = Some(&white);

        let stats = painted(scaler.paint(&mut terrain, &mut scene, &mut FixedRandom::new(0.5), &args));
        assert_eq!(stats.mutated, UNDER_BRUSH);
    }

    #[test]
    fn test_painter_metadata() {
        let mut scaler = TreeScaler::default();
        assert_eq!(scaler.history_prefix(), "Scale Tree");
        assert!(scaler.instruction().contains("Ctrl"));
        assert_eq!(scaler.suitable_filter_kinds(), vec![ScaleClampFilter::KIND]);

        scaler.registry_mut().register(VETO);
        assert_eq!(scaler.suitable_filter_kinds(), vec![ScaleClampFilter::KIND, VETO]);

        let args = drag_args(&scaler);
        assert_eq!(scaler.resource_flags_for_history(&args), vec![ResourceFlag::TreeInstances]);
    }

    #[test]
    fn test_seeded_stroke_is_deterministic() {
        let scaler = TreeScaler::default();
        let gray = MaskTexture::solid(16, 16, MaskColor::gray(0.5));
        let mut args = drag_args(&scaler);
        args.mask = Some(&gray);
        args.tree_indices = vec![0, 1];

        let run = || {
            let mut terrain = terrain_with(grid_trees(|i| i % 2));
            let mut scene = SceneState::new();
            let mut rng = crate::painter::rng::SimpleRng::new(scaler.config().seed);
            for _ in 0..5 {
                scaler.paint(&mut terrain, &mut scene, &mut rng, &args);
            }
            trees(&terrain).to_vec()
        };

        assert_eq!(run(), run());
    }
}
