//! Per-frame input bundle for foliage painters

use crate::config::ScalerConfig;
use crate::core::types::Vec3;
use crate::filter::SpawnFilter;
use crate::mask::MaskTexture;

/// Mouse phase of the input event driving a paint call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MouseEvent {
    Down,
    #[default]
    Drag,
    Up,
}

/// Which way a brush pushes its target value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PainterAction {
    /// Plain left mouse: grow
    #[default]
    Normal,
    /// Ctrl + left mouse: shrink
    Negative,
}

impl PainterAction {
    /// +1 for `Normal`, -1 for `Negative`.
    pub fn sign(self) -> f32 {
        match self {
            PainterAction::Normal => 1.0,
            PainterAction::Negative => -1.0,
        }
    }
}

/// Everything one input frame hands to a painter.
pub struct PainterArgs<'a> {
    /// Brush stamp corners in world space, in winding order
    pub world_corners: [Vec3; 4],
    /// Optional brush-aligned probability mask
    pub mask: Option<&'a MaskTexture>,
    /// Also gate by the terrain's own mask map
    pub enable_terrain_mask: bool,
    pub action: PainterAction,
    /// Scale change per second at full mask weight
    pub scale_strength: f32,
    /// Prototype indices the user selected
    pub tree_indices: Vec<usize>,
    /// Ordered filter chain
    pub filters: &'a [Box<dyn SpawnFilter>],
    pub mouse_event: MouseEvent,
    /// Finalize the stroke this frame regardless of mouse phase
    pub commit_now: bool,
    /// Seconds this frame represents
    pub delta_time: f32,
}

impl<'a> PainterArgs<'a> {
    /// Frame arguments seeded from a brush configuration.
    pub fn from_config(config: &ScalerConfig, world_corners: [Vec3; 4]) -> Self {
        Self {
            world_corners,
            mask: None,
            enable_terrain_mask: false,
            action: PainterAction::Normal,
            scale_strength: config.default_strength,
            tree_indices: Vec::new(),
            filters: &[],
            mouse_event: MouseEvent::Drag,
            commit_now: false,
            delta_time: config.delta_time,
        }
    }

    /// Whether this frame finalizes the stroke instead of painting.
    pub fn is_commit(&self) -> bool {
        self.mouse_event == MouseEvent::Up || self.commit_now
    }

    /// Axis-aligned square stamp of half-size `radius` centred on `center`.
    pub fn square_corners(center: Vec3, radius: f32) -> [Vec3; 4] {
        [
            center + Vec3::new(-radius, 0.0, -radius),
            center + Vec3::new(-radius, 0.0, radius),
            center + Vec3::new(radius, 0.0, radius),
            center + Vec3::new(radius, 0.0, -radius),
        ]
    }
}
