//! Host scene persistence hook

/// Tracks whether the scene hosting a terrain has unsaved changes.
#[derive(Clone, Debug, Default)]
pub struct SceneState {
    dirty: bool,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the scene as needing a save.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the flag once the host has saved.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
