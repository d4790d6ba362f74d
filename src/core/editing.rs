//! Process-wide "foliage editing in progress" signal.
//!
//! A brush stroke sets the flag on its first frame that touches the terrain
//! and clears it on release. Other systems (LOD culling, instancing rebuilds)
//! hold a clone of the handle and only ever read it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared, single-writer / multi-reader editing flag.
///
/// Cloning produces another handle to the same flag.
#[derive(Clone, Debug, Default)]
pub struct EditingFlag {
    inner: Arc<AtomicBool>,
}

impl EditingFlag {
    /// Create a new flag in the cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark that a foliage stroke is in progress.
    pub fn begin(&self) {
        self.inner.store(true, Ordering::Release);
    }

    /// Mark that the current foliage stroke has finished.
    pub fn end(&self) {
        self.inner.store(false, Ordering::Release);
    }

    /// Whether a foliage stroke is currently in progress.
    pub fn is_editing(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}
