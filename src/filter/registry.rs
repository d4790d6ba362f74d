//! Registry of externally supplied filter kinds

use super::FilterKind;

/// Custom filter kinds registered by host code.
///
/// Brushes append these to their built-in allow-list, so a filter defined
/// outside this crate runs once its kind is registered here.
#[derive(Clone, Debug, Default)]
pub struct FilterRegistry {
    custom: Vec<FilterKind>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom kind. Registering the same kind twice is a no-op.
    pub fn register(&mut self, kind: FilterKind) -> &mut Self {
        if !self.custom.contains(&kind) {
            log::debug!("Registered custom spawn filter '{}'", kind.name());
            self.custom.push(kind);
        }
        self
    }

    pub fn custom_kinds(&self) -> &[FilterKind] {
        &self.custom
    }

    /// `built_in` followed by every registered custom kind not already in it.
    pub fn allow_list(&self, built_in: &[FilterKind]) -> Vec<FilterKind> {
        let mut kinds = built_in.to_vec();
        for kind in &self.custom {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }
}
