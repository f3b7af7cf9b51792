use crate::extensions::ChartPlugin;

use super::InvalidationLevel;

/// Runtime orchestration state grouped separately from model/layout/presentation.
pub(super) struct ChartRuntimeState {
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) pending_invalidation: InvalidationLevel,
}

impl ChartRuntimeState {
    #[must_use]
    pub(super) fn with_full_invalidation() -> Self {
        Self {
            plugins: Vec::new(),
            pending_invalidation: InvalidationLevel::Layout,
        }
    }
}
