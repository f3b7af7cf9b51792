use std::cell::RefCell;
use std::sync::Arc;

use crate::core::{NodeOrdering, RadialFrame, RingSizePolicy, SortComparatorFn};

use super::SunburstPartition;

/// Geometry-side chart state plus the cached partition it produces.
pub(super) struct ChartLayoutState {
    pub(super) frame: RadialFrame,
    pub(super) ring_size_policy: RingSizePolicy,
    pub(super) ordering: NodeOrdering,
    pub(super) sort_comparator: Option<SortComparatorFn>,
    pub(super) partition_cache: RefCell<Option<Arc<SunburstPartition>>>,
}

impl ChartLayoutState {
    #[must_use]
    pub(super) fn new(
        frame: RadialFrame,
        ring_size_policy: RingSizePolicy,
        ordering: NodeOrdering,
    ) -> Self {
        Self {
            frame,
            ring_size_policy,
            ordering,
            sort_comparator: None,
            partition_cache: RefCell::new(None),
        }
    }

    pub(super) fn clear_partition_cache(&self) {
        self.partition_cache.borrow_mut().take();
    }
}
