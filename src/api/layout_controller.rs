use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{
    NodeOrdering, RadialFrame, RingSizeMode, RingSizePolicy, SortComparatorFn, SortableNode,
    partition,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{InvalidationLevel, SunburstChart, SunburstPartition};

impl<R: Renderer> SunburstChart<R> {
    /// Returns the partition of the current tree, computing it when stale.
    ///
    /// The returned value is a shared read-only snapshot; later mutations
    /// produce a new one instead of changing it.
    pub fn partition(&self) -> ChartResult<Arc<SunburstPartition>> {
        if let Some(cached) = self.core.layout.partition_cache.borrow().as_ref() {
            return Ok(Arc::clone(cached));
        }

        let result = Arc::new(self.compute_partition()?);
        *self.core.layout.partition_cache.borrow_mut() = Some(Arc::clone(&result));
        Ok(result)
    }

    fn compute_partition(&self) -> ChartResult<SunburstPartition> {
        let layout = &self.core.layout;
        let ordering = layout.ordering;
        let builtin = move |a: &SortableNode<'_>, b: &SortableNode<'_>| ordering.compare(a, b);
        let comparator: &dyn Fn(&SortableNode<'_>, &SortableNode<'_>) -> Ordering =
            match &layout.sort_comparator {
                Some(custom) => custom.as_ref(),
                None => &builtin,
            };
        partition(
            &self.core.model.tree,
            comparator,
            layout.ring_size_policy.ring_sizes(),
            layout.frame,
        )
    }

    #[must_use]
    pub fn ring_size_mode(&self) -> RingSizeMode {
        self.core.layout.ring_size_policy.mode()
    }

    /// Installs a ring-size policy.
    ///
    /// The policy is checked against the current tree height right away; on
    /// failure the previous policy stays active and the error is returned.
    pub fn set_ring_size_policy(&mut self, policy: RingSizePolicy) -> ChartResult<()> {
        let ring_count = self.core.model.tree.height();
        if let Err(err) = policy.ring_sizes().relative_sizes_of(ring_count) {
            warn!(error = %err, ring_count, "rejecting ring size policy");
            return Err(err);
        }
        debug!(mode = ?policy.mode(), ring_count, "set ring size policy");
        self.core.layout.ring_size_policy = policy;
        self.invalidate(InvalidationLevel::Layout);
        Ok(())
    }

    /// Shorthand for [`RingSizePolicy::Equal`].
    pub fn use_equal_ring_sizes(&mut self) -> ChartResult<()> {
        self.set_ring_size_policy(RingSizePolicy::Equal)
    }

    /// Shorthand for [`RingSizePolicy::relative`].
    pub fn set_relative_ring_sizes(
        &mut self,
        sizes_fn: impl Fn(usize) -> Vec<f64> + Send + Sync + 'static,
    ) -> ChartResult<()> {
        self.set_ring_size_policy(RingSizePolicy::relative(sizes_fn))
    }

    #[must_use]
    pub fn ordering(&self) -> NodeOrdering {
        self.core.layout.ordering
    }

    pub fn set_ordering(&mut self, ordering: NodeOrdering) {
        self.core.layout.ordering = ordering;
        self.invalidate(InvalidationLevel::Layout);
    }

    /// Overrides the built-in ordering with a custom sibling comparator.
    pub fn set_sort_comparator(&mut self, comparator: SortComparatorFn) {
        self.core.layout.sort_comparator = Some(comparator);
        self.invalidate(InvalidationLevel::Layout);
    }

    pub fn clear_sort_comparator(&mut self) {
        self.core.layout.sort_comparator = None;
        self.invalidate(InvalidationLevel::Layout);
    }

    #[must_use]
    pub fn radial_frame(&self) -> RadialFrame {
        self.core.layout.frame
    }

    pub fn set_radius(&mut self, radius: f64) -> ChartResult<()> {
        let frame = RadialFrame::new(radius, self.core.layout.frame.inner_radius)?;
        self.set_radial_frame(frame);
        Ok(())
    }

    pub fn set_inner_radius(&mut self, inner_radius: f64) -> ChartResult<()> {
        let frame = RadialFrame::new(self.core.layout.frame.radius, inner_radius)?;
        self.set_radial_frame(frame);
        Ok(())
    }

    fn set_radial_frame(&mut self, frame: RadialFrame) {
        debug!(
            radius = frame.radius,
            inner_radius = frame.inner_radius,
            "set radial frame"
        );
        self.core.layout.frame = frame;
        self.invalidate(InvalidationLevel::Layout);
    }
}
