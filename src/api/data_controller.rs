use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{CapConfig, HierarchyRecord, OthersBucket, TreeNode};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{InvalidationLevel, PluginEvent, SunburstChart, ValueAccessorFn};

impl<R: Renderer> SunburstChart<R> {
    /// Replaces all records and rebuilds the hierarchy.
    ///
    /// Record order is not significant; siblings are re-sorted on partition.
    /// Active filters are kept.
    pub fn set_records(&mut self, records: Vec<HierarchyRecord>) {
        debug!(count = records.len(), "set records");
        self.core.model.records = records;
        self.refresh_tree();
    }

    /// Appends one record and rebuilds the hierarchy.
    pub fn append_record(&mut self, record: HierarchyRecord) {
        self.core.model.records.push(record);
        trace!(count = self.core.model.records.len(), "append record");
        self.refresh_tree();
    }

    /// Removes every record.
    pub fn clear_records(&mut self) {
        self.core.model.records.clear();
        debug!("clear records");
        self.refresh_tree();
    }

    #[must_use]
    pub fn records(&self) -> &[HierarchyRecord] {
        &self.core.model.records
    }

    /// Hierarchy built from the measured (and capped) records.
    #[must_use]
    pub fn tree(&self) -> &TreeNode<HierarchyRecord> {
        &self.core.model.tree
    }

    /// Records folded into the "Others" slice by the last rebuild.
    #[must_use]
    pub fn others(&self) -> Option<&OthersBucket> {
        self.core.model.others.as_ref()
    }

    /// Installs a value accessor used to measure each record.
    pub fn set_value_accessor(&mut self, accessor: ValueAccessorFn) {
        self.core.model.value_accessor = Some(accessor);
        self.refresh_tree();
    }

    /// Restores measuring records by their `value` field.
    pub fn clear_value_accessor(&mut self) {
        self.core.model.value_accessor = None;
        self.refresh_tree();
    }

    /// Convenience wrapper around [`Self::set_value_accessor`].
    pub fn set_value_accessor_fn(
        &mut self,
        accessor: impl Fn(&HierarchyRecord) -> f64 + Send + Sync + 'static,
    ) {
        self.set_value_accessor(Arc::new(accessor));
    }

    #[must_use]
    pub fn cap_config(&self) -> &CapConfig {
        &self.core.model.cap
    }

    pub fn set_cap_config(&mut self, cap: CapConfig) -> ChartResult<()> {
        cap.validate()?;
        debug!(cap = ?cap.cap, take_front = cap.take_front, "set cap config");
        self.core.model.cap = cap;
        self.refresh_tree();
        Ok(())
    }

    fn refresh_tree(&mut self) {
        self.core.model.rebuild_tree();
        self.invalidate(InvalidationLevel::Layout);
        self.emit_plugin_event(PluginEvent::DataUpdated {
            records_len: self.core.model.records.len(),
        });
    }
}
