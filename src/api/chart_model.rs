use crate::core::{
    CapConfig, FilterSet, HierarchyPath, HierarchyRecord, OthersBucket, TreeNode, build_hierarchy,
    cap_records,
};
use crate::interaction::InteractionState;

use super::ValueAccessorFn;

/// Data-side chart state: records, derived tree and active filters.
pub(super) struct ChartModel {
    pub(super) records: Vec<HierarchyRecord>,
    pub(super) value_accessor: Option<ValueAccessorFn>,
    pub(super) cap: CapConfig,
    pub(super) tree: TreeNode<HierarchyRecord>,
    pub(super) others: Option<OthersBucket>,
    pub(super) filters: FilterSet,
    pub(super) interaction: InteractionState,
}

impl ChartModel {
    #[must_use]
    pub(super) fn new(cap: CapConfig) -> Self {
        Self {
            records: Vec::new(),
            value_accessor: None,
            cap,
            tree: empty_tree(),
            others: None,
            filters: FilterSet::new(),
            interaction: InteractionState::default(),
        }
    }

    /// Measures, caps and rebuilds the hierarchy from the current records.
    pub(super) fn rebuild_tree(&mut self) {
        let measured: Vec<HierarchyRecord> = self
            .records
            .iter()
            .map(|record| HierarchyRecord {
                key: record.key.clone(),
                value: self.measure(record),
            })
            .collect();
        let capped = cap_records(&measured, &self.cap);
        self.tree = build_hierarchy(&capped.records, |record: &HierarchyRecord| record.value);
        self.others = capped.others;

        let tree = &self.tree;
        self.interaction
            .retain_hover_if(|path| tree.find(path).is_some());
    }

    fn measure(&self, record: &HierarchyRecord) -> f64 {
        match &self.value_accessor {
            Some(accessor) => accessor(record),
            None => record.value,
        }
    }
}

fn empty_tree() -> TreeNode<HierarchyRecord> {
    TreeNode {
        key: None,
        path: HierarchyPath::new(),
        value: 0.0,
        children: Vec::new(),
        data: None,
    }
}
