use serde::{Deserialize, Serialize};

use crate::core::types::{HierarchyPath, PathSegment, path_starts_with};

/// Path-prefix filter selecting a whole subtree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HierarchyFilter {
    path: HierarchyPath,
}

impl HierarchyFilter {
    #[must_use]
    pub fn new(path: impl Into<HierarchyPath>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// `true` when `candidate` equals this filter's path or descends from it.
    ///
    /// A filter with an empty path selects nothing.
    #[must_use]
    pub fn is_filtered(&self, candidate: &[PathSegment]) -> bool {
        path_starts_with(candidate, &self.path)
    }

    /// `true` when `other` lies inside the subtree this filter selects.
    #[must_use]
    pub fn contains_filter(&self, other: &HierarchyFilter) -> bool {
        self.is_filtered(&other.path)
    }

    /// Ancestor, descendant or equal relationship in either direction.
    #[must_use]
    pub fn overlaps(&self, other: &HierarchyFilter) -> bool {
        self.contains_filter(other) || other.contains_filter(self)
    }
}

/// Outcome of one click computed against a [`FilterSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReconciliation {
    /// Filters to drop, in removal order.
    pub removed: Vec<HierarchyFilter>,
    pub added: Option<HierarchyFilter>,
    /// An active filter was identical to the clicked path.
    pub exact_match: bool,
}

impl FilterReconciliation {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty() && self.added.is_none()
    }
}

/// Ordered, duplicate-free set of active hierarchy filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    filters: Vec<HierarchyFilter>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HierarchyFilter> {
        self.filters.iter()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<HierarchyPath> {
        self.filters
            .iter()
            .map(|filter| filter.path.clone())
            .collect()
    }

    #[must_use]
    pub fn contains(&self, filter: &HierarchyFilter) -> bool {
        self.filters.contains(filter)
    }

    /// `true` when any active filter selects `path`.
    #[must_use]
    pub fn is_path_filtered(&self, path: &[PathSegment]) -> bool {
        self.filters.iter().any(|filter| filter.is_filtered(path))
    }

    /// Dimension predicate for linked views: no filters accept everything.
    #[must_use]
    pub fn accepts(&self, key: &[PathSegment]) -> bool {
        self.filters.is_empty() || self.is_path_filtered(key)
    }

    /// Active filters that are an ancestor of, descendant of, or equal to `path`.
    #[must_use]
    pub fn filters_for_path(&self, path: &[PathSegment]) -> Vec<&HierarchyFilter> {
        let clicked = HierarchyFilter::new(HierarchyPath::from(path));
        self.filters
            .iter()
            .filter(|filter| filter.is_filtered(path) || clicked.contains_filter(filter))
            .collect()
    }

    /// Computes the click transition without touching the set.
    ///
    /// Every overlapping filter is removed; the clicked path is added unless
    /// one of the removed filters was identical to it (toggle-off).
    #[must_use]
    pub fn plan_click(&self, path: &[PathSegment]) -> FilterReconciliation {
        let affected = self.filters_for_path(path);
        let exact_match = affected.iter().any(|filter| filter.path() == path);
        let removed = affected.into_iter().rev().cloned().collect();
        let added = (!exact_match).then(|| HierarchyFilter::new(HierarchyPath::from(path)));
        FilterReconciliation {
            removed,
            added,
            exact_match,
        }
    }

    /// Commits a planned transition in one step.
    pub fn apply(&mut self, plan: &FilterReconciliation) {
        self.filters.retain(|filter| !plan.removed.contains(filter));
        if let Some(added) = &plan.added {
            if !self.filters.contains(added) {
                self.filters.push(added.clone());
            }
        }
    }

    /// Plans and applies a click, returning what changed.
    pub fn click(&mut self, path: &[PathSegment]) -> FilterReconciliation {
        let plan = self.plan_click(path);
        self.apply(&plan);
        plan
    }

    /// Adds `filter` when absent, removes it when present. Returns `true` when added.
    pub fn toggle(&mut self, filter: HierarchyFilter) -> bool {
        if let Some(position) = self.filters.iter().position(|entry| *entry == filter) {
            self.filters.remove(position);
            return false;
        }
        self.filters.push(filter);
        true
    }

    /// Replaces every filter, dropping duplicates while keeping first occurrence order.
    pub fn replace_all(&mut self, filters: impl IntoIterator<Item = HierarchyFilter>) {
        self.filters.clear();
        for filter in filters {
            if !self.filters.contains(&filter) {
                self.filters.push(filter);
            }
        }
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }
}
