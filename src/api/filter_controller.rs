use tracing::debug;

use crate::core::{
    FilterReconciliation, FilterSet, HierarchyFilter, HierarchyPath, PathSegment, SlicePoint,
    hit_test,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::SliceSelection;
use crate::render::Renderer;

use super::{InvalidationLevel, PluginEvent, SunburstChart, print_filters};

impl<R: Renderer> SunburstChart<R> {
    /// Handles a click on the slice at `path`.
    ///
    /// Every active filter that is an ancestor of, descendant of, or equal to
    /// `path` is removed. The clicked path is then added unless it was itself
    /// active, which makes a second click on the same slice a toggle-off.
    /// Listeners see one event per removed/added filter and exactly one
    /// `FiltersChanged` for the whole batch.
    pub fn click(&mut self, path: &[PathSegment]) -> ChartResult<FilterReconciliation> {
        if path.is_empty() {
            return Err(ChartError::InvalidData(
                "clicked path must not be empty".to_owned(),
            ));
        }

        let plan = self.core.model.filters.plan_click(path);
        self.core.model.filters.apply(&plan);
        debug!(
            ?path,
            removed = plan.removed.len(),
            added = plan.added.is_some(),
            exact_match = plan.exact_match,
            "reconcile click"
        );
        self.emit_filter_batch(&plan);
        Ok(plan)
    }

    /// Hit-tests a pointer position relative to the chart center and clicks
    /// the slice under it. Returns `None` when no slice is hit.
    pub fn click_at(&mut self, x: f64, y: f64) -> ChartResult<Option<FilterReconciliation>> {
        let Some(path) = self.path_at(x, y)? else {
            return Ok(None);
        };
        self.click(&path).map(Some)
    }

    /// Path of the slice under a center-relative pointer position.
    pub fn path_at(&self, x: f64, y: f64) -> ChartResult<Option<HierarchyPath>> {
        let partition = self.partition()?;
        Ok(hit_test(&partition.nodes, SlicePoint { x, y })
            .map(|index| partition.nodes[index].path.clone()))
    }

    /// Toggles one filter without touching overlapping ones.
    pub fn filter(&mut self, path: &[PathSegment]) -> ChartResult<bool> {
        if path.is_empty() {
            return Err(ChartError::InvalidData(
                "filter path must not be empty".to_owned(),
            ));
        }

        let filter = HierarchyFilter::new(HierarchyPath::from(path));
        let added = self.core.model.filters.toggle(filter.clone());
        let plan = if added {
            FilterReconciliation {
                removed: Vec::new(),
                added: Some(filter),
                exact_match: false,
            }
        } else {
            FilterReconciliation {
                removed: vec![filter],
                added: None,
                exact_match: true,
            }
        };
        self.emit_filter_batch(&plan);
        Ok(added)
    }

    /// Removes every active filter.
    pub fn filter_all(&mut self) {
        let removed: Vec<HierarchyFilter> = self.core.model.filters.iter().rev().cloned().collect();
        self.core.model.filters.clear();
        debug!(removed = removed.len(), "clear all filters");
        self.emit_filter_batch(&FilterReconciliation {
            removed,
            added: None,
            exact_match: false,
        });
    }

    /// Replaces the active filters in one batch.
    pub fn replace_filters(&mut self, paths: Vec<HierarchyPath>) -> ChartResult<()> {
        if paths.iter().any(|path| path.is_empty()) {
            return Err(ChartError::InvalidData(
                "filter paths must not be empty".to_owned(),
            ));
        }

        let removed: Vec<HierarchyFilter> = self.core.model.filters.iter().rev().cloned().collect();
        self.core
            .model
            .filters
            .replace_all(paths.into_iter().map(HierarchyFilter::new));
        let added: Vec<HierarchyFilter> = self.core.model.filters.iter().cloned().collect();

        for filter in &removed {
            self.emit_plugin_event(PluginEvent::FilterRemoved {
                path: HierarchyPath::from(filter.path()),
            });
        }
        for filter in &added {
            self.emit_plugin_event(PluginEvent::FilterAdded {
                path: HierarchyPath::from(filter.path()),
            });
        }
        if !removed.is_empty() || !added.is_empty() {
            self.finish_filter_batch();
        }
        Ok(())
    }

    #[must_use]
    pub fn filter_set(&self) -> &FilterSet {
        &self.core.model.filters
    }

    /// Active filter paths in interaction order.
    #[must_use]
    pub fn filters(&self) -> Vec<HierarchyPath> {
        self.core.model.filters.paths()
    }

    #[must_use]
    pub fn has_filter(&self) -> bool {
        !self.core.model.filters.is_empty()
    }

    /// `true` when a filter with exactly this path is active.
    #[must_use]
    pub fn has_filter_path(&self, path: &[PathSegment]) -> bool {
        self.core
            .model
            .filters
            .iter()
            .any(|filter| filter.path() == path)
    }

    /// `true` when any active filter selects `path`.
    #[must_use]
    pub fn is_path_filtered(&self, path: &[PathSegment]) -> bool {
        self.core.model.filters.is_path_filtered(path)
    }

    /// Dimension predicate consumed by linked views.
    #[must_use]
    pub fn accepts(&self, key: &[PathSegment]) -> bool {
        self.core.model.filters.accepts(key)
    }

    #[must_use]
    pub fn slice_selection(&self, path: &[PathSegment]) -> SliceSelection {
        SliceSelection::classify(&self.core.model.filters, path)
    }

    /// Display text for the active filters.
    #[must_use]
    pub fn filter_printer_text(&self) -> String {
        match &self.core.presentation.filter_printer {
            Some(printer) => printer(&self.core.model.filters),
            None => print_filters(&self.core.model.filters),
        }
    }

    fn emit_filter_batch(&mut self, plan: &FilterReconciliation) {
        for filter in &plan.removed {
            self.emit_plugin_event(PluginEvent::FilterRemoved {
                path: HierarchyPath::from(filter.path()),
            });
        }
        if let Some(filter) = &plan.added {
            self.emit_plugin_event(PluginEvent::FilterAdded {
                path: HierarchyPath::from(filter.path()),
            });
        }
        if !plan.is_noop() {
            self.finish_filter_batch();
        }
    }

    fn finish_filter_batch(&mut self) {
        self.invalidate(InvalidationLevel::Selection);
        self.emit_plugin_event(PluginEvent::FiltersChanged {
            filters: self.core.model.filters.paths(),
        });
    }
}
