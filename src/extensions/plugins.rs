use serde::{Deserialize, Serialize};

use crate::core::HierarchyPath;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub records_len: usize,
    pub node_count: usize,
    pub ring_count: usize,
    pub total_value: f64,
    pub filters: Vec<HierarchyPath>,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
///
/// Filter mutations emit one `FilterRemoved`/`FilterAdded` per touched
/// filter, followed by exactly one `FiltersChanged` for the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataUpdated { records_len: usize },
    FilterRemoved { path: HierarchyPath },
    FilterAdded { path: HierarchyPath },
    FiltersChanged { filters: Vec<HierarchyPath> },
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    Rendered,
}

/// Extension hook interface for linked views (legends, dependent charts).
///
/// Plugins observe events and read chart context without mutating chart
/// internals directly. Plugins are `Send` so a chart can be handed to another
/// thread together with its observers.
pub trait ChartPlugin: Send {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: &PluginContext);
}
