use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{HierarchyPath, OthersBucket, PathSegment, RadialFrame, RingSizeMode};
use crate::interaction::HoverState;

/// Partitioned node as exported for regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub key: PathSegment,
    pub path: HierarchyPath,
    pub depth: usize,
    pub value: f64,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunburstSnapshot {
    pub frame: RadialFrame,
    pub ring_size_mode: RingSizeMode,
    pub records_len: usize,
    pub total_value: f64,
    pub root_offset: f64,
    pub relative_ring_sizes: Vec<f64>,
    pub nodes: Vec<NodeSnapshot>,
    pub filters: Vec<HierarchyPath>,
    pub others: Option<OthersBucket>,
    pub hover: HoverState,
    pub chart_metadata: IndexMap<String, String>,
}
