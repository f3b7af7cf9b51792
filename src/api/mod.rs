mod chart;
mod chart_init;
mod chart_layout;
mod chart_model;
mod chart_presentation;
mod chart_runtime;
mod chart_snapshot;
mod config;
mod data_controller;
mod filter_controller;
mod filter_printer;
mod interaction_controller;
mod invalidation;
mod json_contract;
mod layout_controller;
mod plugin_dispatch;
mod plugin_registry;
mod presentation_controller;
mod render_frame_builder;
mod snapshot_controller;
mod validation;

use std::sync::Arc;

use crate::core::{HierarchyRecord, PartitionResult, PathSegment};

pub use crate::extensions::{PluginContext, PluginEvent};
pub use chart::SunburstChart;
pub use chart_snapshot::{NodeSnapshot, SunburstSnapshot};
pub use config::SunburstConfig;
pub use filter_printer::{FilterPrinterFn, print_filter, print_filters};
pub use invalidation::InvalidationLevel;
pub use json_contract::{SUNBURST_SNAPSHOT_JSON_SCHEMA_V1, SunburstSnapshotJsonContractV1};

/// Partition output produced by a chart.
pub type SunburstPartition = PartitionResult<HierarchyRecord>;

/// Extracts the numeric measure of a record.
pub type ValueAccessorFn = Arc<dyn Fn(&HierarchyRecord) -> f64 + Send + Sync + 'static>;

/// Formats slice label/title text from a node key and its aggregated value.
pub type SliceTextFormatterFn = Arc<dyn Fn(&PathSegment, f64) -> String + Send + Sync + 'static>;
