//! sunburst-rs: hierarchical partition and filter engine for sunburst charts.
//!
//! Flat records keyed by ordered paths are grouped into a value tree,
//! partitioned into concentric angular rings and exposed as backend-agnostic
//! slice frames. Clicking a slice reconciles a set of path-prefix filters that
//! linked views can consume through [`SunburstChart::accepts`] or plugins.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SunburstChart, SunburstConfig};
pub use error::{ChartError, ChartResult};
