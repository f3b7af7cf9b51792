//! Hooks for linked views that observe chart state without owning it.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
