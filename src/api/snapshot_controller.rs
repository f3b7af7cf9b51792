use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{NodeSnapshot, SunburstChart, SunburstSnapshot};

impl<R: Renderer> SunburstChart<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<SunburstSnapshot> {
        let partition = self.partition()?;
        Ok(SunburstSnapshot {
            frame: self.core.layout.frame,
            ring_size_mode: self.core.layout.ring_size_policy.mode(),
            records_len: self.core.model.records.len(),
            total_value: partition.total_value,
            root_offset: partition.root_offset,
            relative_ring_sizes: partition.relative_ring_sizes.clone(),
            nodes: partition
                .nodes
                .iter()
                .map(|node| NodeSnapshot {
                    key: node.key.clone(),
                    path: node.path.clone(),
                    depth: node.depth,
                    value: node.value,
                    x0: node.x0,
                    x1: node.x1,
                    y0: node.y0,
                    y1: node.y1,
                    inner_radius: node.inner_radius,
                    outer_radius: node.outer_radius,
                })
                .collect(),
            filters: self.core.model.filters.paths(),
            others: self.core.model.others.clone(),
            hover: self.core.model.interaction.hover().clone(),
            chart_metadata: self.core.presentation.metadata.clone(),
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
