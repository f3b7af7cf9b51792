use tracing::warn;

use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{PluginEvent, SunburstChart};

impl<R: Renderer> SunburstChart<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let (node_count, ring_count, total_value) = match self.partition() {
            Ok(partition) => (
                partition.nodes.len(),
                partition.ring_count,
                partition.total_value,
            ),
            Err(err) => {
                warn!(error = %err, "plugin context built without partition");
                (0, 0, 0.0)
            }
        };
        PluginContext {
            records_len: self.core.model.records.len(),
            node_count,
            ring_count,
            total_value,
            filters: self.core.model.filters.paths(),
            interaction_mode: self.core.model.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(&event, &context);
        }
    }
}
