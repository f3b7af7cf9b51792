use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, InteractionMode};
use crate::render::Renderer;

use super::{InvalidationLevel, PluginEvent, SunburstChart};

impl<R: Renderer> SunburstChart<R> {
    /// Handles pointer movement in chart-center coordinates.
    ///
    /// The slice under the pointer becomes the hovered path; the renderer
    /// highlights it together with its ancestors' ring segments.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }
        let hovered = self.path_at(x, y)?;
        trace!(x, y, hovered = ?hovered, "pointer move");
        self.core.model.interaction.on_pointer_move(x, y, hovered);
        self.invalidate(InvalidationLevel::Cursor);
        self.emit_plugin_event(PluginEvent::PointerMoved { x, y });
        Ok(())
    }

    /// Clears hover state when the pointer leaves the chart.
    pub fn pointer_leave(&mut self) {
        self.core.model.interaction.on_pointer_leave();
        self.invalidate(InvalidationLevel::Cursor);
        self.emit_plugin_event(PluginEvent::PointerLeft);
    }

    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        self.core.model.interaction.hover()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.core.model.interaction.mode()
    }
}
