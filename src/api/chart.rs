use crate::error::ChartResult;
use crate::render::Renderer;

use super::{
    PluginEvent, chart_layout::ChartLayoutState, chart_model::ChartModel,
    chart_presentation::ChartPresentationState, chart_runtime::ChartRuntimeState,
};

/// Internal chart state used by the public facade (`SunburstChart`).
pub(super) struct ChartCore {
    pub(super) model: ChartModel,
    pub(super) layout: ChartLayoutState,
    pub(super) presentation: ChartPresentationState,
    pub(super) runtime: ChartRuntimeState,
}

/// Main orchestration facade consumed by host applications.
///
/// `SunburstChart` owns the records, the derived hierarchy, the active
/// filters and the cached partition, and hands read-only frames to the
/// renderer. All mutation goes through its methods; callers embedding it in a
/// multi-threaded host serialize access themselves.
pub struct SunburstChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: ChartCore,
}

impl<R: Renderer> SunburstChart<R> {
    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.clear_pending_invalidation();
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
