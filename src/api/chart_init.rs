use tracing::debug;

use crate::core::{RingSizeMode, RingSizePolicy};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_config;
use super::{
    SunburstChart, SunburstConfig, chart::ChartCore, chart_layout::ChartLayoutState,
    chart_model::ChartModel, chart_presentation::ChartPresentationState,
    chart_runtime::ChartRuntimeState,
};

impl<R: Renderer> SunburstChart<R> {
    /// Creates a chart with no records and no active filters.
    pub fn new(renderer: R, config: SunburstConfig) -> ChartResult<Self> {
        let frame = validate_config(&config)?;
        let ring_size_policy = match config.ring_size_mode {
            RingSizeMode::Equal => RingSizePolicy::Equal,
            RingSizeMode::Default | RingSizeMode::Custom => RingSizePolicy::Default,
        };
        debug!(
            radius = frame.radius,
            inner_radius = frame.inner_radius,
            ring_size_mode = ?config.ring_size_mode,
            ordering = ?config.ordering,
            "create sunburst chart"
        );

        Ok(Self {
            renderer,
            core: ChartCore {
                model: ChartModel::new(config.cap),
                layout: ChartLayoutState::new(frame, ring_size_policy, config.ordering),
                presentation: ChartPresentationState::new(
                    config.min_angle_for_label,
                    config.render_labels,
                    config.empty_title,
                ),
                runtime: ChartRuntimeState::with_full_invalidation(),
            },
        })
    }
}
