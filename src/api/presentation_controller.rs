use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::PathSegment;
use crate::error::ChartResult;
use crate::render::{Color, OrdinalColorScale, Renderer};

use super::validation::validate_min_angle_for_label;
use super::{FilterPrinterFn, InvalidationLevel, SliceTextFormatterFn, SunburstChart};

impl<R: Renderer> SunburstChart<R> {
    #[must_use]
    pub fn min_angle_for_label(&self) -> f64 {
        self.core.presentation.min_angle_for_label
    }

    /// Sets the minimal slice angle (radians) that still carries a label.
    pub fn set_min_angle_for_label(&mut self, min_angle: f64) -> ChartResult<()> {
        let min_angle = validate_min_angle_for_label(min_angle)?;
        self.core.presentation.min_angle_for_label = min_angle;
        self.invalidate(InvalidationLevel::Selection);
        Ok(())
    }

    #[must_use]
    pub fn render_labels(&self) -> bool {
        self.core.presentation.render_labels
    }

    pub fn set_render_labels(&mut self, render_labels: bool) {
        self.core.presentation.render_labels = render_labels;
        self.invalidate(InvalidationLevel::Selection);
    }

    #[must_use]
    pub fn empty_title(&self) -> &str {
        &self.core.presentation.empty_title
    }

    pub fn set_empty_title(&mut self, empty_title: impl Into<String>) {
        self.core.presentation.empty_title = empty_title.into();
        self.invalidate(InvalidationLevel::Selection);
    }

    #[must_use]
    pub fn color_palette(&self) -> &[Color] {
        &self.core.presentation.palette
    }

    /// Replaces the ordinal palette slices are colored from.
    pub fn set_color_palette(&mut self, palette: Vec<Color>) -> ChartResult<()> {
        let scale = OrdinalColorScale::new(palette)?;
        debug!(colors = scale.palette().len(), "set color palette");
        self.core.presentation.palette = scale.palette().to_vec();
        self.invalidate(InvalidationLevel::Selection);
        Ok(())
    }

    /// Overrides label text; the default label is the node key.
    pub fn set_label_formatter(&mut self, formatter: SliceTextFormatterFn) {
        self.core.presentation.label_formatter = Some(formatter);
        self.invalidate(InvalidationLevel::Selection);
    }

    pub fn set_label_formatter_fn(
        &mut self,
        formatter: impl Fn(&PathSegment, f64) -> String + Send + Sync + 'static,
    ) {
        self.set_label_formatter(Arc::new(formatter));
    }

    pub fn clear_label_formatter(&mut self) {
        self.core.presentation.label_formatter = None;
        self.invalidate(InvalidationLevel::Selection);
    }

    /// Overrides tooltip text; the default title is `key: value`.
    pub fn set_title_formatter(&mut self, formatter: SliceTextFormatterFn) {
        self.core.presentation.title_formatter = Some(formatter);
        self.invalidate(InvalidationLevel::Selection);
    }

    pub fn set_title_formatter_fn(
        &mut self,
        formatter: impl Fn(&PathSegment, f64) -> String + Send + Sync + 'static,
    ) {
        self.set_title_formatter(Arc::new(formatter));
    }

    pub fn clear_title_formatter(&mut self) {
        self.core.presentation.title_formatter = None;
        self.invalidate(InvalidationLevel::Selection);
    }

    pub fn set_filter_printer(&mut self, printer: FilterPrinterFn) {
        self.core.presentation.filter_printer = Some(printer);
    }

    pub fn clear_filter_printer(&mut self) {
        self.core.presentation.filter_printer = None;
    }

    /// Attaches free-form metadata carried by snapshots.
    pub fn set_chart_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.core
            .presentation
            .metadata
            .insert(key.into(), value.into());
    }

    #[must_use]
    pub fn chart_metadata(&self) -> &IndexMap<String, String> {
        &self.core.presentation.metadata
    }
}
