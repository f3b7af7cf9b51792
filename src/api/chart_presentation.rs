use indexmap::IndexMap;

use crate::render::{CATEGORY10, Color};

use super::{FilterPrinterFn, SliceTextFormatterFn};

/// Runtime presentation state grouped separately from model/layout.
pub(super) struct ChartPresentationState {
    pub(super) min_angle_for_label: f64,
    pub(super) render_labels: bool,
    pub(super) empty_title: String,
    pub(super) palette: Vec<Color>,
    pub(super) label_formatter: Option<SliceTextFormatterFn>,
    pub(super) title_formatter: Option<SliceTextFormatterFn>,
    pub(super) filter_printer: Option<FilterPrinterFn>,
    pub(super) metadata: IndexMap<String, String>,
}

impl ChartPresentationState {
    #[must_use]
    pub(super) fn new(min_angle_for_label: f64, render_labels: bool, empty_title: String) -> Self {
        Self {
            min_angle_for_label,
            render_labels,
            empty_title,
            palette: CATEGORY10.to_vec(),
            label_formatter: None,
            title_formatter: None,
            filter_printer: None,
            metadata: IndexMap::new(),
        }
    }
}
