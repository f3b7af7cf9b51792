use crate::core::types::path_starts_with;
use crate::core::{PathSegment, label_visible, slice_centroid};
use crate::error::ChartResult;
use crate::render::{OrdinalColorScale, Renderer, SliceFrame, SliceLabel, SunburstFrame};

use super::SunburstChart;

impl<R: Renderer> SunburstChart<R> {
    /// Materializes the current partition into backend-agnostic draw commands.
    pub fn build_render_frame(&self) -> ChartResult<SunburstFrame> {
        let partition = self.partition()?;
        let presentation = &self.core.presentation;
        let mut colors = OrdinalColorScale::new(presentation.palette.clone())?;
        let hovered = self.core.model.interaction.hovered_path();

        let mut frame = SunburstFrame::new(self.core.layout.frame);
        frame.root_offset = partition.root_offset;
        frame.relative_ring_sizes = partition.relative_ring_sizes.clone();
        frame.empty = partition.is_empty_state();
        frame.empty_title = presentation.empty_title.clone();

        for node in &partition.nodes {
            let label = if presentation.render_labels
                && label_visible(node, presentation.min_angle_for_label)
            {
                let text = self.label_text(&node.key, node.value);
                (!text.is_empty()).then(|| SliceLabel {
                    text,
                    anchor: slice_centroid(node),
                })
            } else {
                None
            };

            frame.slices.push(SliceFrame {
                key: node.key.clone(),
                path: node.path.clone(),
                depth: node.depth,
                value: node.value,
                start_angle: node.x0,
                end_angle: node.x1,
                inner_radius: node.inner_radius,
                outer_radius: node.outer_radius,
                color: colors.color_for(&node.key),
                selection: self.slice_selection(&node.path),
                highlighted: hovered.is_some_and(|path| path_starts_with(path, &node.path)),
                title: self.title_text(&node.key, node.value),
                label,
            });
        }

        Ok(frame)
    }

    fn label_text(&self, key: &PathSegment, value: f64) -> String {
        match &self.core.presentation.label_formatter {
            Some(formatter) => formatter(key, value),
            None => key.to_string(),
        }
    }

    fn title_text(&self, key: &PathSegment, value: f64) -> String {
        match &self.core.presentation.title_formatter {
            Some(formatter) => formatter(key, value),
            None => format!("{key}: {value}"),
        }
    }
}
