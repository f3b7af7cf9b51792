use serde::{Deserialize, Serialize};

use crate::core::{HierarchyPath, PathSegment, RadialFrame, SlicePoint};
use crate::error::{ChartError, ChartResult};
use crate::interaction::SliceSelection;
use crate::render::Color;

/// Text anchored at a slice centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceLabel {
    pub text: String,
    pub anchor: SlicePoint,
}

/// Draw command for one annular sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceFrame {
    pub key: PathSegment,
    pub path: HierarchyPath,
    pub depth: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub color: Color,
    pub selection: SliceSelection,
    pub highlighted: bool,
    pub title: String,
    /// `None` when the slice is too small or empty to carry a label.
    pub label: Option<SliceLabel>,
}

impl SliceFrame {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("start_angle", self.start_angle),
            ("end_angle", self.end_angle),
            ("inner_radius", self.inner_radius),
            ("outer_radius", self.outer_radius),
            ("value", self.value),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "slice `{name}` must be finite"
                )));
            }
        }
        if self.start_angle > self.end_angle {
            return Err(ChartError::InvalidData(
                "slice start angle must be <= end angle".to_owned(),
            ));
        }
        if self.inner_radius > self.outer_radius {
            return Err(ChartError::InvalidData(
                "slice inner radius must be <= outer radius".to_owned(),
            ));
        }
        if let Some(label) = &self.label {
            if label.text.is_empty() {
                return Err(ChartError::InvalidData(
                    "slice label must not be empty".to_owned(),
                ));
            }
            if !label.anchor.x.is_finite() || !label.anchor.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "slice label anchor must be finite".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}

/// Backend-agnostic scene for one sunburst draw pass.
///
/// Renderers receive it by shared reference and must treat it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunburstFrame {
    pub frame: RadialFrame,
    pub slices: Vec<SliceFrame>,
    pub root_offset: f64,
    pub relative_ring_sizes: Vec<f64>,
    /// Total value is zero; backends draw the empty placeholder instead.
    pub empty: bool,
    pub empty_title: String,
}

impl SunburstFrame {
    #[must_use]
    pub fn new(frame: RadialFrame) -> Self {
        Self {
            frame,
            slices: Vec::new(),
            root_offset: 0.0,
            relative_ring_sizes: Vec::new(),
            empty: true,
            empty_title: String::new(),
        }
    }

    #[must_use]
    pub fn with_slice(mut self, slice: SliceFrame) -> Self {
        self.slices.push(slice);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        RadialFrame::new(self.frame.radius, self.frame.inner_radius)?;
        if !self.root_offset.is_finite() {
            return Err(ChartError::InvalidData(
                "root offset must be finite".to_owned(),
            ));
        }
        for slice in &self.slices {
            slice.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.slices
            .iter()
            .filter(|slice| slice.label.is_some())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
