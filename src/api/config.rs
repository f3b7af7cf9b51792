use serde::{Deserialize, Serialize};

use crate::core::slice_geometry::DEFAULT_MIN_ANGLE_FOR_LABEL;
use crate::core::{CapConfig, NodeOrdering, RingSizeMode};
use crate::error::{ChartError, ChartResult};

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Closures (value accessor, sort
/// comparator, custom ring sizes, formatters) are installed through chart
/// setters instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunburstConfig {
    pub radius: f64,
    #[serde(default)]
    pub inner_radius: f64,
    #[serde(default = "default_min_angle_for_label")]
    pub min_angle_for_label: f64,
    #[serde(default)]
    pub ring_size_mode: RingSizeMode,
    #[serde(default)]
    pub ordering: NodeOrdering,
    #[serde(default)]
    pub cap: CapConfig,
    #[serde(default = "default_render_labels")]
    pub render_labels: bool,
    #[serde(default = "default_empty_title")]
    pub empty_title: String,
}

impl SunburstConfig {
    /// Creates a minimal config with default ring sizing and ordering.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            inner_radius: 0.0,
            min_angle_for_label: default_min_angle_for_label(),
            ring_size_mode: RingSizeMode::default(),
            ordering: NodeOrdering::default(),
            cap: CapConfig::default(),
            render_labels: default_render_labels(),
            empty_title: default_empty_title(),
        }
    }

    /// Sets the radius of the central hole.
    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Sets the minimal slice angle (radians) that still carries a label.
    #[must_use]
    pub fn with_min_angle_for_label(mut self, min_angle_for_label: f64) -> Self {
        self.min_angle_for_label = min_angle_for_label;
        self
    }

    /// Selects a built-in ring-size policy.
    #[must_use]
    pub fn with_ring_size_mode(mut self, mode: RingSizeMode) -> Self {
        self.ring_size_mode = mode;
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: NodeOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: CapConfig) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_render_labels(mut self, render_labels: bool) -> Self {
        self.render_labels = render_labels;
        self
    }

    #[must_use]
    pub fn with_empty_title(mut self, empty_title: impl Into<String>) -> Self {
        self.empty_title = empty_title.into();
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_min_angle_for_label() -> f64 {
    DEFAULT_MIN_ANGLE_FOR_LABEL
}

fn default_render_labels() -> bool {
    true
}

fn default_empty_title() -> String {
    "empty".to_owned()
}
