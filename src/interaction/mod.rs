use serde::{Deserialize, Serialize};

use crate::core::{FilterSet, HierarchyPath, PathSegment};

/// Visual selection class of a slice under the current filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceSelection {
    /// No filter is active on the chart.
    Neutral,
    /// The slice lies inside an active filter.
    Selected,
    /// Filters are active and none of them covers the slice.
    Deselected,
}

impl SliceSelection {
    #[must_use]
    pub fn classify(filters: &FilterSet, path: &[PathSegment]) -> Self {
        if filters.is_empty() {
            Self::Neutral
        } else if filters.is_path_filtered(path) {
            Self::Selected
        } else {
            Self::Deselected
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Hovering,
}

/// Public hover state exposed to host applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub hovered_path: Option<HierarchyPath>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            hovered_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.hover.hovered_path.is_some() {
            InteractionMode::Hovering
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    #[must_use]
    pub fn hovered_path(&self) -> Option<&[PathSegment]> {
        self.hover.hovered_path.as_deref()
    }

    /// Records the pointer position (chart-center relative) and the slice under it.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered_path: Option<HierarchyPath>) {
        self.hover.visible = true;
        self.hover.x = x;
        self.hover.y = y;
        self.hover.hovered_path = hovered_path;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover.visible = false;
        self.hover.hovered_path = None;
    }

    /// Drops a hovered path that no longer exists after a data change.
    pub fn retain_hover_if(&mut self, exists: impl FnOnce(&[PathSegment]) -> bool) {
        if let Some(path) = &self.hover.hovered_path {
            if !exists(path) {
                self.hover.hovered_path = None;
            }
        }
    }
}
