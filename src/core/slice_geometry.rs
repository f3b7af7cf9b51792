//! Pure geometry over partitioned slices: label anchors and pointer hit tests.
//!
//! Angles follow the usual arc convention: `0` points to 12 o'clock and grows
//! clockwise, with the Y axis pointing down. Coordinates are relative to the
//! chart center.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::partition::PartitionedNode;

pub const DEFAULT_MIN_ANGLE_FOR_LABEL: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlicePoint {
    pub x: f64,
    pub y: f64,
}

impl SlicePoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Point at `angle` radians and `radius` from the center.
    #[must_use]
    pub fn from_polar(angle: f64, radius: f64) -> Self {
        let point = Self {
            x: radius * angle.sin(),
            y: -radius * angle.cos(),
        };
        if point.x.is_finite() && point.y.is_finite() {
            point
        } else {
            Self::ORIGIN
        }
    }

    /// Angle in `[0, 2π)` and distance from the center.
    #[must_use]
    pub fn to_polar(self) -> (f64, f64) {
        let radius = self.x.hypot(self.y);
        let mut angle = self.x.atan2(-self.y);
        if angle < 0.0 {
            angle += TAU;
        }
        if angle >= TAU {
            angle -= TAU;
        }
        (angle, radius)
    }
}

/// Mid-angle, mid-radius anchor of a slice; degenerate slices anchor at the origin.
#[must_use]
pub fn slice_centroid<T>(node: &PartitionedNode<T>) -> SlicePoint {
    let angle = 0.5 * (node.x0 + node.x1);
    let radius = 0.5 * (node.inner_radius + node.outer_radius);
    SlicePoint::from_polar(angle, radius)
}

/// Labels are hidden on empty slices and on slices narrower than `min_angle`.
#[must_use]
pub fn label_visible<T>(node: &PartitionedNode<T>, min_angle: f64) -> bool {
    let angle = node.angle();
    node.value != 0.0 && angle.is_finite() && angle >= min_angle
}

/// Returns the index of the slice under `point`, if any.
#[must_use]
pub fn hit_test<T>(nodes: &[PartitionedNode<T>], point: SlicePoint) -> Option<usize> {
    let (angle, radius) = point.to_polar();
    if !angle.is_finite() || !radius.is_finite() {
        return None;
    }
    nodes.iter().position(|node| {
        node.x1 > node.x0
            && angle >= node.x0
            && angle < node.x1
            && radius >= node.inner_radius
            && radius < node.outer_radius
    })
}
