use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Maximum deviation from `1.0` tolerated for the sum of relative ring sizes.
pub const RELATIVE_RING_SIZES_EPSILON: f64 = 1e-6;

/// Outer and inner radius of the drawable disc, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialFrame {
    pub radius: f64,
    pub inner_radius: f64,
}

impl RadialFrame {
    pub fn new(radius: f64, inner_radius: f64) -> ChartResult<Self> {
        if !radius.is_finite()
            || !inner_radius.is_finite()
            || radius <= 0.0
            || inner_radius < 0.0
            || inner_radius >= radius
        {
            return Err(ChartError::InvalidRadius {
                radius,
                inner_radius,
            });
        }
        Ok(Self {
            radius,
            inner_radius,
        })
    }

    #[must_use]
    pub fn ring_span(self) -> f64 {
        self.radius - self.inner_radius
    }
}

/// Radial placement of one partitioned node before radius scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPlacement {
    pub depth: usize,
    pub y0: f64,
    pub y1: f64,
}

/// Partition-wide values every radius callback may depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout<'a> {
    pub frame: RadialFrame,
    pub depth_metric: f64,
    pub root_offset: f64,
    pub relative_sizes: &'a [f64],
}

/// Radius-scaling callbacks consumed by the partition engine.
///
/// Implementations must be stateless; the engine calls them again whenever the
/// ring count or the radial frame changes.
pub trait RingSizes: Send + Sync {
    /// Extent of the radial axis handed to the partition layout.
    fn partition_depth_metric(&self, frame: RadialFrame) -> f64;

    /// Fractional width of each ring, or an empty vector when unused.
    fn relative_sizes_of(&self, ring_count: usize) -> ChartResult<Vec<f64>>;

    fn inner_radius_of(&self, node: RingPlacement, layout: &RingLayout<'_>) -> f64;

    fn outer_radius_of(&self, node: RingPlacement, layout: &RingLayout<'_>) -> f64;
}

/// Area-proportional rings: radius grows with the square root of depth budget.
///
/// The first ring starts at the frame's inner radius; the band the root would
/// occupy is folded into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultRingSizes;

impl DefaultRingSizes {
    fn scale(y: f64, layout: &RingLayout<'_>) -> f64 {
        let progress = (y / layout.depth_metric).max(0.0).sqrt();
        layout.frame.inner_radius + layout.frame.ring_span() * progress
    }
}

impl RingSizes for DefaultRingSizes {
    fn partition_depth_metric(&self, frame: RadialFrame) -> f64 {
        frame.radius * frame.radius
    }

    fn relative_sizes_of(&self, _ring_count: usize) -> ChartResult<Vec<f64>> {
        Ok(Vec::new())
    }

    fn inner_radius_of(&self, node: RingPlacement, layout: &RingLayout<'_>) -> f64 {
        if node.depth <= 1 {
            return layout.frame.inner_radius;
        }
        Self::scale(node.y0, layout)
    }

    fn outer_radius_of(&self, node: RingPlacement, layout: &RingLayout<'_>) -> f64 {
        Self::scale(node.y1, layout)
    }
}

/// Every ring gets the same radial width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualRingSizes;

impl RingSizes for EqualRingSizes {
    fn partition_depth_metric(&self, _frame: RadialFrame) -> f64 {
        1.0
    }

    fn relative_sizes_of(&self, ring_count: usize) -> ChartResult<Vec<f64>> {
        if ring_count == 0 {
            return Ok(Vec::new());
        }
        let share = 1.0 / ring_count as f64;
        validate_relative_sizes(vec![share; ring_count], ring_count)
    }

    fn inner_radius_of(&self, node: RingPlacement, layout: &RingLayout<'_>) -> f64 {
        cumulative_radius(node.depth.saturating_sub(1), layout)
    }

    fn outer_radius_of(&self, node: RingPlacement, layout: &RingLayout<'_>) -> f64 {
        cumulative_radius(node.depth, layout)
    }
}

pub type RelativeRingSizesFn = Arc<dyn Fn(usize) -> Vec<f64> + Send + Sync + 'static>;

/// Caller-supplied fractional width per ring.
#[derive(Clone)]
pub struct RelativeRingSizes {
    sizes_fn: RelativeRingSizesFn,
}

impl RelativeRingSizes {
    #[must_use]
    pub fn new(sizes_fn: impl Fn(usize) -> Vec<f64> + Send + Sync + 'static) -> Self {
        Self {
            sizes_fn: Arc::new(sizes_fn),
        }
    }
}

impl fmt::Debug for RelativeRingSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelativeRingSizes").finish_non_exhaustive()
    }
}

impl RingSizes for RelativeRingSizes {
    fn partition_depth_metric(&self, _frame: RadialFrame) -> f64 {
        1.0
    }

    fn relative_sizes_of(&self, ring_count: usize) -> ChartResult<Vec<f64>> {
        if ring_count == 0 {
            return Ok(Vec::new());
        }
        validate_relative_sizes((self.sizes_fn)(ring_count), ring_count)
    }

    fn inner_radius_of(&self, node: RingPlacement, layout: &RingLayout<'_>) -> f64 {
        cumulative_radius(node.depth.saturating_sub(1), layout)
    }

    fn outer_radius_of(&self, node: RingPlacement, layout: &RingLayout<'_>) -> f64 {
        cumulative_radius(node.depth, layout)
    }
}

/// Radius at the outer edge of ring `ring_index` (0 = inner radius).
fn cumulative_radius(ring_index: usize, layout: &RingLayout<'_>) -> f64 {
    let portion: f64 = layout.relative_sizes.iter().take(ring_index).sum();
    layout.frame.inner_radius + layout.frame.ring_span() * portion
}

/// Checks that `sizes` has one finite, non-negative entry per ring summing to 1.
pub fn validate_relative_sizes(sizes: Vec<f64>, ring_count: usize) -> ChartResult<Vec<f64>> {
    if sizes.len() != ring_count {
        return Err(ChartError::InvalidRingSizes(format!(
            "number of values must match number of rings ({ring_count}) but was {}",
            sizes.len()
        )));
    }
    if let Some(bad) = sizes
        .iter()
        .copied()
        .find(|size| !size.is_finite() || *size < 0.0)
    {
        return Err(ChartError::InvalidRingSizes(format!(
            "portions must be finite and >= 0, got {bad}"
        )));
    }
    let sum: f64 = sizes.iter().sum();
    if (sum - 1.0).abs() > RELATIVE_RING_SIZES_EPSILON {
        return Err(ChartError::InvalidRingSizes(format!(
            "portions must add up to 1, but sum was {sum}"
        )));
    }
    Ok(sizes)
}

/// Serializable name of the active ring-size policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RingSizeMode {
    #[default]
    Default,
    Equal,
    Custom,
}

/// Ring-size policy installed on a chart.
#[derive(Clone, Default)]
pub enum RingSizePolicy {
    #[default]
    Default,
    Equal,
    Custom(Arc<dyn RingSizes>),
}

impl RingSizePolicy {
    /// Shorthand for a custom policy built from per-ring fractions.
    #[must_use]
    pub fn relative(sizes_fn: impl Fn(usize) -> Vec<f64> + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(RelativeRingSizes::new(sizes_fn)))
    }

    #[must_use]
    pub fn mode(&self) -> RingSizeMode {
        match self {
            Self::Default => RingSizeMode::Default,
            Self::Equal => RingSizeMode::Equal,
            Self::Custom(_) => RingSizeMode::Custom,
        }
    }

    #[must_use]
    pub fn ring_sizes(&self) -> &dyn RingSizes {
        match self {
            Self::Default => &DefaultRingSizes,
            Self::Equal => &EqualRingSizes,
            Self::Custom(sizes) => sizes.as_ref(),
        }
    }
}

impl fmt::Debug for RingSizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("RingSizePolicy::Default"),
            Self::Equal => f.write_str("RingSizePolicy::Equal"),
            Self::Custom(_) => f.write_str("RingSizePolicy::Custom(..)"),
        }
    }
}
