use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::hierarchy::TreeNode;
use crate::core::primitives::{finite_or_zero, non_negative_or_zero};
use crate::core::ring_sizes::{RadialFrame, RingLayout, RingPlacement, RingSizes};
use crate::core::types::{HierarchyPath, PathSegment};
use crate::error::ChartResult;

/// Key/value view of a node handed to sort comparators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortableNode<'a> {
    pub key: &'a PathSegment,
    pub value: f64,
}

pub type SortComparatorFn =
    Arc<dyn Fn(&SortableNode<'_>, &SortableNode<'_>) -> Ordering + Send + Sync + 'static>;

/// Built-in sibling orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NodeOrdering {
    #[default]
    KeyAscending,
    KeyDescending,
    ValueAscending,
    ValueDescending,
}

impl NodeOrdering {
    #[must_use]
    pub fn compare(self, a: &SortableNode<'_>, b: &SortableNode<'_>) -> Ordering {
        match self {
            Self::KeyAscending => a.key.cmp(b.key),
            Self::KeyDescending => b.key.cmp(a.key),
            Self::ValueAscending => a.value.total_cmp(&b.value),
            Self::ValueDescending => b.value.total_cmp(&a.value),
        }
    }
}

/// Tree node with angular and radial geometry attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionedNode<T> {
    pub key: PathSegment,
    pub path: HierarchyPath,
    pub depth: usize,
    pub height: usize,
    /// Aggregated value of the subtree.
    pub value: f64,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Index of the parent in [`PartitionResult::nodes`]; `None` for ring 1.
    pub parent: Option<usize>,
    pub data: Option<T>,
}

impl<T> PartitionedNode<T> {
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.height == 0
    }
}

/// Output of one partition pass; a read-only snapshot for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionResult<T> {
    /// Pre-order nodes excluding the root; siblings follow sort order.
    pub nodes: Vec<PartitionedNode<T>>,
    pub root_offset: f64,
    pub relative_ring_sizes: Vec<f64>,
    pub ring_count: usize,
    pub total_value: f64,
}

impl<T> PartitionResult<T> {
    /// `true` when there is nothing to draw proportionally.
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.total_value == 0.0
    }

    #[must_use]
    pub fn find(&self, path: &[PathSegment]) -> Option<&PartitionedNode<T>> {
        self.nodes.iter().find(|node| node.path.as_slice() == path)
    }

    /// Direct children of `nodes[index]`, in sort order.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = &PartitionedNode<T>> + '_ {
        self.nodes
            .iter()
            .filter(move |node| node.parent == Some(index))
    }

    /// Nodes on the first ring.
    pub fn top_level(&self) -> impl Iterator<Item = &PartitionedNode<T>> + '_ {
        self.nodes.iter().filter(|node| node.parent.is_none())
    }
}

struct Aggregated<'t, T> {
    node: &'t TreeNode<T>,
    value: f64,
    height: usize,
    children: Vec<Aggregated<'t, T>>,
}

fn aggregate<'t, T>(
    node: &'t TreeNode<T>,
    comparator: &dyn Fn(&SortableNode<'_>, &SortableNode<'_>) -> Ordering,
) -> Aggregated<'t, T> {
    let mut children: Vec<Aggregated<'t, T>> = node
        .children
        .iter()
        .map(|child| aggregate(child, comparator))
        .collect();

    children.sort_by(|a, b| {
        match (a.node.key.as_ref(), b.node.key.as_ref()) {
            (Some(a_key), Some(b_key)) => comparator(
                &SortableNode {
                    key: a_key,
                    value: a.value,
                },
                &SortableNode {
                    key: b_key,
                    value: b.value,
                },
            ),
            _ => Ordering::Equal,
        }
    });

    // Summed after sorting so the last cumulative sum equals `value` exactly.
    let (value, height) = if children.is_empty() {
        (non_negative_or_zero(node.value), 0)
    } else {
        let value = children.iter().map(|child| child.value).sum();
        let height = children
            .iter()
            .map(|child| child.height + 1)
            .max()
            .unwrap_or(0);
        (value, height)
    };

    Aggregated {
        node,
        value,
        height,
        children,
    }
}

struct PartitionPass<'a> {
    ring_sizes: &'a dyn RingSizes,
    layout: RingLayout<'a>,
    band: f64,
}

impl PartitionPass<'_> {
    fn emit_children<T: Clone>(
        &self,
        parent: &Aggregated<'_, T>,
        parent_index: Option<usize>,
        x0: f64,
        x1: f64,
        nodes: &mut Vec<PartitionedNode<T>>,
    ) {
        let scale = if parent.value > 0.0 {
            finite_or_zero((x1 - x0) / parent.value)
        } else {
            0.0
        };
        let depth = parent_index.map_or(1, |index| nodes[index].depth + 1);

        let mut cumulative = 0.0;
        let mut cursor = x0;
        for child in &parent.children {
            cumulative += child.value;
            let start = cursor;
            let end = if parent.value > 0.0 && cumulative >= parent.value {
                x1
            } else {
                finite_or_zero(x0 + cumulative * scale)
            };
            cursor = end;

            let placement = RingPlacement {
                depth,
                y0: finite_or_zero(depth as f64 * self.band),
                y1: finite_or_zero((depth + 1) as f64 * self.band),
            };
            let inner_radius =
                finite_or_zero(self.ring_sizes.inner_radius_of(placement, &self.layout));
            let outer_radius =
                finite_or_zero(self.ring_sizes.outer_radius_of(placement, &self.layout));

            let Some(key) = child.node.key.clone() else {
                continue;
            };
            let index = nodes.len();
            nodes.push(PartitionedNode {
                key,
                path: child.node.path.clone(),
                depth,
                height: child.height,
                value: child.value,
                x0: start,
                x1: end,
                y0: placement.y0,
                y1: placement.y1,
                inner_radius,
                outer_radius,
                parent: parent_index,
                data: child.node.data.clone(),
            });
            self.emit_children(child, Some(index), start, end, nodes);
        }
    }
}

/// Lays a hierarchy out over `[0, 2π)` and the radial frame.
///
/// Siblings are ordered with `comparator` (stable sort) and receive contiguous
/// angular intervals proportional to their aggregated value. Rings are sized by
/// `ring_sizes`, whose relative sizes are validated against the tree height.
/// The root is not part of the returned nodes.
pub fn partition<T: Clone>(
    root: &TreeNode<T>,
    comparator: &dyn Fn(&SortableNode<'_>, &SortableNode<'_>) -> Ordering,
    ring_sizes: &dyn RingSizes,
    frame: RadialFrame,
) -> ChartResult<PartitionResult<T>> {
    let aggregated = aggregate(root, comparator);
    let ring_count = aggregated.height;
    let relative_ring_sizes = ring_sizes.relative_sizes_of(ring_count)?;

    let depth_metric = finite_or_zero(ring_sizes.partition_depth_metric(frame));
    let band = finite_or_zero(depth_metric / (ring_count + 1) as f64);
    let pass = PartitionPass {
        ring_sizes,
        layout: RingLayout {
            frame,
            depth_metric,
            root_offset: band,
            relative_sizes: &relative_ring_sizes,
        },
        band,
    };

    let mut nodes = Vec::new();
    pass.emit_children(&aggregated, None, 0.0, TAU, &mut nodes);
    trace!(
        nodes = nodes.len(),
        ring_count,
        total_value = aggregated.value,
        "partitioned hierarchy"
    );

    Ok(PartitionResult {
        nodes,
        root_offset: band,
        relative_ring_sizes,
        ring_count,
        total_value: aggregated.value,
    })
}
