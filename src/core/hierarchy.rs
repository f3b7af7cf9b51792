use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::types::{HierarchyPath, KeyedRecord, PathSegment};

/// Longest record key accepted by [`build_hierarchy`].
///
/// Construction and partitioning recurse once per level.
pub const MAX_HIERARCHY_DEPTH: usize = 256;

/// Node of a hierarchy built from flat keyed records.
///
/// The synthetic root has no key and an empty path. Every other node's path is
/// its parent's path plus its own key, and siblings have unique keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode<T> {
    pub key: Option<PathSegment>,
    pub path: HierarchyPath,
    /// Own leaf value; `0.0` for nodes with children.
    pub value: f64,
    pub children: Vec<TreeNode<T>>,
    pub data: Option<T>,
}

impl<T> TreeNode<T> {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.key.is_none()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Sum of all descendant leaf values (own value for leaves).
    #[must_use]
    pub fn aggregated_value(&self) -> f64 {
        if self.children.is_empty() {
            return self.value;
        }
        self.children.iter().map(TreeNode::aggregated_value).sum()
    }

    /// Longest distance from this node down to a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            return usize::from(!self.is_root());
        }
        self.children.iter().map(TreeNode::leaf_count).sum()
    }

    /// Finds the descendant addressed by `path` (relative to this node).
    #[must_use]
    pub fn find(&self, path: &[PathSegment]) -> Option<&TreeNode<T>> {
        let Some((head, rest)) = path.split_first() else {
            return Some(self);
        };
        self.children
            .iter()
            .find(|child| child.key.as_ref() == Some(head))
            .and_then(|child| child.find(rest))
    }
}

struct ScratchNode<T> {
    path: HierarchyPath,
    value: f64,
    data: Option<T>,
    children: IndexMap<PathSegment, ScratchNode<T>>,
}

impl<T> ScratchNode<T> {
    fn new(path: HierarchyPath) -> Self {
        Self {
            path,
            value: 0.0,
            data: None,
            children: IndexMap::new(),
        }
    }

    fn into_tree(self) -> TreeNode<T> {
        let children: Vec<TreeNode<T>> = self
            .children
            .into_values()
            .map(ScratchNode::into_tree)
            .collect();
        let value = if children.is_empty() { self.value } else { 0.0 };
        TreeNode {
            key: self.path.last().cloned(),
            path: self.path,
            value,
            children,
            data: self.data,
        }
    }
}

/// Builds a rooted tree from flat records keyed by ordered paths.
///
/// Intermediate segments are found or created by exact key equality and the
/// final segment carries `value_accessor(record)` plus the record itself.
/// A later record with an identical full path replaces the earlier leaf in
/// place. Empty input yields a root without children. Records with an empty
/// key or more than [`MAX_HIERARCHY_DEPTH`] segments are skipped, and
/// negative or non-finite values count as zero.
pub fn build_hierarchy<T, F>(records: &[T], value_accessor: F) -> TreeNode<T>
where
    T: KeyedRecord + Clone,
    F: Fn(&T) -> f64,
{
    let mut root = ScratchNode::new(HierarchyPath::new());

    for record in records {
        let key = record.key();
        if key.is_empty() {
            warn!("skipping record with empty hierarchy key");
            continue;
        }

        if key.len() > MAX_HIERARCHY_DEPTH {
            warn!(
                depth = key.len(),
                max_depth = MAX_HIERARCHY_DEPTH,
                "skipping record with too deep hierarchy key"
            );
            continue;
        }

        let mut value = value_accessor(record);
        if !value.is_finite() || value < 0.0 {
            warn!(?key, value, "coercing non-finite or negative record value to zero");
            value = 0.0;
        }

        let last_depth = key.len() - 1;
        let mut current = &mut root;
        for (depth, segment) in key.iter().enumerate() {
            let node = current
                .children
                .entry(segment.clone())
                .or_insert_with(|| ScratchNode::new(key[..=depth].iter().cloned().collect()));

            if depth == last_depth {
                if node.data.is_some() {
                    debug!(?key, "duplicate hierarchy path, later record replaces leaf");
                }
                if !node.children.is_empty() {
                    debug!(?key, "record attached to internal node is not aggregated");
                }
                node.value = value;
                node.data = Some(record.clone());
            } else if node.data.is_some() && node.children.is_empty() {
                debug!(path = ?node.path, "leaf promoted to internal node");
            }
            current = node;
        }
    }

    let tree = root.into_tree();
    trace!(
        records = records.len(),
        leaves = tree.leaf_count(),
        height = tree.height(),
        "built hierarchy"
    );
    tree
}
