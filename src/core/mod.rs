pub mod cap;
pub mod filter;
pub mod hierarchy;
pub mod partition;
pub mod primitives;
pub mod ring_sizes;
pub mod slice_geometry;
pub mod types;

pub use cap::{CapConfig, CappedRecords, OthersBucket, cap_records};
pub use filter::{FilterReconciliation, FilterSet, HierarchyFilter};
pub use hierarchy::{MAX_HIERARCHY_DEPTH, TreeNode, build_hierarchy};
pub use partition::{
    NodeOrdering, PartitionResult, PartitionedNode, SortComparatorFn, SortableNode, partition,
};
pub use ring_sizes::{
    DefaultRingSizes, EqualRingSizes, RadialFrame, RelativeRingSizes, RelativeRingSizesFn,
    RingLayout, RingPlacement, RingSizeMode, RingSizePolicy, RingSizes, validate_relative_sizes,
};
pub use slice_geometry::{SlicePoint, hit_test, label_visible, slice_centroid};
pub use types::{HierarchyPath, HierarchyRecord, KeyedRecord, PathSegment, hierarchy_path};
