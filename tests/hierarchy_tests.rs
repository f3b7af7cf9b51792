use rust_decimal::Decimal;
use sunburst_rs::core::{
    HierarchyRecord, MAX_HIERARCHY_DEPTH, PathSegment, TreeNode, build_hierarchy, hierarchy_path,
};

fn regions() -> Vec<HierarchyRecord> {
    vec![
        HierarchyRecord::new(["US", "NY"], 3.0),
        HierarchyRecord::new(["US", "CA"], 1.0),
        HierarchyRecord::new(["EU", "FR"], 4.0),
    ]
}

fn child_keys(node: &TreeNode<HierarchyRecord>) -> Vec<String> {
    node.children
        .iter()
        .filter_map(|child| child.key.as_ref().map(ToString::to_string))
        .collect()
}

#[test]
fn groups_records_by_shared_prefix() {
    let tree = build_hierarchy(&regions(), |record: &HierarchyRecord| record.value);

    assert!(tree.is_root());
    assert_eq!(child_keys(&tree), vec!["US", "EU"]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.leaf_count(), 3);

    let us = tree.find(&hierarchy_path(["US"])).expect("US node");
    assert_eq!(child_keys(us), vec!["NY", "CA"]);
    assert_eq!(us.value, 0.0);
    assert_eq!(us.aggregated_value(), 4.0);
    assert_eq!(tree.aggregated_value(), 8.0);
}

#[test]
fn leaves_carry_their_record() {
    let tree = build_hierarchy(&regions(), |record: &HierarchyRecord| record.value);
    let ny = tree.find(&hierarchy_path(["US", "NY"])).expect("NY leaf");

    assert!(ny.is_leaf());
    assert_eq!(ny.value, 3.0);
    assert_eq!(ny.path, hierarchy_path(["US", "NY"]));
    assert_eq!(ny.data.as_ref().map(|record| record.value), Some(3.0));
}

#[test]
fn empty_input_yields_bare_root() {
    let tree = build_hierarchy(&[] as &[HierarchyRecord], |record: &HierarchyRecord| {
        record.value
    });
    assert!(tree.children.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.leaf_count(), 0);
    assert_eq!(tree.aggregated_value(), 0.0);
}

#[test]
fn duplicate_full_path_keeps_last_record() {
    let records = vec![
        HierarchyRecord::new(["US", "NY"], 3.0),
        HierarchyRecord::new(["US", "NY"], 7.0),
    ];
    let tree = build_hierarchy(&records, |record: &HierarchyRecord| record.value);

    let us = tree.find(&hierarchy_path(["US"])).expect("US node");
    assert_eq!(us.children.len(), 1);
    assert_eq!(us.aggregated_value(), 7.0);
}

#[test]
fn accessor_drives_leaf_values_and_non_finite_becomes_zero() {
    let records = vec![
        HierarchyRecord::new(["a"], 2.0),
        HierarchyRecord::new(["b"], f64::NAN),
    ];
    let tree = build_hierarchy(&records, |record: &HierarchyRecord| record.value * 10.0);

    assert_eq!(tree.find(&hierarchy_path(["a"])).map(|n| n.value), Some(20.0));
    assert_eq!(tree.find(&hierarchy_path(["b"])).map(|n| n.value), Some(0.0));
}

#[test]
fn negative_values_become_zero() {
    let records = vec![
        HierarchyRecord::new(["a"], -2.0),
        HierarchyRecord::new(["b"], 5.0),
    ];
    let tree = build_hierarchy(&records, |record: &HierarchyRecord| record.value);

    assert_eq!(tree.find(&hierarchy_path(["a"])).map(|n| n.value), Some(0.0));
    assert_eq!(tree.aggregated_value(), 5.0);
}

#[test]
fn keys_deeper_than_limit_are_skipped() {
    let deep_key = |depth: usize| (0..depth).map(|level| format!("l{level}")).collect::<Vec<_>>();
    let records = vec![
        HierarchyRecord::new(deep_key(MAX_HIERARCHY_DEPTH + 1), 1.0),
        HierarchyRecord::new(["kept"], 1.0),
    ];
    let tree = build_hierarchy(&records, |record: &HierarchyRecord| record.value);
    assert_eq!(child_keys(&tree), vec!["kept"]);

    let records = vec![HierarchyRecord::new(deep_key(MAX_HIERARCHY_DEPTH), 1.0)];
    let tree = build_hierarchy(&records, |record: &HierarchyRecord| record.value);
    assert_eq!(tree.height(), MAX_HIERARCHY_DEPTH);
    assert_eq!(tree.leaf_count(), 1);
}

#[test]
fn empty_keys_are_skipped() {
    let records = vec![
        HierarchyRecord::new(Vec::<PathSegment>::new(), 5.0),
        HierarchyRecord::new(["kept"], 1.0),
    ];
    let tree = build_hierarchy(&records, |record: &HierarchyRecord| record.value);
    assert_eq!(child_keys(&tree), vec!["kept"]);
}

#[test]
fn numeric_segments_are_distinct_from_text() {
    let records = vec![
        HierarchyRecord::new([PathSegment::number(2024.0), PathSegment::text("Q1")], 1.0),
        HierarchyRecord::new([PathSegment::text("2024"), PathSegment::text("Q1")], 1.0),
    ];
    let tree = build_hierarchy(&records, |record: &HierarchyRecord| record.value);
    assert_eq!(tree.children.len(), 2);
}

#[test]
fn decimal_records_convert_to_f64() {
    let record = HierarchyRecord::from_decimal(["sales"], Decimal::new(12_345, 2))
        .expect("decimal record");
    assert!((record.value - 123.45).abs() <= 1e-12);
}
