use sunburst_rs::core::{CapConfig, HierarchyRecord, cap_records, hierarchy_path};

fn records() -> Vec<HierarchyRecord> {
    vec![
        HierarchyRecord::new(["c"], 1.0),
        HierarchyRecord::new(["a"], 5.0),
        HierarchyRecord::new(["d"], 1.0),
        HierarchyRecord::new(["b"], 3.0),
    ]
}

#[test]
fn no_cap_keeps_records_untouched() {
    let capped = cap_records(&records(), &CapConfig::default());
    assert_eq!(capped.records, records());
    assert!(capped.others.is_none());
}

#[test]
fn front_cap_keeps_largest_and_groups_rest() {
    let capped = cap_records(&records(), &CapConfig::default().with_cap(2));
    let keys: Vec<_> = capped.records.iter().map(|r| r.key.clone()).collect();

    assert_eq!(
        keys,
        vec![
            hierarchy_path(["a"]),
            hierarchy_path(["b"]),
            hierarchy_path(["Others"]),
        ]
    );
    let others = capped.others.expect("others bucket");
    assert_eq!(others.value, 2.0);
    assert_eq!(others.keys, vec![hierarchy_path(["c"]), hierarchy_path(["d"])]);
    assert_eq!(capped.records[2].value, 2.0);
}

#[test]
fn back_cap_keeps_smallest() {
    let config = CapConfig {
        take_front: false,
        ..CapConfig::default().with_cap(2)
    };
    let capped = cap_records(&records(), &config);
    let kept: Vec<f64> = capped.records.iter().map(|r| r.value).collect();

    assert_eq!(kept, vec![1.0, 1.0, 8.0]);
}

#[test]
fn grouping_can_be_disabled() {
    let config = CapConfig {
        group_others: false,
        ..CapConfig::default().with_cap(1)
    };
    let capped = cap_records(&records(), &config);
    assert_eq!(capped.records.len(), 1);
    assert!(capped.others.is_none());
}

#[test]
fn zero_remainder_adds_no_others_slice() {
    let records = vec![
        HierarchyRecord::new(["a"], 5.0),
        HierarchyRecord::new(["b"], 0.0),
    ];
    let capped = cap_records(&records, &CapConfig::default().with_cap(1));
    assert_eq!(capped.records.len(), 1);
    assert!(capped.others.is_none());
}

#[test]
fn empty_others_label_is_rejected() {
    let config = CapConfig {
        others_label: String::new(),
        ..CapConfig::default()
    };
    assert!(config.validate().is_err());
}
