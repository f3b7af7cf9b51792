use std::f64::consts::PI;
use std::sync::Arc;

use approx::assert_relative_eq;
use sunburst_rs::ChartError;
use sunburst_rs::api::{InvalidationLevel, SunburstChart, SunburstConfig};
use sunburst_rs::core::{
    CapConfig, HierarchyRecord, NodeOrdering, RingSizeMode, RingSizePolicy, SlicePoint,
    hierarchy_path,
};
use sunburst_rs::interaction::{InteractionMode, SliceSelection};
use sunburst_rs::render::NullRenderer;

fn regions() -> Vec<HierarchyRecord> {
    vec![
        HierarchyRecord::new(["US", "NY"], 3.0),
        HierarchyRecord::new(["US", "CA"], 1.0),
        HierarchyRecord::new(["EU", "FR"], 4.0),
    ]
}

fn chart() -> SunburstChart<NullRenderer> {
    let mut chart = SunburstChart::new(NullRenderer::default(), SunburstConfig::new(100.0))
        .expect("chart init");
    chart.set_records(regions());
    chart
}

#[test]
fn rejects_invalid_radius() {
    let err = SunburstChart::new(
        NullRenderer::default(),
        SunburstConfig::new(50.0).with_inner_radius(60.0),
    )
    .err()
    .expect("invalid radius");
    assert!(matches!(err, ChartError::InvalidRadius { .. }));
}

#[test]
fn rejects_custom_mode_in_config() {
    let config = SunburstConfig::new(100.0).with_ring_size_mode(RingSizeMode::Custom);
    assert!(SunburstChart::new(NullRenderer::default(), config).is_err());
}

#[test]
fn regions_partition_end_to_end() {
    let chart = chart();
    let partition = chart.partition().expect("partition");

    let us = partition.find(&hierarchy_path(["US"])).expect("US");
    let eu = partition.find(&hierarchy_path(["EU"])).expect("EU");
    assert_eq!(us.value, 4.0);
    assert_eq!(eu.value, 4.0);
    assert_relative_eq!(eu.angle(), PI, epsilon = 1e-12);
    assert_relative_eq!(us.angle(), PI, epsilon = 1e-12);
    assert_eq!(partition.total_value, 8.0);
}

#[test]
fn partition_is_cached_until_invalidated() {
    let mut chart = chart();
    let first = chart.partition().expect("partition");
    let second = chart.partition().expect("partition");
    assert!(Arc::ptr_eq(&first, &second));

    chart.set_ordering(NodeOrdering::ValueDescending);
    let third = chart.partition().expect("partition");
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(first.nodes.len(), third.nodes.len());
}

#[test]
fn click_cycle_drills_in_and_toggles_off() {
    let mut chart = chart();

    chart.click(&hierarchy_path(["US"])).expect("click US");
    assert_eq!(chart.filters(), vec![hierarchy_path(["US"])]);
    assert!(chart.has_filter());

    let plan = chart.click(&hierarchy_path(["US", "NY"])).expect("click NY");
    assert_eq!(plan.removed.len(), 1);
    assert_eq!(chart.filters(), vec![hierarchy_path(["US", "NY"])]);
    assert_eq!(chart.filter_printer_text(), "[US -> NY]");

    chart.click(&hierarchy_path(["US", "NY"])).expect("click NY again");
    assert!(!chart.has_filter());
    assert_eq!(chart.filter_printer_text(), "");
}

#[test]
fn click_on_empty_path_is_rejected() {
    let mut chart = chart();
    assert!(matches!(chart.click(&[]), Err(ChartError::InvalidData(_))));
}

#[test]
fn click_at_hit_tests_the_pointer() {
    let mut chart = chart();
    let point = SlicePoint::from_polar(13.0 * PI / 8.0, 90.0);

    let plan = chart
        .click_at(point.x, point.y)
        .expect("click at")
        .expect("slice hit");
    assert_eq!(
        plan.added.map(|filter| filter.path().to_vec()),
        Some(hierarchy_path(["US", "NY"]).to_vec())
    );

    assert!(chart.click_at(500.0, 500.0).expect("click outside").is_none());
}

#[test]
fn filters_survive_data_updates() {
    let mut chart = chart();
    chart.click(&hierarchy_path(["EU"])).expect("click EU");

    chart.append_record(HierarchyRecord::new(["EU", "DE"], 2.0));
    assert_eq!(chart.filters(), vec![hierarchy_path(["EU"])]);
    assert!(chart.accepts(&hierarchy_path(["EU", "DE"])));
    assert!(!chart.accepts(&hierarchy_path(["US", "NY"])));
    assert_eq!(
        chart.slice_selection(&hierarchy_path(["US"])),
        SliceSelection::Deselected
    );
}

#[test]
fn filter_all_and_replace_filters() {
    let mut chart = chart();
    chart
        .replace_filters(vec![hierarchy_path(["EU"]), hierarchy_path(["US", "CA"])])
        .expect("replace filters");
    assert_eq!(chart.filters().len(), 2);
    assert!(chart.has_filter_path(&hierarchy_path(["US", "CA"])));
    assert!(chart.is_path_filtered(&hierarchy_path(["EU", "FR"])));

    chart.filter_all();
    assert!(!chart.has_filter());
    assert!(chart.replace_filters(vec![Default::default()]).is_err());
}

#[test]
fn filter_toggles_without_reconciliation() {
    let mut chart = chart();
    assert!(chart.filter(&hierarchy_path(["US"])).expect("add US"));
    assert!(chart.filter(&hierarchy_path(["US", "NY"])).expect("add NY"));
    assert_eq!(chart.filters().len(), 2);
    assert!(!chart.filter(&hierarchy_path(["US"])).expect("remove US"));
    assert_eq!(chart.filters(), vec![hierarchy_path(["US", "NY"])]);
}

#[test]
fn invalid_relative_sizes_keep_previous_policy() {
    let mut chart = chart();

    let err = chart
        .set_relative_ring_sizes(|_| vec![0.5, 0.6, 0.1])
        .expect_err("length mismatch");
    assert!(err.to_string().contains("number of values"));

    let err = chart
        .set_relative_ring_sizes(|_| vec![0.3, 0.3])
        .expect_err("sum mismatch");
    assert!(err.to_string().contains("add up to 1"));
    assert_eq!(chart.ring_size_mode(), RingSizeMode::Default);

    chart
        .set_relative_ring_sizes(|_| vec![0.25, 0.75])
        .expect("valid sizes");
    assert_eq!(chart.ring_size_mode(), RingSizeMode::Custom);
    let partition = chart.partition().expect("partition");
    let eu = partition.find(&hierarchy_path(["EU"])).expect("EU");
    assert_relative_eq!(eu.outer_radius, 25.0, epsilon = 1e-9);
}

#[test]
fn deeper_data_revalidates_custom_policy_on_partition() {
    let mut chart = chart();
    chart
        .set_ring_size_policy(RingSizePolicy::relative(|_| vec![0.5, 0.5]))
        .expect("two rings");

    chart.append_record(HierarchyRecord::new(["US", "NY", "NYC"], 1.0));
    assert!(matches!(
        chart.partition(),
        Err(ChartError::InvalidRingSizes(_))
    ));

    chart.use_equal_ring_sizes().expect("equal sizes");
    assert_eq!(chart.partition().expect("partition").ring_count, 3);
}

#[test]
fn value_accessor_remeasures_records() {
    let mut chart = chart();
    chart.set_value_accessor_fn(|record| {
        if record.key.first().map(ToString::to_string).as_deref() == Some("US") {
            0.0
        } else {
            record.value
        }
    });

    let partition = chart.partition().expect("partition");
    assert_eq!(partition.total_value, 4.0);
    assert_eq!(chart.records().len(), 3);

    chart.clear_value_accessor();
    assert_eq!(chart.partition().expect("partition").total_value, 8.0);
}

#[test]
fn cap_folds_small_top_level_records() {
    let mut chart = SunburstChart::new(
        NullRenderer::default(),
        SunburstConfig::new(100.0).with_cap(CapConfig::default().with_cap(2)),
    )
    .expect("chart init");
    chart.set_records(vec![
        HierarchyRecord::new(["a"], 5.0),
        HierarchyRecord::new(["b"], 3.0),
        HierarchyRecord::new(["c"], 1.0),
        HierarchyRecord::new(["d"], 1.0),
    ]);

    let partition = chart.partition().expect("partition");
    let others = partition.find(&hierarchy_path(["Others"])).expect("others");
    assert_eq!(others.value, 2.0);
    assert_eq!(chart.others().map(|bucket| bucket.keys.len()), Some(2));
}

#[test]
fn pointer_tracks_hovered_slice() {
    let mut chart = chart();
    let point = SlicePoint::from_polar(PI / 2.0, 70.0);

    chart.pointer_move(point.x, point.y).expect("pointer move");
    assert_eq!(chart.interaction_mode(), InteractionMode::Hovering);
    assert_eq!(
        chart.hover_state().hovered_path,
        Some(hierarchy_path(["EU"]))
    );
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Layout);

    chart.pointer_leave();
    assert_eq!(chart.interaction_mode(), InteractionMode::Idle);
    assert!(!chart.hover_state().visible);
    assert!(chart.pointer_move(f64::NAN, 0.0).is_err());
}

#[test]
fn radius_setters_validate_frame() {
    let mut chart = chart();
    chart.set_inner_radius(20.0).expect("inner radius");
    assert!(chart.set_radius(10.0).is_err());
    assert_eq!(chart.radial_frame().radius, 100.0);

    let partition = chart.partition().expect("partition");
    assert!(
        partition
            .nodes
            .iter()
            .all(|node| node.inner_radius >= 20.0 - 1e-9)
    );
}
