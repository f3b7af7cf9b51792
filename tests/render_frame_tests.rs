use std::f64::consts::PI;

use sunburst_rs::api::{InvalidationLevel, SunburstChart, SunburstConfig};
use sunburst_rs::core::{HierarchyRecord, SlicePoint, hierarchy_path};
use sunburst_rs::interaction::SliceSelection;
use sunburst_rs::render::{CATEGORY10, Color, NullRenderer};

fn chart() -> SunburstChart<NullRenderer> {
    let mut chart = SunburstChart::new(NullRenderer::default(), SunburstConfig::new(100.0))
        .expect("chart init");
    chart.set_records(vec![
        HierarchyRecord::new(["US", "NY"], 3.0),
        HierarchyRecord::new(["US", "CA"], 1.0),
        HierarchyRecord::new(["EU", "FR"], 4.0),
    ]);
    chart
}

#[test]
fn frame_carries_one_slice_per_node() {
    let chart = chart();
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.slices.len(), 5);
    assert!(!frame.empty);
    frame.validate().expect("valid frame");

    let ny = frame
        .slices
        .iter()
        .find(|slice| slice.path == hierarchy_path(["US", "NY"]))
        .expect("NY slice");
    assert_eq!(ny.title, "NY: 3");
    assert_eq!(ny.selection, SliceSelection::Neutral);
    assert!(!ny.highlighted);
}

#[test]
fn colors_follow_key_order_of_appearance() {
    let chart = chart();
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.slices[0].key.to_string(), "EU");
    assert_eq!(frame.slices[0].color, CATEGORY10[0]);
    assert_eq!(frame.slices[1].color, CATEGORY10[1]);
}

#[test]
fn narrow_slices_drop_labels() {
    let mut chart = chart();
    chart.set_min_angle_for_label(1.0).expect("min angle");
    let frame = chart.build_render_frame().expect("frame");

    let ca = frame
        .slices
        .iter()
        .find(|slice| slice.path == hierarchy_path(["US", "CA"]))
        .expect("CA slice");
    assert!(ca.label.is_none());
    assert_eq!(frame.label_count(), 4);

    chart.set_render_labels(false);
    assert_eq!(chart.build_render_frame().expect("frame").label_count(), 0);
    assert!(chart.set_min_angle_for_label(-1.0).is_err());
}

#[test]
fn filters_drive_selection_classes() {
    let mut chart = chart();
    chart.click(&hierarchy_path(["US"])).expect("click US");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Layout);
    let frame = chart.build_render_frame().expect("frame");

    for slice in &frame.slices {
        let expected = if slice.path[0].to_string() == "US" {
            SliceSelection::Selected
        } else {
            SliceSelection::Deselected
        };
        assert_eq!(slice.selection, expected, "{:?}", slice.path);
    }
}

#[test]
fn hover_highlights_path_to_root() {
    let mut chart = chart();
    let point = SlicePoint::from_polar(13.0 * PI / 8.0, 90.0);
    chart.pointer_move(point.x, point.y).expect("pointer move");

    let frame = chart.build_render_frame().expect("frame");
    let highlighted: Vec<String> = frame
        .slices
        .iter()
        .filter(|slice| slice.highlighted)
        .map(|slice| slice.key.to_string())
        .collect();
    assert_eq!(highlighted, vec!["US", "NY"]);
}

#[test]
fn formatters_override_label_and_title() {
    let mut chart = chart();
    chart.set_label_formatter_fn(|key, value| format!("{key} ({value})"));
    chart.set_title_formatter_fn(|key, _| format!("title {key}"));
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.slices[0].title, "title EU");
    assert_eq!(
        frame.slices[0].label.as_ref().map(|label| label.text.as_str()),
        Some("EU (4)")
    );

    chart.clear_label_formatter();
    chart.clear_title_formatter();
    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.slices[0].title, "EU: 4");
}

#[test]
fn render_clears_invalidation_and_reaches_renderer() {
    let mut chart = chart();
    chart.render().expect("render");

    assert_eq!(chart.pending_invalidation(), InvalidationLevel::None);
    assert_eq!(chart.renderer().frames_rendered, 1);
    assert_eq!(chart.renderer().last_slice_count, 5);

    chart.click(&hierarchy_path(["EU"])).expect("click EU");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Selection);
    chart.pointer_leave();
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Selection);
}

#[test]
fn empty_data_renders_placeholder() {
    let mut chart = SunburstChart::new(
        NullRenderer::default(),
        SunburstConfig::new(100.0).with_empty_title("nothing here"),
    )
    .expect("chart init");
    chart.render().expect("render empty");

    let renderer = chart.renderer();
    assert!(renderer.last_frame_empty);
    assert_eq!(renderer.last_slice_count, 0);
    assert_eq!(chart.build_render_frame().expect("frame").empty_title, "nothing here");

    chart.set_records(vec![HierarchyRecord::new(["a"], 0.0)]);
    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.empty);
    assert_eq!(frame.label_count(), 0);
}

#[test]
fn palette_must_not_be_empty() {
    let mut chart = chart();
    assert!(chart.set_color_palette(Vec::new()).is_err());
    assert!(chart.set_color_palette(vec![Color::rgb(2.0, 0.0, 0.0)]).is_err());

    let red = Color::rgb(1.0, 0.0, 0.0);
    chart.set_color_palette(vec![red]).expect("palette");
    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.slices.iter().all(|slice| slice.color == red));
}
