use chart_registry::ChartError;
use chart_registry::core::{MountTarget, Viewport};
use chart_registry::render::{ChartInstance, HeadlessChart};
use serde_json::json;

#[test]
fn rejects_zero_sized_viewport() {
    let err = HeadlessChart::empty(Viewport::new(0, 10)).expect_err("zero width");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 10
        }
    ));
}

#[test]
fn target_viewport_takes_precedence_over_fallback() {
    let sized = MountTarget::with_viewport("sized", Viewport::new(10, 20));
    let unsized_target = MountTarget::new("unsized");
    let fallback = Viewport::new(100, 100);

    let chart = HeadlessChart::for_target(&sized, fallback, json!({})).expect("sized");
    assert_eq!(chart.viewport(), Viewport::new(10, 20));
    let chart = HeadlessChart::for_target(&unsized_target, fallback, json!({})).expect("fallback");
    assert_eq!(chart.viewport(), fallback);
}

#[test]
fn records_options_and_renders() {
    let mut chart = HeadlessChart::empty(Viewport::new(200, 100)).expect("chart");
    assert!(chart.last_rendered().is_none());

    chart
        .set_option(&json!({"title": "t", "data": [1]}))
        .expect("set option");
    chart.render().expect("render");

    assert_eq!(chart.option_updates(), 1);
    assert_eq!(chart.render_count(), 1);
    assert_eq!(chart.last_rendered(), Some(&json!({"title": "t", "data": [1]})));
}

#[test]
fn render_requires_record_option() {
    let mut chart = HeadlessChart::new(Viewport::new(200, 100), json!([1])).expect("chart");
    let err = chart.render().expect_err("array option");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
    assert_eq!(chart.render_count(), 0);
}

#[test]
fn boxed_instances_forward_calls() {
    let mut chart: Box<HeadlessChart> =
        Box::new(HeadlessChart::empty(Viewport::new(1, 1)).expect("chart"));
    ChartInstance::set_option(&mut chart, &json!({"a": 1})).expect("set option");
    ChartInstance::render(&mut chart).expect("render");
    assert_eq!(chart.render_count(), 1);
}
