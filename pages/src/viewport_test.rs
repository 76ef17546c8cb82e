#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_validated_accepts_finite() {
    assert_eq!(Point::new(-5.0, 7.5).validated(), Ok(Point::new(-5.0, 7.5)));
}

#[test]
fn point_validated_rejects_nan() {
    let err = Point::new(f64::NAN, 0.0).validated().unwrap_err();
    let LayoutError::InvalidArgument { field, .. } = err;
    assert_eq!(field, "center.x");
}

#[test]
fn point_validated_rejects_infinity() {
    let err = Point::new(0.0, f64::INFINITY).validated().unwrap_err();
    let LayoutError::InvalidArgument { field, value } = err;
    assert_eq!(field, "center.y");
    assert!(value.is_infinite());
}

// --- center ---

#[test]
fn center_at_identity_zoom() {
    let vp = Viewport::new(0.0, 0.0, 800.0, 600.0, 1.0);
    let c = vp.center().unwrap();
    assert!(approx_eq(c.x, 400.0));
    assert!(approx_eq(c.y, 300.0));
}

#[test]
fn center_subtracts_scroll() {
    let vp = Viewport::new(100.0, -50.0, 800.0, 600.0, 1.0);
    let c = vp.center().unwrap();
    assert!(approx_eq(c.x, 300.0));
    assert!(approx_eq(c.y, 350.0));
}

#[test]
fn center_divides_by_zoom() {
    let vp = Viewport::new(0.0, 0.0, 800.0, 600.0, 2.0);
    let c = vp.center().unwrap();
    assert!(approx_eq(c.x, 200.0));
    assert!(approx_eq(c.y, 150.0));
}

#[test]
fn center_rejects_zero_zoom() {
    let vp = Viewport::new(0.0, 0.0, 800.0, 600.0, 0.0);
    assert_eq!(vp.center(), Err(LayoutError::InvalidArgument { field: "zoom", value: 0.0 }));
}

#[test]
fn center_rejects_negative_zoom() {
    let vp = Viewport::new(0.0, 0.0, 800.0, 600.0, -1.0);
    assert!(vp.center().is_err());
}

#[test]
fn center_rejects_nan_scroll() {
    let vp = Viewport::new(f64::NAN, 0.0, 800.0, 600.0, 1.0);
    let LayoutError::InvalidArgument { field, .. } = vp.center().unwrap_err();
    assert_eq!(field, "scrollX");
}

// --- Zoom boundary ---

#[test]
fn zoom_defaults_to_one() {
    assert_eq!(Zoom::default().value(), 1.0);
}

#[test]
fn deserialize_plain_zoom() {
    let vp: Viewport =
        serde_json::from_str(r#"{"scrollX": 10, "scrollY": 20, "width": 800, "height": 600, "zoom": 1.5}"#).unwrap();
    assert_eq!(vp.zoom.value(), 1.5);
    assert_eq!(vp.scroll_x, 10.0);
}

#[test]
fn deserialize_wrapped_zoom() {
    let vp: Viewport =
        serde_json::from_str(r#"{"scrollX": 0, "scrollY": 0, "width": 800, "height": 600, "zoom": {"value": 2}}"#)
            .unwrap();
    assert_eq!(vp.zoom.value(), 2.0);
}

#[test]
fn deserialize_missing_zoom_is_identity() {
    let vp: Viewport = serde_json::from_str(r#"{"scrollX": 0, "scrollY": 0, "width": 100, "height": 100}"#).unwrap();
    assert_eq!(vp.zoom, Zoom::default());
}

#[test]
fn deserialize_ignores_unknown_app_state_keys() {
    let vp: Viewport = serde_json::from_str(
        r#"{"scrollX": 0, "scrollY": 0, "width": 100, "height": 100, "zoom": {"value": 1}, "theme": "dark"}"#,
    )
    .unwrap();
    assert_eq!(vp.width, 100.0);
}

#[test]
fn deserialize_rejects_garbage_zoom() {
    let result: Result<Viewport, _> =
        serde_json::from_str(r#"{"scrollX": 0, "scrollY": 0, "width": 1, "height": 1, "zoom": "big"}"#);
    assert!(result.is_err());
}

#[test]
fn zoom_serializes_as_plain_number() {
    let vp = Viewport::new(0.0, 0.0, 1.0, 1.0, 2.0);
    let value = serde_json::to_value(vp).unwrap();
    assert_eq!(value["zoom"], 2.0);
}
