use super::{json_value, page};
use crate::*;
use serde_json::json;

fn run(svg_body: &str) -> CoordinateCollection {
    extract_coordinates(&page(svg_body), &ExtractOptions::default()).expect("extract ok")
}

fn run_with(svg_body: &str, options: ExtractOptions) -> CoordinateCollection {
    extract_coordinates(&page(svg_body), &options).expect("extract ok")
}

#[test]
fn circle_center_is_shifted_by_parent_translate() {
    let out = run(r#"<g transform="translate(10, 20)"><circle rx="5" ry="7" r="3"></circle></g>"#);
    assert_eq!(
        json_value(&out),
        json!([{ "center": { "x": 15, "y": 27 }, "radius": { "r": 3 } }])
    );
}

#[test]
fn circle_without_parent_transform_is_skipped() {
    let out = run(r#"<g><circle rx="5" ry="7" r="3"></circle></g>"#);
    assert!(out.is_empty());
}

#[test]
fn circle_with_non_translate_parent_is_skipped() {
    let out = run(r#"<g transform="scale(2)"><circle rx="5" ry="7" r="3"></circle></g>"#);
    assert!(out.is_empty());
}

#[test]
fn rectangle_corners_keep_unadjusted_bottom_right_y() {
    let out = run(r#"<g transform="translate(1, 2)"><rect x="0" y="10" width="4" height="6"></rect></g>"#);
    assert_eq!(
        json_value(&out),
        json!([{
            "topLeft": { "x": 1, "y": 12 },
            "topRight": { "x": 5, "y": 12 },
            "bottomLeft": { "x": 1, "y": 6 },
            "bottomRight": { "x": 5, "y": 4 }
        }])
    );
}

#[test]
fn rectangle_with_blank_width_reads_as_zero_width() {
    let body = r#"<g transform="translate(1, 2)"><rect x="0" y="10" width="" height="6"></rect></g>"#;
    assert_eq!(
        json_value(&run(body)),
        json!([{
            "topLeft": { "x": 1, "y": 12 },
            "topRight": { "x": 1, "y": 12 },
            "bottomLeft": { "x": 1, "y": 6 },
            "bottomRight": { "x": 1, "y": 4 }
        }])
    );

    let options = ExtractOptions {
        malformed: MalformedPolicy::Skip,
        ..Default::default()
    };
    assert!(run_with(body, options).is_empty());
}

#[test]
fn rectangle_adjusted_bottom_right_matches_other_corners() {
    let out = run_with(
        r#"<g transform="translate(1, 2)"><rect x="0" y="10" width="4" height="6"></rect></g>"#,
        ExtractOptions {
            bottom_right_y: BottomRightY::Adjusted,
            ..Default::default()
        },
    );
    let rect = out.rectangles().next().expect("rect record");
    assert_eq!(rect.bottom_right, Point::new(5.0, 6.0));
    assert_eq!(rect.bottom_left.y, rect.bottom_right.y);
}

#[test]
fn rectangle_without_width_is_skipped_even_with_transform() {
    let out = run(r#"<g transform="translate(1, 2)"><rect x="0" y="10" height="6"></rect></g>"#);
    assert!(out.is_empty());

    let out = run(r#"<g transform="translate(1, 2)"><rect x="0" y="10" width="NaN" height="6"></rect></g>"#);
    assert!(out.is_empty());
}

#[test]
fn circles_come_before_rectangles_in_document_order() {
    let body = r#"
        <g transform="translate(0, 0)"><rect x="1" y="1" width="1" height="1"></rect></g>
        <g transform="translate(0, 0)"><circle rx="1" ry="1" r="1"></circle></g>
        <g transform="translate(0, 0)"><rect x="2" y="2" width="1" height="1"></rect></g>
        <g transform="translate(0, 0)"><circle rx="2" ry="2" r="2"></circle></g>
    "#;
    let out = run(body);
    let kinds: Vec<&str> = out
        .iter()
        .map(|r| match r {
            ShapeRecord::Circle(_) => "circle",
            ShapeRecord::Rectangle(_) => "rect",
        })
        .collect();
    assert_eq!(kinds, ["circle", "circle", "rect", "rect"]);

    let radii: Vec<f64> = out.circles().map(|c| c.radius.r).collect();
    assert_eq!(radii, [1.0, 2.0]);
    let lefts: Vec<f64> = out.rectangles().map(|r| r.top_left.x).collect();
    assert_eq!(lefts, [1.0, 2.0]);
}

#[test]
fn repeated_runs_are_identical() {
    let body = r#"<g transform="translate(3.5, -2)"><circle rx="1" ry="2" r="4"></circle><rect x="0" y="0" width="10" height="5"></rect></g>"#;
    let a = run(body);
    let b = run(body);
    assert_eq!(a.len(), 2);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn empty_svg_serializes_as_empty_array() {
    let out = run("");
    assert!(out.is_empty());
    assert_eq!(out.to_json().unwrap(), "[]");
}

#[test]
fn only_the_immediate_parent_transform_counts() {
    let out = run(r#"<g transform="translate(100, 100)"><g><circle rx="1" ry="1" r="1"></circle></g></g>"#);
    assert!(out.is_empty());

    let out = run(r#"<g transform="translate(100, 100)"><g transform="translate(1, 1)"><circle rx="1" ry="1" r="1"></circle></g></g>"#);
    let c = out.circles().next().expect("circle record");
    assert_eq!(c.center, Point::new(2.0, 2.0));
}

#[test]
fn identity_fallback_keeps_transformless_shapes_only() {
    let options = ExtractOptions {
        missing_transform: MissingTransform::Identity,
        ..Default::default()
    };
    let body = r#"
        <g><circle rx="5" ry="7" r="3"></circle></g>
        <g transform="scale(2)"><circle rx="5" ry="7" r="3"></circle></g>
    "#;
    let out = run_with(body, options);
    assert_eq!(out.len(), 1);
    let c = out.circles().next().unwrap();
    assert_eq!(c.center, Point::new(5.0, 7.0));
}

#[test]
fn malformed_circle_attributes_propagate_as_null() {
    // Mermaid circles use cx/cy, so the rx/ry center is missing here.
    let out = run(r#"<g transform="translate(10, 20)"><circle cx="0" cy="0" r="3"></circle></g>"#);
    assert_eq!(
        json_value(&out),
        json!([{ "center": { "x": null, "y": null }, "radius": { "r": 3 } }])
    );
}

#[test]
fn skip_policy_drops_non_finite_records() {
    let options = ExtractOptions {
        malformed: MalformedPolicy::Skip,
        ..Default::default()
    };
    let body = r#"
        <g transform="translate(10, 20)"><circle cx="0" cy="0" r="3"></circle></g>
        <g transform="translate(10, 20)"><rect width="4" height="6"></rect></g>
        <g transform="translate(10, 20)"><rect x="1" y="1" width="4" height="6"></rect></g>
    "#;
    let out = run_with(body, options);
    assert_eq!(out.len(), 1);
    assert_eq!(out.rectangles().next().unwrap().top_left, Point::new(11.0, 21.0));
}

#[test]
fn center_attributes_can_be_read_from_cx_cy() {
    let options = ExtractOptions {
        circle_center: CircleCenter::Center,
        ..Default::default()
    };
    let out = run_with(
        r#"<g transform="translate(10, 20)"><circle cx="1" cy="2" rx="100" ry="100" r="3"></circle></g>"#,
        options,
    );
    assert_eq!(out.circles().next().unwrap().center, Point::new(11.0, 22.0));
}

#[test]
fn extractor_reports_skip_reasons() {
    let extractor = CoordinateExtractor::default();
    let attrs = RectAttrs {
        x: Some(0.0),
        y: Some(0.0),
        width: Some(1.0),
        height: None,
    };
    assert_eq!(
        extractor.rectangle(&attrs, Some("translate(1, 1)")),
        Err(SkipReason::MissingSize)
    );

    let attrs = RectAttrs {
        height: Some(1.0),
        ..attrs
    };
    assert_eq!(
        extractor.rectangle(&attrs, None),
        Err(SkipReason::NoParentTransform)
    );
    assert_eq!(
        extractor.rectangle(&attrs, Some("rotate(90)")),
        Err(SkipReason::UnsupportedTransform)
    );
    assert!(extractor.rectangle(&attrs, Some("translate(1, 1)")).is_ok());
}

#[test]
fn extract_reorders_interleaved_primitives() {
    let rect = ShapePrimitive::rect(
        RectAttrs {
            x: Some(0.0),
            y: Some(0.0),
            width: Some(2.0),
            height: Some(2.0),
        },
        Some("translate(0, 0)"),
    );
    let circle = ShapePrimitive::circle(
        CircleAttrs {
            rx: Some(1.0),
            ry: Some(1.0),
            r: Some(1.0),
            ..Default::default()
        },
        Some("translate(0, 0)"),
    );
    let out = CoordinateExtractor::default().extract(&[rect, circle]);
    assert!(matches!(out.records(), [ShapeRecord::Circle(_), ShapeRecord::Rectangle(_)]));
}
