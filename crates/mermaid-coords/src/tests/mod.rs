mod extract;

/// Parses the collection's JSON output back into a value for structural comparison.
fn json_value(out: &crate::CoordinateCollection) -> serde_json::Value {
    serde_json::from_str(&out.to_json().expect("serialize ok")).expect("valid json")
}

/// Wraps SVG body markup into a minimal HTML page.
fn page(svg_body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>t</title></head><body><svg xmlns=\"http://www.w3.org/2000/svg\">{svg_body}</svg></body></html>"
    )
}
