//! Typed views of `circle` / `rect` elements, populated once when the document is loaded.

/// Raw circle attributes. `None` means the attribute was missing or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircleAttrs {
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
}

/// Raw rect attributes. `None` means the attribute was missing or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectAttrs {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle(CircleAttrs),
    Rect(RectAttrs),
}

/// A shape element plus the `transform` attribute of its immediate parent.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePrimitive {
    pub kind: ShapeKind,
    pub parent_transform: Option<String>,
}

impl ShapePrimitive {
    pub fn circle(attrs: CircleAttrs, parent_transform: Option<&str>) -> Self {
        Self {
            kind: ShapeKind::Circle(attrs),
            parent_transform: parent_transform.map(str::to_string),
        }
    }

    pub fn rect(attrs: RectAttrs, parent_transform: Option<&str>) -> Self {
        Self {
            kind: ShapeKind::Rect(attrs),
            parent_transform: parent_transform.map(str::to_string),
        }
    }

    pub fn tag_name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Rect(_) => "rect",
        }
    }
}

/// Parses a geometric attribute value like `Number()`: surrounding whitespace is ignored and a
/// blank value reads as `0`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok()
}

/// Resolves an optional attribute to the value arithmetic runs on (NaN when absent).
pub(crate) fn or_nan(v: Option<f64>) -> f64 {
    v.unwrap_or(f64::NAN)
}
