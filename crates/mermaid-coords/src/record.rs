//! Normalized output records.
//!
//! The JSON shape is consumed by the Signavio import tooling and must not drift:
//! circles are `{"center":{"x":..,"y":..},"radius":{"r":..}}`, rectangles are
//! `{"topLeft":..,"topRight":..,"bottomLeft":..,"bottomRight":..}`.
//!
//! Numbers are written the way `JSON.stringify` writes them (see [`crate::json`]); NaN
//! coordinates come out as `null` and read back as NaN.

use serde::{Deserialize, Deserializer, Serialize};

fn nan_from_null<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(deserialize_with = "nan_from_null")]
    pub x: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radius {
    #[serde(deserialize_with = "nan_from_null")]
    pub r: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleRecord {
    pub center: Point,
    pub radius: Radius,
}

impl CircleRecord {
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.r.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleRecord {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl RectangleRecord {
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.corners().iter().all(Point::is_finite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeRecord {
    Circle(CircleRecord),
    Rectangle(RectangleRecord),
}

impl ShapeRecord {
    pub fn as_circle(&self) -> Option<&CircleRecord> {
        match self {
            ShapeRecord::Circle(c) => Some(c),
            ShapeRecord::Rectangle(_) => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&RectangleRecord> {
        match self {
            ShapeRecord::Rectangle(r) => Some(r),
            ShapeRecord::Circle(_) => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            ShapeRecord::Circle(c) => c.is_finite(),
            ShapeRecord::Rectangle(r) => r.is_finite(),
        }
    }
}

impl From<CircleRecord> for ShapeRecord {
    fn from(value: CircleRecord) -> Self {
        Self::Circle(value)
    }
}

impl From<RectangleRecord> for ShapeRecord {
    fn from(value: RectangleRecord) -> Self {
        Self::Rectangle(value)
    }
}

/// Ordered records of one extraction run. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateCollection {
    records: Vec<ShapeRecord>,
}

impl CoordinateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: impl Into<ShapeRecord>) {
        self.records.push(record.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShapeRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ShapeRecord] {
        &self.records
    }

    pub fn circles(&self) -> impl Iterator<Item = &CircleRecord> {
        self.records.iter().filter_map(ShapeRecord::as_circle)
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &RectangleRecord> {
        self.records.iter().filter_map(ShapeRecord::as_rectangle)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        crate::json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        crate::json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a CoordinateCollection {
    type Item = &'a ShapeRecord;
    type IntoIter = std::slice::Iter<'a, ShapeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for CoordinateCollection {
    type Item = ShapeRecord;
    type IntoIter = std::vec::IntoIter<ShapeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl FromIterator<ShapeRecord> for CoordinateCollection {
    fn from_iter<T: IntoIterator<Item = ShapeRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_coordinates_read_back_as_nan() {
        let c: CircleRecord =
            serde_json::from_str(r#"{"center":{"x":null,"y":2},"radius":{"r":3.5}}"#).unwrap();
        assert!(c.center.x.is_nan());
        assert_eq!(c.center.y, 2.0);
        assert_eq!(c.radius.r, 3.5);
    }
}
