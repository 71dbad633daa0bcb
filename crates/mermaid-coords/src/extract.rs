//! Translate-normalization of shape primitives.

use crate::options::{BottomRightY, CircleCenter, ExtractOptions, MalformedPolicy, MissingTransform};
use crate::record::{CircleRecord, CoordinateCollection, Point, Radius, RectangleRecord, ShapeRecord};
use crate::shape::{CircleAttrs, RectAttrs, ShapeKind, ShapePrimitive, or_nan};
use crate::transform::{Translation, parse_translation};

/// Why a primitive produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The parent element has no `transform` attribute.
    NoParentTransform,
    /// The parent transform is not a `translate(tx, ty)`.
    UnsupportedTransform,
    /// A rect whose `width` or `height` is missing or not a number.
    MissingSize,
    /// The record would contain NaN and [`MalformedPolicy::Skip`] is active.
    NonFinite,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipReason::NoParentTransform => "parent has no transform",
            SkipReason::UnsupportedTransform => "parent transform is not a translate",
            SkipReason::MissingSize => "width/height is not a number",
            SkipReason::NonFinite => "non-finite coordinates",
        };
        f.write_str(s)
    }
}

/// Stateless extractor: every call to [`CoordinateExtractor::extract`] builds a new collection.
#[derive(Debug, Clone, Default)]
pub struct CoordinateExtractor {
    options: ExtractOptions,
}

impl CoordinateExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Normalizes `primitives`, circles first and then rects, each in input order.
    pub fn extract(&self, primitives: &[ShapePrimitive]) -> CoordinateCollection {
        let circles = primitives
            .iter()
            .filter(|p| matches!(p.kind, ShapeKind::Circle(_)));
        let rects = primitives
            .iter()
            .filter(|p| matches!(p.kind, ShapeKind::Rect(_)));

        let mut out = CoordinateCollection::new();
        let mut skipped = 0usize;
        for (idx, primitive) in circles.chain(rects).enumerate() {
            match self.record(primitive) {
                Ok(record) => out.push(record),
                Err(reason) => {
                    skipped += 1;
                    tracing::debug!(
                        index = idx,
                        tag = primitive.tag_name(),
                        %reason,
                        "skipping primitive"
                    );
                }
            }
        }

        tracing::info!(
            records = out.len(),
            circles = out.circles().count(),
            rectangles = out.rectangles().count(),
            skipped,
            "extracted shape coordinates"
        );
        out
    }

    /// Normalizes a single primitive.
    pub fn record(&self, primitive: &ShapePrimitive) -> Result<ShapeRecord, SkipReason> {
        let parent = primitive.parent_transform.as_deref();
        match &primitive.kind {
            ShapeKind::Circle(attrs) => self.circle(attrs, parent).map(ShapeRecord::from),
            ShapeKind::Rect(attrs) => self.rectangle(attrs, parent).map(ShapeRecord::from),
        }
    }

    pub fn circle(
        &self,
        attrs: &CircleAttrs,
        parent_transform: Option<&str>,
    ) -> Result<CircleRecord, SkipReason> {
        let (cx, cy) = match self.options.circle_center {
            CircleCenter::Radii => (attrs.rx, attrs.ry),
            CircleCenter::Center => (attrs.cx, attrs.cy),
        };
        let t = self.translation(parent_transform)?;

        if cx.is_none() || cy.is_none() || attrs.r.is_none() {
            tracing::warn!(?attrs, "circle has a missing or non-numeric attribute");
        }
        let (x, y) = t.apply(or_nan(cx), or_nan(cy));
        let record = CircleRecord {
            center: Point::new(x, y),
            radius: Radius { r: or_nan(attrs.r) },
        };
        self.check_finite(record.is_finite())?;
        Ok(record)
    }

    pub fn rectangle(
        &self,
        attrs: &RectAttrs,
        parent_transform: Option<&str>,
    ) -> Result<RectangleRecord, SkipReason> {
        let size = |v: Option<f64>| v.filter(|v| !v.is_nan());
        let (Some(width), Some(height)) = (size(attrs.width), size(attrs.height)) else {
            return Err(SkipReason::MissingSize);
        };
        let t = self.translation(parent_transform)?;

        if attrs.x.is_none() || attrs.y.is_none() {
            tracing::warn!(?attrs, "rect has a missing or non-numeric position");
        }
        let raw_y = or_nan(attrs.y);
        let (x, y) = t.apply(or_nan(attrs.x), raw_y);
        let bottom_right_y = match self.options.bottom_right_y {
            BottomRightY::Unadjusted => raw_y - height,
            BottomRightY::Adjusted => y - height,
        };
        let record = RectangleRecord {
            top_left: Point::new(x, y),
            top_right: Point::new(x + width, y),
            bottom_left: Point::new(x, y - height),
            bottom_right: Point::new(x + width, bottom_right_y),
        };
        self.check_finite(record.is_finite())?;
        Ok(record)
    }

    fn translation(&self, parent_transform: Option<&str>) -> Result<Translation, SkipReason> {
        match parent_transform {
            None => match self.options.missing_transform {
                MissingTransform::Skip => Err(SkipReason::NoParentTransform),
                MissingTransform::Identity => Ok(Translation::IDENTITY),
            },
            Some(raw) => parse_translation(raw).ok_or(SkipReason::UnsupportedTransform),
        }
    }

    fn check_finite(&self, finite: bool) -> Result<(), SkipReason> {
        if !finite && self.options.malformed == MalformedPolicy::Skip {
            return Err(SkipReason::NonFinite);
        }
        Ok(())
    }
}
