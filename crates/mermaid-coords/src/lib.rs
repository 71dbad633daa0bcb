#![forbid(unsafe_code)]

//! `mermaid-coords` turns rendered Mermaid SVG into a flat list of circle and rectangle
//! coordinates, normalized through the nearest parent `translate(tx, ty)`.
//!
//! The pipeline is:
//! - load the markup into a queryable tree ([`SvgDocument`])
//! - collect typed `circle` / `rect` primitives in tree order ([`ShapePrimitive`])
//! - normalize them into records ([`CoordinateExtractor`])
//!
//! Rendering Mermaid source into SVG lives in `mermaid-coords-render`.

pub mod document;
pub mod error;
pub mod extract;
pub mod json;
pub mod options;
pub mod record;
pub mod shape;
pub mod transform;

pub use document::SvgDocument;
pub use error::{Error, Result};
pub use extract::{CoordinateExtractor, SkipReason};
pub use options::{BottomRightY, CircleCenter, ExtractOptions, MalformedPolicy, MissingTransform};
pub use record::{CircleRecord, CoordinateCollection, Point, Radius, RectangleRecord, ShapeRecord};
pub use shape::{CircleAttrs, RectAttrs, ShapeKind, ShapePrimitive};
pub use transform::{Transform, Translation, parse_transform, parse_translation};

/// Loads `markup` and returns the normalized coordinates of every circle and rectangle whose
/// parent carries a translate transform.
///
/// Circles come first, then rectangles; each group keeps document order.
pub fn extract_coordinates(markup: &str, options: &ExtractOptions) -> Result<CoordinateCollection> {
    let doc = SvgDocument::parse(markup, options)?;
    let primitives = doc.primitives()?;
    let svgs = doc.svg_count()?;
    tracing::debug!(
        svgs,
        parse_errors = doc.parse_errors().count(),
        primitives = primitives.len(),
        "loaded markup"
    );
    Ok(CoordinateExtractor::new(options.clone()).extract(&primitives))
}

#[cfg(test)]
mod tests;
