use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// What to do with a primitive whose parent has no `transform` attribute at all.
///
/// Parents with a transform that is not a plain translate are skipped under both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingTransform {
    #[default]
    Skip,
    Identity,
}

/// Which `y` the bottom-right rectangle corner is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BottomRightY {
    /// `y - height`, using the raw (untranslated) `y`. Matches the established output.
    #[default]
    Unadjusted,
    /// `y + ty - height`, consistent with the other three corners.
    Adjusted,
}

/// Handling of missing or non-numeric geometric attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedPolicy {
    /// Let NaN flow into the record (rectangles with a bad width/height are still skipped).
    #[default]
    Propagate,
    /// Drop any record that would contain a non-finite value.
    Skip,
}

/// Attributes a circle's center is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CircleCenter {
    /// `rx` / `ry`, as the Signavio import expects.
    #[default]
    Radii,
    /// The standard SVG `cx` / `cy`.
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtractOptions {
    pub missing_transform: MissingTransform,
    pub bottom_right_y: BottomRightY,
    pub malformed: MalformedPolicy,
    pub circle_center: CircleCenter,
    /// Fail with [`Error::Markup`] when the HTML parser reports any error.
    pub strict_markup: bool,
}

impl ExtractOptions {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }
}
