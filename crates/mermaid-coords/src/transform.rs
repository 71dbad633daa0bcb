//! SVG `transform` attribute matching.
//!
//! Only the plain two-argument `translate(tx, ty)` form is understood. Everything else
//! (`scale`, `rotate`, `matrix`, single-argument translate) yields `None`, which the extractor
//! treats as "not normalizable".

use regex::Regex;
use std::sync::OnceLock;

/// A 2D offset applied by a parent group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub tx: f64,
    pub ty: f64,
}

impl Translation {
    pub const IDENTITY: Translation = Translation { tx: 0.0, ty: 0.0 };

    pub fn new(tx: f64, ty: f64) -> Self {
        Self { tx, ty }
    }

    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        (x + self.tx, y + self.ty)
    }
}

/// Recognized transform kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Transform {
    Translate { tx: f64, ty: f64 },
}

impl Transform {
    pub fn translation(&self) -> Option<Translation> {
        match *self {
            Transform::Translate { tx, ty } => Some(Translation { tx, ty }),
        }
    }
}

fn translate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Signed decimal: `12`, `-3.5`, `.25`, `4.`, with an optional exponent (`1e-7`).
        let num = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?";
        Regex::new(&format!(r"translate\(\s*({num})\s*,\s*({num})\s*\)")).expect("valid regex")
    })
}

/// Finds the first `translate(<number>, <number>)` in `attr`.
///
/// The match is unanchored, so `translate(1, 2) rotate(45)` still yields the translate part.
pub fn parse_transform(attr: &str) -> Option<Transform> {
    let cap = translate_regex().captures(attr)?;
    let tx = cap.get(1)?.as_str().parse::<f64>().ok()?;
    let ty = cap.get(2)?.as_str().parse::<f64>().ok()?;
    Some(Transform::Translate { tx, ty })
}

/// Shorthand for `parse_transform(attr).and_then(|t| t.translation())`.
pub fn parse_translation(attr: &str) -> Option<Translation> {
    parse_transform(attr).and_then(|t| t.translation())
}
