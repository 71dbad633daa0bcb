//! Markup loading and shape selection on top of `scraper` (html5ever + CSS selectors).

use crate::options::{ExtractOptions, MalformedPolicy};
use crate::shape::{CircleAttrs, RectAttrs, ShapePrimitive, parse_number};
use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};

/// Rendered HTML/SVG loaded into a queryable tree.
pub struct SvgDocument {
    html: Html,
    blank_is_missing: bool,
}

impl std::fmt::Debug for SvgDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgDocument")
            .field("parse_errors", &self.html.errors.len())
            .finish_non_exhaustive()
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Markup {
        message: format!("invalid selector `{css}`: {e:?}"),
    })
}

fn parent_transform<'a>(el: &ElementRef<'a>) -> Option<&'a str> {
    el.parent()
        .and_then(ElementRef::wrap)
        .and_then(|p| p.value().attr("transform"))
}

fn attr_number(el: &ElementRef<'_>, name: &str, blank_is_missing: bool) -> Option<f64> {
    let raw = el.value().attr(name)?;
    if blank_is_missing && raw.trim().is_empty() {
        return None;
    }
    parse_number(raw)
}

impl SvgDocument {
    /// Parses `markup` as an HTML document. SVG may be inline or the whole input.
    ///
    /// html5ever always recovers from malformed input; with
    /// [`ExtractOptions::strict_markup`] set, any recovered parse error is returned as
    /// [`Error::Markup`] instead. Blank attribute values read as `0` unless
    /// [`MalformedPolicy::Skip`] is active, in which case they count as missing.
    pub fn parse(markup: &str, options: &ExtractOptions) -> Result<Self> {
        let html = Html::parse_document(markup);
        if options.strict_markup && !html.errors.is_empty() {
            return Err(Error::Markup {
                message: html.errors.join("; "),
            });
        }
        if !html.errors.is_empty() {
            tracing::debug!(
                errors = html.errors.len(),
                "markup parsed with recoverable errors"
            );
        }
        Ok(Self {
            html,
            blank_is_missing: options.malformed == MalformedPolicy::Skip,
        })
    }

    pub fn parse_errors(&self) -> impl Iterator<Item = &str> {
        self.html.errors.iter().map(|e| e.as_ref())
    }

    pub fn svg_count(&self) -> Result<usize> {
        let sel = selector("svg")?;
        Ok(self.html.select(&sel).count())
    }

    fn number(&self, el: &ElementRef<'_>, name: &str) -> Option<f64> {
        attr_number(el, name, self.blank_is_missing)
    }

    pub fn circles(&self) -> Result<Vec<ShapePrimitive>> {
        let sel = selector("circle")?;
        Ok(self
            .html
            .select(&sel)
            .map(|el| {
                let attrs = CircleAttrs {
                    rx: self.number(&el, "rx"),
                    ry: self.number(&el, "ry"),
                    cx: self.number(&el, "cx"),
                    cy: self.number(&el, "cy"),
                    r: self.number(&el, "r"),
                };
                ShapePrimitive::circle(attrs, parent_transform(&el))
            })
            .collect())
    }

    pub fn rects(&self) -> Result<Vec<ShapePrimitive>> {
        let sel = selector("rect")?;
        Ok(self
            .html
            .select(&sel)
            .map(|el| {
                let attrs = RectAttrs {
                    x: self.number(&el, "x"),
                    y: self.number(&el, "y"),
                    width: self.number(&el, "width"),
                    height: self.number(&el, "height"),
                };
                ShapePrimitive::rect(attrs, parent_transform(&el))
            })
            .collect())
    }

    /// All circles in document order, followed by all rects in document order.
    pub fn primitives(&self) -> Result<Vec<ShapePrimitive>> {
        let mut out = self.circles()?;
        out.extend(self.rects()?);
        Ok(out)
    }
}
