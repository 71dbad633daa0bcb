#![forbid(unsafe_code)]

//! Rendering collaborator for `mermaid-coords`.
//!
//! Finds Mermaid blocks (`pre.mermaid`, `div.mermaid`, `code.language-mermaid`) in an HTML
//! document and replaces each one in place with its rendered inline `<svg>`. Diagram ids are
//! `mermaid-0`, `mermaid-1`, ... in document order.
//!
//! Backends:
//! - [`HeadlessRenderer`]: pure-Rust rendering through `merman`
//! - [`MmdcRenderer`]: the upstream `mermaid-cli` executable

pub mod error;
pub mod headless;
pub mod html;
pub mod mmdc;

pub use error::{Error, Result};
pub use headless::HeadlessRenderer;
pub use html::{MERMAID_BLOCK_SELECTORS, collect_mermaid_blocks, inline_svgs};
pub use mmdc::MmdcRenderer;

/// Turns one Mermaid source into an SVG string.
pub trait DiagramRenderer {
    fn render_svg(&self, source: &str, diagram_id: &str) -> Result<String>;
}

impl<F> DiagramRenderer for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn render_svg(&self, source: &str, diagram_id: &str) -> Result<String> {
        self(source, diagram_id)
    }
}

pub fn diagram_id(index: usize) -> String {
    format!("mermaid-{index}")
}

/// Renders every Mermaid block of `html` and returns the rewritten document.
///
/// A document without Mermaid blocks is returned unchanged.
pub fn render_document_sync(html: &str, renderer: &dyn DiagramRenderer) -> Result<String> {
    let blocks = collect_mermaid_blocks(html)?;
    if blocks.is_empty() {
        tracing::info!("no mermaid blocks found; passing markup through");
        return Ok(html.to_string());
    }

    let mut svgs = Vec::with_capacity(blocks.len());
    for (idx, source) in blocks.iter().enumerate() {
        let id = diagram_id(idx);
        let svg = renderer.render_svg(source, &id)?;
        tracing::debug!(diagram_id = %id, bytes = svg.len(), "rendered mermaid block");
        svgs.push(svg);
    }
    tracing::info!(diagrams = svgs.len(), "rendered mermaid blocks");

    inline_svgs(html, &svgs)
}

/// Async wrapper around [`render_document_sync`].
///
/// Rendering is CPU-bound (or a blocking subprocess for `mmdc`); this exists so callers can
/// treat the render step as the pipeline's single await point.
pub async fn render_document(html: &str, renderer: &dyn DiagramRenderer) -> Result<String> {
    render_document_sync(html, renderer)
}
