use crate::{DiagramRenderer, Error, Result};

/// Pure-Rust Mermaid rendering through `merman`'s headless pipeline.
#[derive(Clone, Default)]
pub struct HeadlessRenderer {
    inner: merman::render::HeadlessRenderer,
}

impl std::fmt::Debug for HeadlessRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessRenderer").finish_non_exhaustive()
    }
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagramRenderer for HeadlessRenderer {
    fn render_svg(&self, source: &str, diagram_id: &str) -> Result<String> {
        self.inner
            .render_svg_sync_with_diagram_id(source, diagram_id)?
            .ok_or_else(|| Error::NoDiagram {
                diagram_id: diagram_id.to_string(),
            })
    }
}
