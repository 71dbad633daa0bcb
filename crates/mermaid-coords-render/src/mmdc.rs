use crate::{DiagramRenderer, Error, Result};
use std::path::PathBuf;
use std::process::Command;

/// Renders through the `mermaid-cli` executable (`mmdc`), which drives upstream Mermaid in a
/// headless browser.
#[derive(Debug, Clone)]
pub struct MmdcRenderer {
    program: PathBuf,
}

impl Default for MmdcRenderer {
    fn default() -> Self {
        Self {
            program: PathBuf::from("mmdc"),
        }
    }
}

impl MmdcRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

impl DiagramRenderer for MmdcRenderer {
    fn render_svg(&self, source: &str, diagram_id: &str) -> Result<String> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("diagram.mmd");
        let output = dir.path().join("diagram.svg");
        std::fs::write(&input, source)?;

        let program = self.program.display().to_string();
        let out = Command::new(&self.program)
            .arg("--quiet")
            .arg("--input")
            .arg(&input)
            .arg("--output")
            .arg(&output)
            .arg("--svgId")
            .arg(diagram_id)
            .output()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        if !out.status.success() {
            return Err(Error::Mmdc {
                program,
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(std::fs::read_to_string(&output)?)
    }
}
