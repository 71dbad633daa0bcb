pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTML rewrite failed: {message}")]
    Rewrite { message: String },

    #[error("No Mermaid diagram detected in block {diagram_id}")]
    NoDiagram { diagram_id: String },

    #[error("Rendered {rendered} diagrams but the document has {blocks} Mermaid blocks")]
    BlockCountMismatch { blocks: usize, rendered: usize },

    #[error(transparent)]
    Headless(#[from] merman::render::HeadlessError),

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Mmdc {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
