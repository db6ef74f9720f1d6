//! Render-time error types.

/// Error raised while rendering a compiled template tree.
///
/// Rendering is fail-fast: the first error aborts the walk, and output
/// already written to the stream stays written.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// I/O failure on the output stream.
    #[error("I/O error writing rendered output")]
    Io(#[from] std::io::Error),

    /// A variable reference could not be resolved against the context.
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Error raised by an external tag implementation.
    #[error("tag error")]
    Tag(#[source] Box<dyn std::error::Error + Send + Sync>),
}
