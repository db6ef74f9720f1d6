//! The node capability set shared by every piece of template content.

use std::io;

use sprig_render::{RenderContext, RenderError, RenderStream};

use crate::block::Block;
use crate::boundary::Tag;
use crate::env::CompileEnv;
use crate::error::CompileError;

/// A node in the template tree.
///
/// Every node, whether literal text, a tag, a named block, or a container,
/// satisfies the same three-operation contract:
///
/// - [`compile`](Self::compile) turns the raw node into its renderable form,
///   consuming it. Invoked exactly once per tree, recursively, by the
///   enclosing container.
/// - [`render`](Self::render) writes output for the compiled node. It takes
///   `&self` and must not mutate node state, which is what lets one compiled
///   tree be rendered repeatedly, including from several threads at once
///   (hence the `Send + Sync` bound).
/// - [`substitute`](Self::substitute) splices an override block into every
///   descendant block sharing its name, implementing template inheritance.
///
/// The remaining methods are defaulted seams that let the tree algorithms
/// interrogate nodes they do not otherwise know: concrete tag kinds override
/// [`as_tag`](Self::as_tag), named blocks override
/// [`block_name`](Self::block_name), and textual nodes override the trim
/// hooks. Third-party tag kinds implement this trait alongside
/// [`Tag`](crate::Tag) and participate in compilation and trimming without
/// the core knowing their semantics.
pub trait Content: std::fmt::Debug + Send + Sync {
    /// Compile this node, consuming it and returning its renderable form.
    ///
    /// Containers recurse into their children; leaves typically return
    /// themselves unchanged. Structural errors propagate to the top-level
    /// caller without local recovery.
    fn compile(self: Box<Self>, env: &CompileEnv<'_>) -> Result<Box<dyn Content>, CompileError>;

    /// Render this node to `stream` against `context`.
    ///
    /// Fail-fast: an error aborts the remaining walk, but output already
    /// written stays written.
    fn render(
        &self,
        stream: &mut RenderStream<'_>,
        context: &RenderContext,
    ) -> Result<(), RenderError>;

    /// Splice `replacement` into every descendant block sharing its name.
    ///
    /// Returns true iff at least one substitution occurred anywhere in the
    /// subtree. Leaves have no descendants; the default reports no match.
    fn substitute(&mut self, _replacement: &Block) -> bool {
        false
    }

    /// The tag capability of this node, if it is a tag.
    ///
    /// Enclosing containers consult the boundary markers of adjacent tags
    /// when deciding whitespace trims.
    fn as_tag(&self) -> Option<&dyn Tag> {
        None
    }

    /// The block name of this node, if it is a named block.
    fn block_name(&self) -> Option<&str> {
        None
    }

    /// Remove a leading whitespace run.
    ///
    /// Only textual nodes carry whitespace; the default does nothing.
    fn trim_left(&mut self) {}

    /// Remove a trailing whitespace run.
    ///
    /// Only textual nodes carry whitespace; the default does nothing.
    fn trim_right(&mut self) {}

    /// Clone this node into a new boxed trait object.
    ///
    /// Substitution splices a copy of the override content into each
    /// matching block, so nodes must be cloneable behind the trait.
    fn clone_box(&self) -> Box<dyn Content>;
}

impl Clone for Box<dyn Content> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Render a node into an in-memory string.
///
/// Convenience over [`Content::render`] with a buffer-backed
/// [`RenderStream`].
pub fn render_to_string(
    content: &dyn Content,
    context: &RenderContext,
) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    {
        let mut stream = RenderStream::new(&mut buf);
        content.render(&mut stream, context)?;
    }
    // Nodes only ever write string slices, so the buffer is valid UTF-8.
    String::from_utf8(buf)
        .map_err(|e| RenderError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
