//! Named, substitutable content subtrees.

use sprig_render::{RenderContext, RenderError, RenderStream};

use crate::content::Content;
use crate::env::CompileEnv;
use crate::error::CompileError;

/// A content subtree identified by a name.
///
/// Blocks are the mechanism behind template inheritance: a parent template
/// declares `Block("body", ...)` with default content, and a child template
/// supplies an override block of the same name that gets spliced in by
/// [`Content::substitute`]. Names are unique per template by convention only;
/// when several blocks share a name, one substitution pass replaces all of
/// them.
///
/// # Example
///
/// ```
/// use sprig_render::RenderContext;
/// use sprig_tree::{Block, Composite, Content as _, Text, render_to_string};
///
/// let mut tree = Composite::new();
/// tree.add(Text::new("Hello "));
/// tree.add(Block::new("name", Text::new("World")));
///
/// tree.substitute(&Block::new("name", Text::new("Universe")));
///
/// let out = render_to_string(&tree, &RenderContext::new())?;
/// assert_eq!(out, "Hello Universe");
/// # Ok::<(), sprig_render::RenderError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Block {
    name: String,
    content: Box<dyn Content>,
}

impl Block {
    /// Create a named block over the given inner content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Content + 'static) -> Self {
        Self::from_boxed(name, Box::new(content))
    }

    /// Create a named block over already-boxed content.
    #[must_use]
    pub fn from_boxed(name: impl Into<String>, content: Box<dyn Content>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Block name; substitution matches on exact equality.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The inner content subtree.
    #[must_use]
    pub fn content(&self) -> &dyn Content {
        self.content.as_ref()
    }
}

impl Content for Block {
    fn compile(self: Box<Self>, env: &CompileEnv<'_>) -> Result<Box<dyn Content>, CompileError> {
        let Self { name, content } = *self;
        let content = content.compile(env)?;
        Ok(Box::new(Self { name, content }))
    }

    fn render(
        &self,
        stream: &mut RenderStream<'_>,
        context: &RenderContext,
    ) -> Result<(), RenderError> {
        self.content.render(stream, context)
    }

    fn substitute(&mut self, replacement: &Block) -> bool {
        // Replacing this block outright is the enclosing container's job;
        // here only the inner subtree is scanned.
        self.content.substitute(replacement)
    }

    fn block_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn clone_box(&self) -> Box<dyn Content> {
        Box::new(self.clone())
    }
}
