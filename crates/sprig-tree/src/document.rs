//! Document wrappers separating raw trees from renderable ones.
//!
//! The parser hands back a raw document ([`RootDocument`] or, for templates
//! that declare inheritance, [`ExtendsDocument`]). Raw documents never render
//! output; compiling one yields a [`CompiledDocument`], the only wrapper whose
//! `render` writes anything. Keeping the two forms as distinct types means a
//! tree that skipped compilation cannot be rendered by accident.

use sprig_render::{RenderContext, RenderError, RenderStream};

use crate::block::Block;
use crate::content::Content;
use crate::env::CompileEnv;
use crate::error::CompileError;

/// Raw, uncompiled top-level document produced by the parser.
#[derive(Clone, Debug)]
pub struct RootDocument {
    content: Box<dyn Content>,
}

impl RootDocument {
    /// Wrap the top-level content of a parsed template.
    #[must_use]
    pub fn new(content: impl Content + 'static) -> Self {
        Self::from_boxed(Box::new(content))
    }

    /// Wrap already-boxed top-level content.
    #[must_use]
    pub fn from_boxed(content: Box<dyn Content>) -> Self {
        Self { content }
    }

    /// The wrapped raw tree.
    #[must_use]
    pub fn content(&self) -> &dyn Content {
        self.content.as_ref()
    }

    /// Compile the wrapped tree into its renderable form.
    pub fn compile(self, env: &CompileEnv<'_>) -> Result<CompiledDocument, CompileError> {
        tracing::debug!(resource = env.resource().label(), "compiling template");
        Ok(CompiledDocument {
            content: self.content.compile(env)?,
        })
    }

    /// Splice an override block into every matching block of the tree.
    ///
    /// Inheritance resolution may run any number of such passes before
    /// compilation.
    pub fn substitute(&mut self, replacement: &Block) -> bool {
        self.content.substitute(replacement)
    }
}

impl Content for RootDocument {
    fn compile(self: Box<Self>, env: &CompileEnv<'_>) -> Result<Box<dyn Content>, CompileError> {
        Ok(Box::new((*self).compile(env)?))
    }

    /// Raw documents produce no output.
    fn render(
        &self,
        _stream: &mut RenderStream<'_>,
        _context: &RenderContext,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn substitute(&mut self, replacement: &Block) -> bool {
        RootDocument::substitute(self, replacement)
    }

    fn clone_box(&self) -> Box<dyn Content> {
        Box::new(self.clone())
    }
}

/// Raw document that declares extension of a parent template.
///
/// Carries the parent's relative path and the override blocks declared in the
/// child's body. Compiling resolves and parses the parent through the
/// [`CompileEnv`] collaborators, applies every override, then compiles the
/// parent in its own resource environment.
#[derive(Clone, Debug)]
pub struct ExtendsDocument {
    parent: String,
    blocks: Vec<Block>,
}

impl ExtendsDocument {
    /// Create an extends-document referring to `parent`.
    #[must_use]
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            blocks: Vec::new(),
        }
    }

    /// Add an override block declared in the child template.
    pub fn add_block(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// The parent template's relative path.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// The override blocks, in declaration order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Resolve the parent template and compile it with the overrides applied.
    pub fn compile(self, env: &CompileEnv<'_>) -> Result<CompiledDocument, CompileError> {
        let resource = env.resource().resolve(&self.parent)?;
        let mut document = env.parser().parse(resource.as_ref())?;
        for block in &self.blocks {
            if !document.substitute(block) {
                tracing::warn!(
                    block = block.name(),
                    parent = %self.parent,
                    "override matched no block in parent template"
                );
            }
        }
        let parent_env = CompileEnv::new(env.parser(), resource.as_ref());
        document.compile(&parent_env)
    }
}

impl Content for ExtendsDocument {
    fn compile(self: Box<Self>, env: &CompileEnv<'_>) -> Result<Box<dyn Content>, CompileError> {
        Ok(Box::new((*self).compile(env)?))
    }

    /// Raw documents produce no output.
    fn render(
        &self,
        _stream: &mut RenderStream<'_>,
        _context: &RenderContext,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn substitute(&mut self, replacement: &Block) -> bool {
        // Extension chains nest: an override arriving from further down the
        // chain rewrites the pending override bodies declared here.
        let mut replaced = false;
        for block in &mut self.blocks {
            let hit = Content::substitute(block, replacement);
            replaced = replaced || hit;
        }
        replaced
    }

    fn clone_box(&self) -> Box<dyn Content> {
        Box::new(self.clone())
    }
}

/// Compiled, renderable document.
///
/// Produced only by compiling a raw document; there is no public constructor.
#[derive(Clone, Debug)]
pub struct CompiledDocument {
    content: Box<dyn Content>,
}

impl CompiledDocument {
    /// The compiled tree.
    #[must_use]
    pub fn content(&self) -> &dyn Content {
        self.content.as_ref()
    }

    /// Splice an override block into every matching block of the compiled
    /// tree.
    ///
    /// Some inheritance-resolution policies substitute after compilation;
    /// both orders are supported.
    pub fn substitute(&mut self, replacement: &Block) -> bool {
        self.content.substitute(replacement)
    }
}

impl Content for CompiledDocument {
    /// Already compiled; returns itself.
    fn compile(self: Box<Self>, _env: &CompileEnv<'_>) -> Result<Box<dyn Content>, CompileError> {
        Ok(self)
    }

    fn render(
        &self,
        stream: &mut RenderStream<'_>,
        context: &RenderContext,
    ) -> Result<(), RenderError> {
        self.content.render(stream, context)
    }

    fn substitute(&mut self, replacement: &Block) -> bool {
        CompiledDocument::substitute(self, replacement)
    }

    fn clone_box(&self) -> Box<dyn Content> {
        Box::new(self.clone())
    }
}
