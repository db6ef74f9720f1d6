//! Template document tree with whitespace control and block inheritance.
//!
//! A template body is an ordered tree of [`Content`] nodes built by a
//! separate parsing stage. This crate turns that raw tree into a renderable
//! one and renders it:
//!
//! 1. **Compile** resolves whitespace-trimming markers on tag boundaries
//!    ([`TagBoundary`], [`BoundaryProperty::TRIM`]) against each text node's
//!    immediate siblings, then recursively compiles every child.
//! 2. **Substitute** splices override [`Block`]s into every same-named block
//!    anywhere in the tree, the mechanism behind template inheritance.
//!    Passes may run before or after compilation, per the caller's
//!    resolution policy.
//! 3. **Render** walks the compiled tree against a
//!    [`RenderContext`](sprig_render::RenderContext), writing to a
//!    [`RenderStream`](sprig_render::RenderStream). Rendering never mutates
//!    the tree, so one compiled template serves many renders.
//!
//! # Architecture
//!
//! Nodes are trait objects: the core ships [`Text`], [`Block`],
//! [`Composite`] and the document wrappers, while concrete tag kinds
//! (conditionals, loops, includes) live outside and plug in by implementing
//! [`Content`] and [`Tag`]. The core consumes nothing of a tag beyond its
//! two boundary markers. Parsing, expression evaluation, and template
//! loading are likewise external, reached only through the
//! [`TemplateParser`]/[`TemplateResource`] seams of [`CompileEnv`].
//!
//! Raw and compiled trees are distinct types: [`RootDocument`] (and
//! [`ExtendsDocument`]) render nothing, and only the [`CompiledDocument`]
//! produced by `compile` writes output.
//!
//! # Example
//!
//! ```
//! use sprig_render::RenderContext;
//! use sprig_tree::{
//!     Block, CompileEnv, Composite, NamedResource, NullParser, RootDocument, Text,
//!     render_to_string,
//! };
//!
//! let mut body = Composite::new();
//! body.add(Text::new("Hello "));
//! body.add(Block::new("name", Text::new("World")));
//!
//! // Inheritance resolution: a derived template overrides the "name" block.
//! let mut document = RootDocument::new(body);
//! document.substitute(&Block::new("name", Text::new("Universe")));
//!
//! let resource = NamedResource::new("greeting.twig");
//! let env = CompileEnv::new(&NullParser, &resource);
//! let compiled = document.compile(&env)?;
//!
//! let output = render_to_string(compiled.content(), &RenderContext::new())?;
//! assert_eq!(output, "Hello Universe");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod block;
mod boundary;
mod composite;
mod content;
mod document;
mod env;
mod error;
mod text;

pub use block::Block;
pub use boundary::{BoundaryProperty, Tag, TagBoundary};
pub use composite::Composite;
pub use content::{Content, render_to_string};
pub use document::{CompiledDocument, ExtendsDocument, RootDocument};
pub use env::{CompileEnv, NamedResource, NullParser, TemplateParser, TemplateResource};
pub use error::CompileError;
