//! Collaborator handles threaded through compilation.
//!
//! The tree core never inspects the parser or the resource it is compiled
//! from; it passes both down through every child compile call. They exist for
//! tag implementations that pull in further template sources (includes and
//! extends) and for diagnostics.

use std::fmt;

use crate::document::RootDocument;
use crate::error::CompileError;

/// Source a template was loaded from.
///
/// Implementations are supplied by the template-loading layer. The core only
/// reads the [`label`](Self::label) for diagnostics; tag kinds that reference
/// sibling templates call [`resolve`](Self::resolve).
pub trait TemplateResource: fmt::Debug + Send + Sync {
    /// Identifier used in diagnostics: a path, a URL, or a synthetic name.
    fn label(&self) -> &str;

    /// Resolve a path relative to this resource.
    ///
    /// The default refuses; resources backed by a real loader override it.
    fn resolve(&self, path: &str) -> Result<Box<dyn TemplateResource>, CompileError> {
        Err(CompileError::Resolve {
            path: path.to_owned(),
            resource: self.label().to_owned(),
        })
    }
}

/// Parser for nested template sources.
///
/// Invoked by tag kinds (and by [`ExtendsDocument`](crate::ExtendsDocument))
/// when compilation reaches a reference to another template.
pub trait TemplateParser: fmt::Debug + Send + Sync {
    /// Parse a resource into a raw document tree.
    fn parse(&self, resource: &dyn TemplateResource) -> Result<RootDocument, CompileError>;
}

/// Handles handed down through every compile call.
///
/// Cheap to copy; borrows its collaborators for the duration of one compile
/// pass.
#[derive(Clone, Copy, Debug)]
pub struct CompileEnv<'a> {
    parser: &'a dyn TemplateParser,
    resource: &'a dyn TemplateResource,
}

impl<'a> CompileEnv<'a> {
    /// Create an environment over the given collaborators.
    #[must_use]
    pub fn new(parser: &'a dyn TemplateParser, resource: &'a dyn TemplateResource) -> Self {
        Self { parser, resource }
    }

    /// The parser for nested template sources.
    #[must_use]
    pub fn parser(&self) -> &'a dyn TemplateParser {
        self.parser
    }

    /// The resource the current template was loaded from.
    #[must_use]
    pub fn resource(&self) -> &'a dyn TemplateResource {
        self.resource
    }
}

/// Resource with nothing behind it but a name.
///
/// Sufficient for templates that reference no sibling templates; resolution
/// requests fail with [`CompileError::Resolve`].
#[derive(Clone, Debug)]
pub struct NamedResource {
    name: String,
}

impl NamedResource {
    /// Create a resource with the given diagnostic name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TemplateResource for NamedResource {
    fn label(&self) -> &str {
        &self.name
    }
}

/// Parser stub for trees that contain no nested-template tags.
///
/// Any parse request fails with [`CompileError::ParserUnavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NullParser;

impl TemplateParser for NullParser {
    fn parse(&self, resource: &dyn TemplateResource) -> Result<RootDocument, CompileError> {
        Err(CompileError::ParserUnavailable {
            resource: resource.label().to_owned(),
        })
    }
}
