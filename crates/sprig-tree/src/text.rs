//! Literal character data.

use sprig_render::{RenderContext, RenderError, RenderStream};

use crate::content::Content;
use crate::env::CompileEnv;
use crate::error::CompileError;

/// Leaf node holding literal template text.
///
/// The buffer is mutable for exactly one reason: the enclosing container may
/// trim a leading or trailing whitespace run at compile time when an adjacent
/// tag requests it. Rendering writes the buffer verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    text: String,
}

impl Text {
    /// Create a text node from the given character data.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Append further character data.
    ///
    /// Parsers accumulate adjacent literal runs into a single node.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// The current character data.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Content for Text {
    fn compile(self: Box<Self>, _env: &CompileEnv<'_>) -> Result<Box<dyn Content>, CompileError> {
        // Trimming happens in the parent container before this call.
        Ok(self)
    }

    fn render(
        &self,
        stream: &mut RenderStream<'_>,
        _context: &RenderContext,
    ) -> Result<(), RenderError> {
        stream.write_str(&self.text)
    }

    fn trim_left(&mut self) {
        let cut = self.text.len() - self.text.trim_start().len();
        if cut > 0 {
            self.text.replace_range(..cut, "");
        }
    }

    fn trim_right(&mut self) {
        self.text.truncate(self.text.trim_end().len());
    }

    fn clone_box(&self) -> Box<dyn Content> {
        Box::new(self.clone())
    }
}
