//! Variable bindings for template rendering.

use std::collections::HashMap;

use serde_json::Value;

/// Variable bindings visible to tag implementations during rendering.
///
/// The tree core never looks variables up itself; it threads the context
/// through to concrete tag kinds (conditionals, loops, output expressions),
/// which resolve references against it. One compiled template may be rendered
/// against many independent contexts.
///
/// # Example
///
/// ```
/// use sprig_render::RenderContext;
///
/// let mut context = RenderContext::new().with_var("title", "Release notes");
/// context.set("count", 3);
///
/// assert!(context.contains("title"));
/// assert_eq!(context.get("count").and_then(|v| v.as_i64()), Some(3));
/// assert!(context.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderContext {
    vars: HashMap<String, Value>,
}

impl RenderContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable, consuming and returning the context.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Bind a variable, replacing any previous binding of the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Look up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Whether a variable is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
