//! Ordered, owning container of content nodes.

use sprig_render::{RenderContext, RenderError, RenderStream};

use crate::block::Block;
use crate::boundary::{BoundaryProperty, TagBoundary};
use crate::content::Content;
use crate::env::CompileEnv;
use crate::error::CompileError;

/// Ordered sequence of content nodes with exclusive ownership.
///
/// The composite is where the tree's order-dependent work happens: it decides
/// per-neighbor whitespace trims, recursively compiles each child in place,
/// and drives name-based block substitution through the subtree. Children are
/// owned exclusively (the tree is strict, with no sharing and no cycles), and
/// sibling order is preserved through every operation.
///
/// # Whitespace trimming
///
/// During compilation each child's edges are checked against its immediate
/// neighbors: a preceding tag whose *closing* boundary carries
/// [`BoundaryProperty::TRIM`] on the right elides the child's leading
/// whitespace, and a following tag whose *opening* boundary carries it on
/// the left elides trailing whitespace. At the ends of the sequence the
/// boundaries passed in by the enclosing scope apply instead. A neighbor
/// that is neither absent nor a tag contributes nothing.
#[derive(Clone, Debug, Default)]
pub struct Composite {
    children: Vec<Box<dyn Content>>,
}

impl Composite {
    /// Create an empty composite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child; the composite owns it exclusively thereafter.
    pub fn add<C: Content + 'static>(&mut self, child: C) -> &mut Self {
        self.add_boxed(Box::new(child))
    }

    /// Append an already-boxed child.
    pub fn add_boxed(&mut self, child: Box<dyn Content>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// The children, in order.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn Content>] {
        &self.children
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the composite has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Compile with explicit outer boundaries.
    ///
    /// `outer_begin` and `outer_end` stand in for the missing neighbors of
    /// the first and last child: a child with no predecessor consults
    /// `outer_begin`'s right side for its leading-edge trim, and a child
    /// with no successor consults `outer_end`'s left side for its trailing
    /// edge. Tag kinds that wrap an inner composite pass their own
    /// boundaries here so trim markers reach across the nesting level.
    pub fn compile_with_boundaries(
        mut self: Box<Self>,
        env: &CompileEnv<'_>,
        outer_begin: &TagBoundary,
        outer_end: &TagBoundary,
    ) -> Result<Box<dyn Content>, CompileError> {
        self.apply_trims(outer_begin, outer_end);

        // Rebuild the child list with compiled nodes rather than replacing
        // entries mid-scan; order is preserved exactly.
        let children = std::mem::take(&mut self.children);
        let mut compiled = Vec::with_capacity(children.len());
        for child in children {
            compiled.push(child.compile(env)?);
        }
        self.children = compiled;
        Ok(self)
    }

    /// Apply neighbor-driven whitespace trims to every child.
    ///
    /// Decisions depend only on immediate siblings, so the whole scan runs
    /// against the untouched child list before any child is compiled.
    fn apply_trims(&mut self, outer_begin: &TagBoundary, outer_end: &TagBoundary) {
        let len = self.children.len();
        for i in 0..len {
            let trim_left = match i.checked_sub(1) {
                None => outer_begin.has_right(BoundaryProperty::TRIM),
                Some(prev) => self.children[prev]
                    .as_tag()
                    .is_some_and(|tag| tag.end().has_right(BoundaryProperty::TRIM)),
            };
            let trim_right = if i + 1 == len {
                outer_end.has_left(BoundaryProperty::TRIM)
            } else {
                self.children[i + 1]
                    .as_tag()
                    .is_some_and(|tag| tag.begin().has_left(BoundaryProperty::TRIM))
            };

            if trim_left {
                tracing::trace!(position = i, "trimming leading whitespace");
                self.children[i].trim_left();
            }
            if trim_right {
                tracing::trace!(position = i, "trimming trailing whitespace");
                self.children[i].trim_right();
            }
        }
    }
}

impl Content for Composite {
    /// Compile with neutral outer boundaries.
    fn compile(self: Box<Self>, env: &CompileEnv<'_>) -> Result<Box<dyn Content>, CompileError> {
        self.compile_with_boundaries(env, &TagBoundary::new(), &TagBoundary::new())
    }

    fn render(
        &self,
        stream: &mut RenderStream<'_>,
        context: &RenderContext,
    ) -> Result<(), RenderError> {
        for child in &self.children {
            child.render(stream, context)?;
        }
        Ok(())
    }

    fn substitute(&mut self, replacement: &Block) -> bool {
        let mut replaced = false;
        for child in &mut self.children {
            if child.block_name() == Some(replacement.name()) {
                *child = replacement.content().clone_box();
                replaced = true;
            } else {
                // Deliberately not short-circuited: every matching block in
                // the subtree is replaced in a single pass.
                let hit = child.substitute(replacement);
                replaced = replaced || hit;
            }
        }
        if replaced {
            tracing::trace!(block = replacement.name(), "spliced override block");
        }
        replaced
    }

    fn clone_box(&self) -> Box<dyn Content> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sprig_render::RenderContext;

    use super::*;
    use crate::boundary::Tag;
    use crate::content::render_to_string;
    use crate::env::{NamedResource, NullParser};
    use crate::text::Text;

    /// Tag stub carrying only boundary markers; renders nothing.
    #[derive(Clone, Debug, Default)]
    struct MarkerTag {
        begin: TagBoundary,
        end: TagBoundary,
    }

    impl MarkerTag {
        fn trim_after() -> Self {
            let mut tag = Self::default();
            tag.end.add_right(BoundaryProperty::TRIM);
            tag
        }

        fn trim_before() -> Self {
            let mut tag = Self::default();
            tag.begin.add_left(BoundaryProperty::TRIM);
            tag
        }
    }

    impl Content for MarkerTag {
        fn compile(
            self: Box<Self>,
            _env: &CompileEnv<'_>,
        ) -> Result<Box<dyn Content>, CompileError> {
            Ok(self)
        }

        fn render(
            &self,
            _stream: &mut RenderStream<'_>,
            _context: &RenderContext,
        ) -> Result<(), RenderError> {
            Ok(())
        }

        fn as_tag(&self) -> Option<&dyn Tag> {
            Some(self)
        }

        fn clone_box(&self) -> Box<dyn Content> {
            Box::new(self.clone())
        }
    }

    impl Tag for MarkerTag {
        fn begin(&self) -> &TagBoundary {
            &self.begin
        }

        fn end(&self) -> &TagBoundary {
            &self.end
        }
    }

    /// Node whose compile step fails with a structural error.
    #[derive(Clone, Debug)]
    struct BrokenTag;

    impl Content for BrokenTag {
        fn compile(
            self: Box<Self>,
            env: &CompileEnv<'_>,
        ) -> Result<Box<dyn Content>, CompileError> {
            Err(CompileError::Malformed {
                construct: "broken".to_owned(),
                resource: env.resource().label().to_owned(),
            })
        }

        fn render(
            &self,
            _stream: &mut RenderStream<'_>,
            _context: &RenderContext,
        ) -> Result<(), RenderError> {
            Ok(())
        }

        fn clone_box(&self) -> Box<dyn Content> {
            Box::new(self.clone())
        }
    }

    /// Node whose render step fails.
    #[derive(Clone, Debug)]
    struct BrokenRender;

    impl Content for BrokenRender {
        fn compile(
            self: Box<Self>,
            _env: &CompileEnv<'_>,
        ) -> Result<Box<dyn Content>, CompileError> {
            Ok(self)
        }

        fn render(
            &self,
            _stream: &mut RenderStream<'_>,
            _context: &RenderContext,
        ) -> Result<(), RenderError> {
            Err(RenderError::UnresolvedReference("user.name".to_owned()))
        }

        fn clone_box(&self) -> Box<dyn Content> {
            Box::new(self.clone())
        }
    }

    fn compile_neutral(composite: Composite) -> Box<dyn Content> {
        let resource = NamedResource::new("test.twig");
        let env = CompileEnv::new(&NullParser, &resource);
        Box::new(composite).compile(&env).unwrap()
    }

    fn render(content: &dyn Content) -> String {
        render_to_string(content, &RenderContext::new()).unwrap()
    }

    #[test]
    fn test_render_concatenates_children_in_order() {
        let mut composite = Composite::new();
        composite.add(Text::new("a"));
        composite.add(Text::new("b"));
        composite.add(Text::new("c"));
        assert_eq!(render(&composite), "abc");
    }

    #[test]
    fn test_render_empty_composite_is_empty() {
        assert_eq!(render(&Composite::new()), "");
    }

    #[test]
    fn test_trim_after_tag_closing_boundary() {
        // [Text("  "), Tag(end.right=Trim), Text("  x")]: the second text
        // loses its leading run; the first text has no tag successor or
        // predecessor asking for anything and is untouched.
        let mut composite = Composite::new();
        composite.add(Text::new("  "));
        composite.add(MarkerTag::trim_after());
        composite.add(Text::new("  x"));

        let compiled = compile_neutral(composite);
        assert_eq!(render(&compiled), "  x");
    }

    #[test]
    fn test_trim_before_tag_opening_boundary() {
        let mut composite = Composite::new();
        composite.add(Text::new("x  "));
        composite.add(MarkerTag::trim_before());
        composite.add(Text::new("  "));

        let compiled = compile_neutral(composite);
        assert_eq!(render(&compiled), "x  ");
    }

    #[test]
    fn test_outer_begin_trims_first_child() {
        let mut outer_begin = TagBoundary::new();
        outer_begin.add_right(BoundaryProperty::TRIM);

        let mut composite = Composite::new();
        composite.add(Text::new("  first"));
        composite.add(Text::new("  second  "));

        let resource = NamedResource::new("test.twig");
        let env = CompileEnv::new(&NullParser, &resource);
        let compiled = Box::new(composite)
            .compile_with_boundaries(&env, &outer_begin, &TagBoundary::new())
            .unwrap();
        assert_eq!(render(compiled.as_ref()), "first  second  ");
    }

    #[test]
    fn test_outer_end_trims_last_child() {
        let mut outer_end = TagBoundary::new();
        outer_end.add_left(BoundaryProperty::TRIM);

        let mut composite = Composite::new();
        composite.add(Text::new("  first"));
        composite.add(Text::new("second  "));

        let resource = NamedResource::new("test.twig");
        let env = CompileEnv::new(&NullParser, &resource);
        let compiled = Box::new(composite)
            .compile_with_boundaries(&env, &TagBoundary::new(), &outer_end)
            .unwrap();
        assert_eq!(render(compiled.as_ref()), "  firstsecond");
    }

    #[test]
    fn test_neutral_compile_trims_nothing() {
        let mut composite = Composite::new();
        composite.add(Text::new("  a  "));
        composite.add(Text::new("  b  "));

        let compiled = compile_neutral(composite);
        assert_eq!(render(&compiled), "  a    b  ");
    }

    #[test]
    fn test_non_tag_neighbor_contributes_no_trim() {
        // An interior text node flanked by plain text neighbors keeps its
        // edges even when the outer boundaries request trims on both sides:
        // outer boundaries only stand in for absent neighbors.
        let mut outer_begin = TagBoundary::new();
        outer_begin.add_right(BoundaryProperty::TRIM);
        let mut outer_end = TagBoundary::new();
        outer_end.add_left(BoundaryProperty::TRIM);

        let mut composite = Composite::new();
        composite.add(Text::new("a"));
        composite.add(Text::new("  middle  "));
        composite.add(Text::new("b"));

        let resource = NamedResource::new("test.twig");
        let env = CompileEnv::new(&NullParser, &resource);
        let compiled = Box::new(composite)
            .compile_with_boundaries(&env, &outer_begin, &outer_end)
            .unwrap();
        assert_eq!(render(compiled.as_ref()), "a  middle  b");
    }

    #[test]
    fn test_compile_error_propagates() {
        let resource = NamedResource::new("page.twig");
        let env = CompileEnv::new(&NullParser, &resource);

        let mut composite = Composite::new();
        composite.add(Text::new("before"));
        composite.add(BrokenTag);

        let err = Box::new(composite).compile(&env).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Malformed { construct, resource }
                if construct == "broken" && resource == "page.twig"
        ));
    }

    #[test]
    fn test_render_fails_fast_keeping_earlier_output() {
        let mut composite = Composite::new();
        composite.add(Text::new("written"));
        composite.add(BrokenRender);
        composite.add(Text::new("never reached"));

        let mut buf = Vec::new();
        {
            let mut stream = RenderStream::new(&mut buf);
            let err = composite
                .render(&mut stream, &RenderContext::new())
                .unwrap_err();
            assert!(matches!(err, RenderError::UnresolvedReference(_)));
        }
        assert_eq!(buf, b"written");
    }

    #[test]
    fn test_substitute_replaces_matching_block() {
        let mut composite = Composite::new();
        composite.add(Text::new("Hello "));
        composite.add(Block::new("name", Text::new("World")));

        let replaced = composite.substitute(&Block::new("name", Text::new("Universe")));
        assert!(replaced);
        assert_eq!(render(&composite), "Hello Universe");
    }

    #[test]
    fn test_substitute_unknown_name_leaves_children_untouched() {
        let mut composite = Composite::new();
        composite.add(Text::new("Hello "));
        composite.add(Block::new("name", Text::new("World")));

        let before: Vec<*const ()> = composite
            .children()
            .iter()
            .map(|c| std::ptr::from_ref::<dyn Content>(c.as_ref()).cast::<()>())
            .collect();

        let replaced = composite.substitute(&Block::new("missing", Text::new("x")));
        assert!(!replaced);

        let after: Vec<*const ()> = composite
            .children()
            .iter()
            .map(|c| std::ptr::from_ref::<dyn Content>(c.as_ref()).cast::<()>())
            .collect();
        assert_eq!(before, after);
        assert_eq!(render(&composite), "Hello World");
    }

    #[test]
    fn test_substitute_replaces_every_match_after_first_hit() {
        // Two same-named blocks at different depths: both are replaced in a
        // single pass, including the one visited after the first hit.
        let mut nested = Composite::new();
        nested.add(Block::new("item", Text::new("second")));

        let mut composite = Composite::new();
        composite.add(Block::new("item", Text::new("first")));
        composite.add(Text::new("|"));
        composite.add(nested);

        let replaced = composite.substitute(&Block::new("item", Text::new("*")));
        assert!(replaced);
        assert_eq!(render(&composite), "*|*");
    }

    #[test]
    fn test_substitute_recurses_into_non_matching_block() {
        let mut inner = Composite::new();
        inner.add(Block::new("leaf", Text::new("default")));

        let mut composite = Composite::new();
        composite.add(Block::new("branch", inner));

        let replaced = composite.substitute(&Block::new("leaf", Text::new("overridden")));
        assert!(replaced);
        assert_eq!(render(&composite), "overridden");
    }

    #[test]
    fn test_substitute_splices_copies_into_each_match() {
        // The override content is copied per splice; trimming one copy later
        // must not affect the other.
        let mut composite = Composite::new();
        composite.add(Block::new("item", Text::new("a")));
        composite.add(Block::new("item", Text::new("b")));

        assert!(composite.substitute(&Block::new("item", Text::new("  x"))));
        composite.children[0].trim_left();
        assert_eq!(render(&composite), "x  x");
    }
}
