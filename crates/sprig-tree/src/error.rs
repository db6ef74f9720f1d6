//! Compile-time error types.

/// Error raised while compiling a template tree.
///
/// The tree core itself detects no malformed constructs; these variants exist
/// so that tag implementations and resource loaders have a shared channel to
/// the top-level compile caller. Nothing is retried or recovered locally.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Malformed construct detected by a tag implementation.
    #[error("malformed {construct} in {resource}")]
    Malformed {
        /// Construct kind, e.g. a tag name.
        construct: String,
        /// Label of the resource being compiled.
        resource: String,
    },

    /// Relative resource resolution failed.
    #[error("cannot resolve {path} from {resource}")]
    Resolve {
        /// The relative path that was requested.
        path: String,
        /// Label of the resource it was resolved against.
        resource: String,
    },

    /// The compile environment cannot parse nested template sources.
    #[error("no parser available for {resource}")]
    ParserUnavailable {
        /// Label of the resource a parse was requested for.
        resource: String,
    },

    /// Error raised by an external tag implementation.
    #[error("tag error")]
    Tag(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = CompileError::Malformed {
            construct: "for".to_owned(),
            resource: "index.twig".to_owned(),
        };
        assert_eq!(err.to_string(), "malformed for in index.twig");
    }

    #[test]
    fn test_resolve_message() {
        let err = CompileError::Resolve {
            path: "layout.twig".to_owned(),
            resource: "page.twig".to_owned(),
        };
        assert_eq!(err.to_string(), "cannot resolve layout.twig from page.twig");
    }
}
