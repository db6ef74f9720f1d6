//! Render-side plumbing for sprig templates.
//!
//! This crate holds the types every content node sees at render time:
//!
//! - [`RenderStream`]: an append-only character sink wrapping any
//!   [`std::io::Write`] implementation
//! - [`RenderContext`]: the variable bindings visible to tag implementations
//! - [`RenderError`]: render-time failures
//!
//! The tree core in `sprig-tree` treats the context as opaque; only concrete
//! tag implementations look variables up.
//!
//! # Example
//!
//! ```
//! use sprig_render::{RenderContext, RenderStream};
//!
//! let context = RenderContext::new().with_var("user", "ada");
//! assert_eq!(context.get("user").and_then(|v| v.as_str()), Some("ada"));
//!
//! let mut buf = Vec::new();
//! {
//!     let mut stream = RenderStream::new(&mut buf);
//!     stream.write_str("Hello")?;
//! }
//! assert_eq!(buf, b"Hello");
//! # Ok::<(), sprig_render::RenderError>(())
//! ```

mod context;
mod error;
mod stream;

pub use context::RenderContext;
pub use error::RenderError;
pub use stream::RenderStream;
