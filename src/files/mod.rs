//! Static file serving.
//!
//! This module decides what a request gets back from the served root: which
//! file it names, whether the client accepts its type, and whether a form
//! body gets rendered into it.

pub mod resolver;
pub mod root;
pub mod template;

pub use resolver::{ResolveError, Resolver};
pub use root::{FileSource, ServedRoot};
