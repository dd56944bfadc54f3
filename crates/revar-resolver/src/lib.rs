//! Variant resolution engine: evaluates a manifest's variants against a
//! request context, selects the first fully satisfied one, and composes the
//! winning variant's environment.
//!
//! Resolution is a pure computation over immutable inputs; nothing here
//! touches the process environment, the filesystem, or the network.

pub mod compose;
pub mod diagnostics;
pub mod matcher;
pub mod resolver;
pub mod session;
