//! Core data types for the revar resolution engine.
//!
//! This crate defines the types that represent one versioned package
//! manifest: version tokens and ranges, requirements, variant constraint
//! lists, environment operations, and the request context a resolution runs
//! against.
//!
//! This crate is intentionally free of async code and network I/O; the only
//! input surface is the declarative TOML manifest form.

pub mod constraint;
pub mod context;
pub mod manifest;
pub mod range;
pub mod version;
