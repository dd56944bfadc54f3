//! Shared utilities for the revar resolution engine.

pub mod errors;
