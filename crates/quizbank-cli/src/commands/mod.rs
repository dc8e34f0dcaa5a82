//! CLI command implementations.

pub mod prune;
