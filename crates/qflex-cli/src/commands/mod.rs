//! CLI command implementations.

pub mod common;
pub mod grid;
pub mod parse;
pub mod schmidt;
pub mod version;
