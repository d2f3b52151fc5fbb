//! CLI command implementations.

pub mod common;
pub mod list;
pub mod render;
pub mod vars;
pub mod version;
