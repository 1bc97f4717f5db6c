//! Clang integration: AST dump invocation and typed node deserialization.

pub mod invoke;
pub mod nodes;

pub use nodes::{Clang, Node};
