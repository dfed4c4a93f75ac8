// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Go declaration extraction.
//!
//! Parses one Go source file with tree-sitter and extracts its package
//! name, its imports and its exported pointer-receiver methods grouped by
//! receiver type. Anything outside the supported subset of shapes is
//! reported as an error rather than skipped.

mod error;
mod extract;
mod parser;
mod shape;
mod unit;

pub use error::{Error, Result, ShapeRole, SourceContext};
pub use parser::GoParser;
pub use unit::{ImportDecl, MethodSignature, SourceUnit};
