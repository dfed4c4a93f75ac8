// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Interface generation for Go packages.
//!
//! Walks a directory tree, extracts the exported pointer-receiver methods
//! of every accepted Go file, aggregates them per directory and package,
//! and writes one `<package>_interface.go` file per pair.
//!
//! # Module Organization
//!
//! - [`filter`] - Which files take part in analysis
//! - [`aggregate`] - Per directory/package accumulation and merging
//! - [`render`] - Interface template and its helper transforms
//! - [`writer`] - Persisting rendered artifacts
//! - [`pipeline`] - Walk and merge phases
//! - [`generator`] - Entry points tying everything together

pub mod aggregate;
pub mod builder;
mod error;
pub mod filter;
pub mod generation;
pub mod generator;
pub mod pipeline;
pub mod render;
pub mod writer;

pub use aggregate::{PackageArtifact, UnitIndex};
pub use error::{Error, ErrorKind, Result};
pub use filter::{Exclusion, Rejection, UnitFilter};
pub use generator::{Generator, PreviewFile, make_gen_files};
pub use render::{GoInterfaceTemplate, InterfaceDefinition, InterfaceTemplate, Renderer};
pub use writer::WrittenFile;
