//! Core utilities and types for the geng interface generator.
//!
//! This crate provides the naming conventions shared by every stage of
//! the generator and the primitive used to persist generated files.

mod file;
mod naming;

// File operations
pub use file::File;
// Naming conventions
pub use naming::{
    interface_name, is_exported, is_generated_artifact, is_mock_file, is_source_file,
    output_file_name,
};
