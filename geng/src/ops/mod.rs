//! Core operations.
//!
//! This module contains the business logic for geng commands,
//! separated from CLI argument parsing and output rendering.

pub mod interface;

pub use interface::interface;
