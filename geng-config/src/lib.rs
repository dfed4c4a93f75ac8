// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for the geng interface generator.
//!
//! A `geng.toml` file at the root of the walked tree is optional. It only
//! carries exclusion globs today:
//!
//! ```toml
//! [interface]
//! exclude = ["vendor/**", "**/testdata/**"]
//! ```

mod config;
mod error;
mod exclude;

pub use config::{CONFIG_FILE_NAME, Config, GengToml, InterfaceConfig};
pub use error::{Error, Result, SourceContext};
pub use exclude::{ExcludeSet, Predicate};
