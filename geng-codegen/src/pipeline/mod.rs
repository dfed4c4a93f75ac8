//! Analysis pipeline.
//!
//! The [`Pipeline`] walks the whole tree before anything is generated:
//!
//! - [`WalkPhase`](phases::WalkPhase) filters and extracts every file into a
//!   [`UnitIndex`](crate::UnitIndex)
//! - [`MergePhase`](phases::MergePhase) turns the index into one
//!   [`PackageArtifact`](crate::PackageArtifact) per directory and package
//!
//! # Example
//!
//! ```no_run
//! use geng_codegen::{UnitFilter, pipeline::Pipeline};
//!
//! let ctx = Pipeline::new().run(".", UnitFilter::new())?;
//! for artifact in &ctx.artifacts {
//!     println!("{}", artifact.output_path().display());
//! }
//! # Ok::<(), Box<geng_codegen::Error>>(())
//! ```

mod context;
mod phase;
pub mod phases;
mod runner;

pub use context::{GenerationContext, WalkStats};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
