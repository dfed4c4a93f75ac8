//! Built-in pipeline phases.
//!
//! - [`WalkPhase`] - filters and extracts every file under the root
//! - [`MergePhase`] - merges extracted units into package artifacts

mod merge;
mod walk;

pub use merge::MergePhase;
pub use walk::WalkPhase;
