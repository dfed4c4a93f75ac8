//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod interface;
mod output;

pub use interface::{GenerationResult, InterfaceReport};
pub use output::{Report, TerminalOutput};
