//! Pipeline phase trait.

use super::GenerationContext;
use crate::Result;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    /// The phase name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A phase in the analysis pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads and
/// modifies the generation context. Any error stops the pipeline.
pub trait Phase: Send + Sync {
    /// The name of this phase.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;

    /// Get information about this phase.
    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
