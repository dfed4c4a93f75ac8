//! Merge phase - turns the unit index into package artifacts.

use crate::{
    Result,
    pipeline::{GenerationContext, Phase},
};

/// Phase that merges every (directory, package) pair into one artifact.
///
/// Must run after `WalkPhase`; the unit index is drained.
pub struct MergePhase;

impl Phase for MergePhase {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn description(&self) -> &'static str {
        "Merge units sharing a directory and package"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let units = std::mem::take(&mut ctx.units);
        ctx.artifacts = units.into_artifacts();
        Ok(())
    }
}
