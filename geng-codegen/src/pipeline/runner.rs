//! Pipeline orchestrator.

use std::path::PathBuf;

use super::{
    GenerationContext, Phase,
    phases::{MergePhase, WalkPhase},
};
use crate::{Result, UnitFilter};

/// The analysis pipeline orchestrator.
///
/// Runs the built-in phases (walk, merge) followed by any added phases.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyCustomPhase);
/// let ctx = pipeline.run(root, UnitFilter::new())?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases only.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline over the tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns the first error of any phase; later phases do not run.
    pub fn run(&self, root: impl Into<PathBuf>, filter: UnitFilter) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(root, filter);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![Box::new(WalkPhase), Box::new(MergePhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            tracing::debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use tempfile::TempDir;

    use super::*;

    struct CountingPhase {
        artifacts_seen: Arc<AtomicUsize>,
    }

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "Count merged artifacts"
        }

        fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
            let count = ctx.artifacts.len();
            self.artifacts_seen.store(count, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_custom_phase_runs_after_merge() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.go"), "package a\n").unwrap();

        let seen = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new().phase(CountingPhase {
            artifacts_seen: seen.clone(),
        });

        let ctx = pipeline.run(temp.path(), UnitFilter::new()).unwrap();

        assert_eq!(ctx.artifacts.len(), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_phase_info() {
        let info = WalkPhase.info();
        assert_eq!(info.name, "walk");
    }
}
