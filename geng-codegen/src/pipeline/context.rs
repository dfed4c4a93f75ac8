//! Generation context passed through pipeline phases.

use std::path::PathBuf;

use crate::{PackageArtifact, UnitFilter, UnitIndex};

/// Counters collected while walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Entries yielded by the walk, directories included.
    pub entries: usize,
    /// Files that were extracted.
    pub accepted: usize,
    /// Entries rejected by the filter.
    pub skipped: usize,
}

/// State carried through every phase.
#[derive(Debug)]
pub struct GenerationContext {
    /// Root of the walk.
    pub root: PathBuf,
    /// Decides which files are extracted.
    pub filter: UnitFilter,
    /// Extracted units (populated by WalkPhase, drained by MergePhase).
    pub units: UnitIndex,
    /// Merged artifacts (populated by MergePhase).
    pub artifacts: Vec<PackageArtifact>,
    pub stats: WalkStats,
}

impl GenerationContext {
    pub fn new(root: impl Into<PathBuf>, filter: UnitFilter) -> Self {
        Self {
            root: root.into(),
            filter,
            units: UnitIndex::new(),
            artifacts: Vec::new(),
            stats: WalkStats::default(),
        }
    }

    /// Take the merged artifacts out of the context.
    pub fn take_artifacts(&mut self) -> Vec<PackageArtifact> {
        std::mem::take(&mut self.artifacts)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = GenerationContext::new("src", UnitFilter::new());

        assert_eq!(ctx.root, Path::new("src"));
        assert!(ctx.units.is_empty());
        assert!(ctx.artifacts.is_empty());
        assert_eq!(ctx.stats, WalkStats::default());
    }
}
