//! Entry points tying the pipeline, renderer and writer together.

use std::path::{Path, PathBuf};

use crate::{
    Exclusion, PackageArtifact, Renderer, Result, UnitFilter,
    pipeline::Pipeline,
    writer::{WrittenFile, write_artifact},
};

/// A rendered artifact that has not been written.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Where the file would be written.
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Generates `<package>_interface.go` files for a directory tree.
#[derive(Debug, Default)]
pub struct Generator {
    renderer: Renderer,
}

impl Generator {
    pub fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }

    /// Walk the tree and merge every (directory, package) pair.
    pub fn analyze(&self, root: &Path, filter: UnitFilter) -> Result<Vec<PackageArtifact>> {
        let mut ctx = Pipeline::new().run(root, filter)?;
        tracing::debug!(
            entries = ctx.stats.entries,
            accepted = ctx.stats.accepted,
            artifacts = ctx.artifacts.len(),
            "analysis finished"
        );
        Ok(ctx.take_artifacts())
    }

    /// Render every artifact without touching the filesystem.
    pub fn preview(&self, root: &Path, filter: UnitFilter) -> Result<Vec<PreviewFile>> {
        self.analyze(root, filter)?
            .iter()
            .map(|artifact| -> Result<PreviewFile> {
                Ok(PreviewFile {
                    path: artifact.output_path(),
                    content: self.renderer.render(artifact)?,
                })
            })
            .collect()
    }

    /// Analyze the whole tree, then write one file per artifact.
    ///
    /// Nothing is written when analysis fails. A write failure stops the
    /// run; files written before it are kept.
    pub fn generate(&self, root: &Path, filter: UnitFilter) -> Result<Vec<WrittenFile>> {
        self.analyze(root, filter)?
            .iter()
            .map(|artifact| write_artifact(&self.renderer, artifact))
            .collect()
    }
}

/// Generate interface files for every package under `root`, skipping any
/// path for which one of `exclusions` returns `true`.
pub fn make_gen_files(
    root: impl AsRef<Path>,
    exclusions: Vec<Exclusion>,
) -> Result<Vec<WrittenFile>> {
    Generator::default().generate(root.as_ref(), UnitFilter::with_exclusions(exclusions))
}
