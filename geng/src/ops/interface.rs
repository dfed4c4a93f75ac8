//! Interface operation - generate `<package>_interface.go` files.

use std::path::Path;

use geng_codegen::{Exclusion, Generator, Renderer, Result, UnitFilter};

use crate::reports::{GenerationResult, InterfaceReport};

/// Options for the interface operation.
pub struct InterfaceOptions<'a> {
    /// Root of the walk.
    pub dir: &'a Path,
    /// Paths for which any predicate returns `true` are skipped.
    pub exclusions: Vec<Exclusion>,
    /// Whether to render without writing.
    pub dry_run: bool,
}

/// Execute the interface operation.
pub fn interface(opts: InterfaceOptions) -> Result<InterfaceReport> {
    let generator = Generator::new(Renderer::new());
    let filter = UnitFilter::with_exclusions(opts.exclusions);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview(opts.dir, filter)?)
    } else {
        GenerationResult::Written(generator.generate(opts.dir, filter)?)
    };

    Ok(InterfaceReport {
        dir: opts.dir.to_path_buf(),
        result,
    })
}
