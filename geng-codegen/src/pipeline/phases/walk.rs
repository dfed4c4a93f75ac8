//! Walk phase - filters and extracts every file under the root.

use geng_go::GoParser;
use walkdir::WalkDir;

use crate::{
    Error, Rejection, Result,
    pipeline::{GenerationContext, Phase},
};

/// Phase that walks the tree in lexical order and extracts accepted files.
///
/// Symbolic links are followed, so a link cycle is a walk error. Any walk,
/// read, parse or shape error stops the walk and nothing extracted so far
/// is kept.
pub struct WalkPhase;

impl Phase for WalkPhase {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn description(&self) -> &'static str {
        "Extract declarations from every accepted file"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let mut parser = GoParser::new()?;

        let walker = WalkDir::new(&ctx.root)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| Error::walk(&ctx.root, e))?;
            ctx.stats.entries += 1;

            let path = entry.path();
            if let Some(rejection) = ctx.filter.rejection(path, entry.file_type().is_dir()) {
                if rejection != Rejection::Directory {
                    tracing::debug!(path = %path.display(), %rejection, "skipped");
                }
                ctx.stats.skipped += 1;
                continue;
            }

            let unit = parser.parse_file(path)?;
            ctx.stats.accepted += 1;
            ctx.units.insert(unit);
        }

        tracing::debug!(
            accepted = ctx.stats.accepted,
            skipped = ctx.stats.skipped,
            packages = ctx.units.package_count(),
            "walk finished"
        );
        Ok(())
    }
}
