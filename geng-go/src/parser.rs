//! Go parser built on tree-sitter-go.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser};

use crate::{Error, Result, SourceContext, SourceUnit, extract::extract_unit};

/// Parser turning Go source files into [`SourceUnit`]s.
///
/// Create it once and reuse it for every file of a walk.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a new Go parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let lang = tree_sitter_go::LANGUAGE;
        parser.set_language(&lang.into()).map_err(|e| {
            Box::new(Error::Grammar {
                message: e.to_string(),
            })
        })?;

        Ok(Self { parser })
    }

    /// Read and extract a source file.
    pub fn parse_file(&mut self, path: &Path) -> Result<SourceUnit> {
        let code = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        self.parse_source(path, &code)
    }

    /// Extract already-loaded source code.
    ///
    /// Any syntax error in the file fails the whole file.
    pub fn parse_source(&mut self, path: impl Into<PathBuf>, code: &str) -> Result<SourceUnit> {
        let ctx = SourceContext::new(path, code);
        let tree = self
            .parser
            .parse(code, None)
            .ok_or_else(|| ctx.parse_error(0..0, 1, 1))?;

        let root = tree.root_node();
        if root.has_error() {
            let node = first_error(root).unwrap_or(root);
            let pos = node.start_position();
            return Err(ctx.parse_error(node.byte_range(), pos.row + 1, pos.column + 1));
        }

        let unit = extract_unit(&ctx, root, code)?;
        tracing::debug!(
            path = %unit.path.display(),
            package = %unit.package,
            receivers = unit.groups.len(),
            methods = unit.method_count(),
            "extracted unit"
        );
        Ok(unit)
    }
}

/// Depth-first search for the first error or missing node.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
