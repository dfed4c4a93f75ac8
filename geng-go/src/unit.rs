use std::{
    fmt,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

/// One import entry of a source file.
///
/// Two imports are the same import when their rendered forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportDecl {
    /// Explicit alias, including `_` and `.`.
    pub alias: Option<String>,
    /// Import path with its quotes, exactly as written.
    pub path: String,
}

impl ImportDecl {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }

    /// `alias "path"` or `"path"`.
    pub fn rendered(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImportDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} {}", alias, self.path),
            None => f.write_str(&self.path),
        }
    }
}

/// An exported method, flattened to the text needed in an interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// Method name.
    pub name: String,
    /// `name type` pairs joined by `", "`.
    pub params: String,
    /// Bare types or `name type` pairs joined by `", "`. Empty without results.
    pub results: String,
    /// Doc comment lines, verbatim.
    pub doc: Vec<String>,
}

impl MethodSignature {
    /// Doc comment lines joined so that each continuation line stays
    /// indented inside the interface body.
    pub fn comment(&self) -> String {
        self.doc.join("\n\t")
    }
}

/// Everything extracted from one accepted source file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path of the file.
    pub path: PathBuf,
    /// Declared package name.
    pub package: String,
    /// Imports in source order, duplicates included.
    pub imports: Vec<ImportDecl>,
    /// Receiver type name -> methods in declaration order.
    pub groups: IndexMap<String, Vec<MethodSignature>>,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, package: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package: package.into(),
            imports: Vec::new(),
            groups: IndexMap::new(),
        }
    }

    /// Directory containing the file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Append a method to its receiver group.
    pub fn push_method(&mut self, receiver: impl Into<String>, method: MethodSignature) {
        self.groups.entry(receiver.into()).or_default().push(method);
    }

    /// Total number of extracted methods.
    pub fn method_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
