//! Per directory/package accumulation of extracted units.

use std::path::PathBuf;

use geng_core::output_file_name;
use geng_go::{MethodSignature, SourceUnit};
use indexmap::IndexMap;

use crate::{generation::ImportCollector, render::InterfaceDefinition};

/// Extracted units keyed by directory, then by package name.
///
/// Units are only stored here; imports and receiver groups are merged
/// once the walk is over, in [`UnitIndex::into_artifacts`].
#[derive(Debug, Default)]
pub struct UnitIndex {
    dirs: IndexMap<PathBuf, IndexMap<String, Vec<SourceUnit>>>,
}

impl UnitIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a unit under its directory and package.
    pub fn insert(&mut self, unit: SourceUnit) {
        self.dirs
            .entry(unit.dir().to_path_buf())
            .or_default()
            .entry(unit.package.clone())
            .or_default()
            .push(unit);
    }

    /// Number of distinct (directory, package) pairs.
    pub fn package_count(&self) -> usize {
        self.dirs.values().map(IndexMap::len).sum()
    }

    /// Number of recorded units.
    pub fn unit_count(&self) -> usize {
        self.dirs
            .values()
            .flat_map(|packages| packages.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Merge every (directory, package) pair into one artifact.
    pub fn into_artifacts(self) -> Vec<PackageArtifact> {
        self.dirs
            .into_iter()
            .flat_map(|(dir, packages)| {
                packages.into_iter().map(move |(package, units)| {
                    PackageArtifact::merge(dir.clone(), package, units)
                })
            })
            .collect()
    }
}

/// Merged content of all units sharing a directory and package.
#[derive(Debug, Clone)]
pub struct PackageArtifact {
    /// Directory the artifact is written to.
    pub dir: PathBuf,
    /// Package name.
    pub package: String,
    /// Rendered imports, deduplicated in first-seen order.
    pub imports: Vec<String>,
    /// Receiver type name -> methods, concatenated across units.
    pub groups: IndexMap<String, Vec<MethodSignature>>,
}

impl PackageArtifact {
    /// Flatten the imports of every unit and deduplicate them once, then
    /// concatenate receiver groups in unit order.
    pub fn merge(
        dir: impl Into<PathBuf>,
        package: impl Into<String>,
        units: Vec<SourceUnit>,
    ) -> Self {
        let imports: ImportCollector = units
            .iter()
            .flat_map(|unit| unit.imports.iter().map(ToString::to_string))
            .collect();

        let mut groups: IndexMap<String, Vec<MethodSignature>> = IndexMap::new();
        for unit in units {
            for (receiver, methods) in unit.groups {
                groups.entry(receiver).or_default().extend(methods);
            }
        }

        Self {
            dir: dir.into(),
            package: package.into(),
            imports: imports.into_vec(),
            groups,
        }
    }

    /// `<dir>/<package>_interface.go`
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(output_file_name(&self.package))
    }

    /// Number of receiver groups, i.e. interfaces to generate.
    pub fn interface_count(&self) -> usize {
        self.groups.len()
    }

    /// View of the artifact handed to a template.
    pub fn definition(&self) -> InterfaceDefinition<'_> {
        InterfaceDefinition {
            package_name: &self.package,
            all_imports: &self.imports,
            structs: &self.groups,
        }
    }
}
