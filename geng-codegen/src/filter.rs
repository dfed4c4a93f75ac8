//! Which files take part in analysis.

use std::{fmt, path::Path};

use geng_core::{is_generated_artifact, is_mock_file, is_source_file};

/// Caller-supplied predicate; a path for which it returns `true` is skipped.
pub type Exclusion = Box<dyn Fn(&Path) -> bool>;

/// Why an entry was left out of analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Directory,
    GeneratedArtifact,
    MockFile,
    NotSource,
    Excluded,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Directory => write!(f, "directory"),
            Rejection::GeneratedArtifact => write!(f, "generated artifact"),
            Rejection::MockFile => write!(f, "mock file"),
            Rejection::NotSource => write!(f, "not a source file"),
            Rejection::Excluded => write!(f, "excluded"),
        }
    }
}

/// Decides which walked entries are analyzed.
///
/// Built-in rules run first, so a generated artifact or mock file is
/// rejected before any exclusion predicate sees it.
#[derive(Default)]
pub struct UnitFilter {
    exclusions: Vec<Exclusion>,
}

impl UnitFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with the given exclusion predicates.
    pub fn with_exclusions(exclusions: Vec<Exclusion>) -> Self {
        Self { exclusions }
    }

    /// Add an exclusion predicate.
    pub fn exclude(mut self, exclusion: impl Fn(&Path) -> bool + 'static) -> Self {
        self.exclusions.push(Box::new(exclusion));
        self
    }

    /// Number of exclusion predicates.
    pub fn exclusion_count(&self) -> usize {
        self.exclusions.len()
    }

    /// Whether the entry should be analyzed.
    pub fn accepts(&self, path: &Path, is_dir: bool) -> bool {
        self.rejection(path, is_dir).is_none()
    }

    /// The first rule rejecting the entry, if any.
    pub fn rejection(&self, path: &Path, is_dir: bool) -> Option<Rejection> {
        if is_dir {
            Some(Rejection::Directory)
        } else if is_generated_artifact(path) {
            Some(Rejection::GeneratedArtifact)
        } else if is_mock_file(path) {
            Some(Rejection::MockFile)
        } else if !is_source_file(path) {
            Some(Rejection::NotSource)
        } else if self.exclusions.iter().any(|excluded| excluded(path)) {
            Some(Rejection::Excluded)
        } else {
            None
        }
    }
}

impl fmt::Debug for UnitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitFilter")
            .field("exclusions", &self.exclusions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_source() {
        let filter = UnitFilter::new();
        assert!(filter.accepts(Path::new("pkg/foo.go"), false));
        assert!(filter.accepts(Path::new("pkg/foo_test.go"), false));
    }

    #[test]
    fn test_builtin_rejections() {
        let filter = UnitFilter::new();
        let cases = [
            ("pkg", true, Rejection::Directory),
            ("pkg/dir.go", true, Rejection::Directory),
            ("pkg/demo_interface.go", false, Rejection::GeneratedArtifact),
            ("pkg/mock_foo.go", false, Rejection::MockFile),
            ("pkg/README.md", false, Rejection::NotSource),
            ("pkg/foo.go.txt", false, Rejection::NotSource),
        ];

        for (path, is_dir, expected) in cases {
            assert_eq!(
                filter.rejection(Path::new(path), is_dir),
                Some(expected),
                "{path}"
            );
        }
    }

    #[test]
    fn test_generated_artifact_wins_over_mock_prefix() {
        let filter = UnitFilter::new();
        assert_eq!(
            filter.rejection(Path::new("mock_interface.go"), false),
            Some(Rejection::GeneratedArtifact)
        );
    }

    #[test]
    fn test_exclusions() {
        let filter = UnitFilter::new()
            .exclude(|p| p.ends_with("skip.go"))
            .exclude(|p| p.components().any(|c| c.as_os_str() == "vendor"));

        assert_eq!(filter.exclusion_count(), 2);
        assert_eq!(
            filter.rejection(Path::new("a/skip.go"), false),
            Some(Rejection::Excluded)
        );
        assert!(!filter.accepts(Path::new("vendor/x/a.go"), false));
        assert!(filter.accepts(Path::new("a/keep.go"), false));
    }

    #[test]
    fn test_exclusion_not_consulted_for_builtin_rejections() {
        let filter = UnitFilter::new().exclude(|_| panic!("should not be called"));
        assert_eq!(
            filter.rejection(Path::new("mock_a.go"), false),
            Some(Rejection::MockFile)
        );
    }
}
