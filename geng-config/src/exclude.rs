//! Exclusion globs turned into path predicates.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::{Error, Result};

/// Path predicate; returns `true` for a path that must be skipped.
pub type Predicate = Box<dyn Fn(&Path) -> bool>;

/// Compiled exclusion globs, matched against paths relative to a root.
///
/// `*` does not cross directory separators; use `**` for that.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    root: PathBuf,
    matchers: Vec<GlobMatcher>,
}

impl ExcludeSet {
    /// Compile the given patterns for paths under `root`.
    pub fn new<I, S>(root: impl Into<PathBuf>, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                GlobBuilder::new(pattern)
                    .literal_separator(true)
                    .build()
                    .map(|glob| glob.compile_matcher())
                    .map_err(|e| Error::invalid_pattern(pattern, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.into(),
            matchers,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// One predicate per pattern, each owning its matcher.
    pub fn into_predicates(self) -> Vec<Predicate> {
        let root = self.root;
        self.matchers
            .into_iter()
            .map(|matcher| {
                let root = root.clone();
                Box::new(move |path: &Path| {
                    matcher.is_match(path.strip_prefix(&root).unwrap_or(path))
                }) as Predicate
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluded(predicates: &[Predicate], path: &str) -> bool {
        predicates.iter().any(|p| p(Path::new(path)))
    }

    #[test]
    fn test_matches_relative_to_root() {
        let set = ExcludeSet::new("/repo", ["vendor/**", "**/testdata/**"]).unwrap();
        let predicates = set.into_predicates();

        assert!(excluded(&predicates, "/repo/vendor/x/a.go"));
        assert!(excluded(&predicates, "/repo/pkg/testdata/a.go"));
        assert!(excluded(&predicates, "/repo/testdata/a.go"));
        assert!(!excluded(&predicates, "/repo/pkg/a.go"));
    }

    #[test]
    fn test_star_does_not_cross_separator() {
        let set = ExcludeSet::new("/repo", ["*_test.go"]).unwrap();
        let predicates = set.into_predicates();

        assert!(excluded(&predicates, "/repo/a_test.go"));
        assert!(!excluded(&predicates, "/repo/pkg/a_test.go"));
    }

    #[test]
    fn test_one_predicate_per_pattern() {
        let set = ExcludeSet::new("root", ["gen/**", "**/*_test.go"]).unwrap();
        assert_eq!(set.len(), 2);

        let predicates = set.into_predicates();
        assert_eq!(predicates.len(), 2);
        assert!(predicates[0](Path::new("root/gen/a.go")));
        assert!(!predicates[0](Path::new("root/pkg/a.go")));
        assert!(predicates[1](Path::new("root/pkg/a_test.go")));
    }

    #[test]
    fn test_path_outside_root_matched_as_is() {
        let set = ExcludeSet::new("root", ["gen/**"]).unwrap();
        let predicates = set.into_predicates();

        assert!(excluded(&predicates, "gen/a.go"));
        assert!(!excluded(&predicates, "other/gen/a.go"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ExcludeSet::new(".", ["a[b"]).unwrap_err();
        assert!(matches!(*err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExcludeSet::new(".", Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert!(!excluded(&set.into_predicates(), "./a.go"));
    }
}
