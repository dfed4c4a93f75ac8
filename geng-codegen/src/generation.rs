//! Import collection utilities.

use indexmap::IndexSet;

/// Tracks rendered imports and deduplicates them.
///
/// Two imports are the same when their rendered text is identical
/// (`f "fmt"` and `"fmt"` are different imports). The first occurrence
/// fixes the position.
///
/// # Example
///
/// ```
/// use geng_codegen::generation::ImportCollector;
///
/// let imports: ImportCollector = ["\"fmt\"", "\"errors\"", "\"fmt\""].into_iter().collect();
/// assert_eq!(imports.into_vec(), ["\"fmt\"", "\"errors\""]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rendered import. Returns `false` if it was already present.
    pub fn add(&mut self, import: impl Into<String>) -> bool {
        self.imports.insert(import.into())
    }

    /// Consume the collector, keeping first-seen order.
    pub fn into_vec(self) -> Vec<String> {
        self.imports.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ImportCollector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut collector = Self::new();
        for import in iter {
            collector.add(import);
        }
        collector
    }
}
