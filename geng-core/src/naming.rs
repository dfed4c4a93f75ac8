//! File and identifier naming conventions.

use std::path::Path;

/// Suffix of every generated artifact. Files carrying it are never re-read.
const GENERATED_SUFFIX: &str = "_interface.go";

/// Prefix of generated mock files, which are never read either.
const MOCK_PREFIX: &str = "mock_";

/// Extension of source files that take part in analysis.
const SOURCE_EXTENSION: &str = ".go";

/// Suffix appended to a receiver type name to name its interface.
const INTERFACE_SUFFIX: &str = "Interface";

/// Name of the artifact generated for a package (e.g. "demo" -> "demo_interface.go")
pub fn output_file_name(package: &str) -> String {
    format!("{package}{GENERATED_SUFFIX}")
}

/// Name of the interface generated for a receiver type (e.g. "Bar" -> "BarInterface")
pub fn interface_name(receiver: &str) -> String {
    format!("{receiver}{INTERFACE_SUFFIX}")
}

/// Whether an identifier is exported, i.e. starts with an upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// Whether the path names a previously generated artifact.
pub fn is_generated_artifact(path: &Path) -> bool {
    file_name(path).ends_with(GENERATED_SUFFIX)
}

/// Whether the path names a generated mock file.
pub fn is_mock_file(path: &Path) -> bool {
    file_name(path).starts_with(MOCK_PREFIX)
}

/// Whether the path has the source-file extension.
pub fn is_source_file(path: &Path) -> bool {
    file_name(path).ends_with(SOURCE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("demo"), "demo_interface.go");
        assert_eq!(output_file_name("main"), "main_interface.go");
    }

    #[test]
    fn test_interface_name() {
        assert_eq!(interface_name("Bar"), "BarInterface");
        assert_eq!(interface_name("userStore"), "userStoreInterface");
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("Doit"));
        assert!(is_exported("ÉtéRun"));
        assert!(!is_exported("doit"));
        assert!(!is_exported("_Doit"));
        assert!(!is_exported(""));
    }

    #[test]
    fn test_file_conventions() {
        assert!(is_generated_artifact(Path::new("pkg/foo_interface.go")));
        assert!(!is_generated_artifact(Path::new("pkg/interface.go")));

        assert!(is_mock_file(Path::new("pkg/mock_foo.go")));
        assert!(!is_mock_file(Path::new("mock/foo.go")));

        assert!(is_source_file(Path::new("a.go")));
        assert!(!is_source_file(Path::new("a.go.txt")));
        assert!(!is_source_file(Path::new("README.md")));
    }
}
