use std::{
    fmt,
    path::{Path, PathBuf},
};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for extraction operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Where an unsupported type shape was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRole {
    Receiver,
    Parameter,
    Result,
}

impl ShapeRole {
    /// Human-readable description of the accepted shape.
    pub fn expected(&self) -> &'static str {
        match self {
            ShapeRole::Receiver => "a pointer to a simple named type, e.g. `*Bar`",
            ShapeRole::Parameter | ShapeRole::Result => "a simple named type, e.g. `int`",
        }
    }
}

impl fmt::Display for ShapeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeRole::Receiver => write!(f, "receiver"),
            ShapeRole::Parameter => write!(f, "parameter"),
            ShapeRole::Result => write!(f, "result"),
        }
    }
}

/// Source context for error reporting.
///
/// Carries the file path and content so extraction code can build
/// span-labelled diagnostics without threading both everywhere.
#[derive(Debug, Clone)]
pub struct SourceContext {
    path: PathBuf,
    src: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(path: impl Into<PathBuf>, src: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            src: src.into(),
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.path.display().to_string(), self.src.clone())
    }

    /// Create a parse error pointing at a byte range.
    pub fn parse_error(
        &self,
        range: std::ops::Range<usize>,
        line: usize,
        column: usize,
    ) -> Box<Error> {
        Box::new(Error::Parse {
            path: self.path.clone(),
            src: self.named_source(),
            span: (range.start, range.len()).into(),
            line,
            column,
        })
    }

    /// Create a shape error pointing at a byte range.
    pub fn shape_error(
        &self,
        role: ShapeRole,
        found: impl Into<String>,
        range: std::ops::Range<usize>,
        line: usize,
    ) -> Box<Error> {
        Box::new(Error::Shape {
            path: self.path.clone(),
            src: self.named_source(),
            span: (range.start, range.len()).into(),
            role,
            expected: role.expected(),
            found: found.into(),
            line,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(geng::read_error))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load the Go grammar: {message}")]
    #[diagnostic(code(geng::grammar_error))]
    Grammar { message: String },

    #[error("failed to parse '{}' at {line}:{column}", .path.display())]
    #[diagnostic(code(geng::parse_error))]
    Parse {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("unsupported {role} type `{found}` in '{}' on line {line}", .path.display())]
    #[diagnostic(code(geng::unsupported_shape), help("only {expected} is supported"))]
    Shape {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("{role} must be {expected}")]
        span: SourceSpan,
        role: ShapeRole,
        expected: &'static str,
        found: String,
        line: usize,
    },
}

impl Error {
    /// Create a read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Read {
            path: path.into(),
            source,
        })
    }

    /// Path of the file the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Read { path, .. } | Error::Parse { path, .. } | Error::Shape { path, .. } => {
                Some(path)
            }
            Error::Grammar { .. } => None,
        }
    }

    /// Whether this error is an unsupported-shape error.
    pub fn is_shape(&self) -> bool {
        matches!(self, Error::Shape { .. })
    }

    /// Whether this error is a syntax error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_message() {
        let ctx = SourceContext::new("pkg/a.go", "package a\nfunc (b Bar) Do() {}\n");
        let err = ctx.shape_error(ShapeRole::Receiver, "Bar", 18..21, 2);

        assert!(err.is_shape());
        assert_eq!(
            err.to_string(),
            "unsupported receiver type `Bar` in 'pkg/a.go' on line 2"
        );
        assert_eq!(err.path(), Some(Path::new("pkg/a.go")));
    }

    #[test]
    fn test_parse_error_message() {
        let ctx = SourceContext::new("a.go", "package a\nfunc (\n");
        let err = ctx.parse_error(15..16, 2, 6);

        assert!(err.is_parse());
        assert_eq!(err.to_string(), "failed to parse 'a.go' at 2:6");
    }
}
