use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid pattern error, pointing at the pattern if it can
    /// be found in the source.
    pub fn pattern_error(&self, pattern: &str, source: globset::Error) -> Box<Error> {
        Box::new(Error::InvalidPattern {
            src: self.named_source(),
            span: find_pattern_span(&self.src, pattern),
            pattern: pattern.to_string(),
            source,
        })
    }
}

/// Find the span of a quoted pattern in the source.
fn find_pattern_span(src: &str, pattern: &str) -> Option<SourceSpan> {
    ['"', '\''].iter().find_map(|quote| {
        let quoted = format!("{quote}{pattern}{quote}");
        src.find(&quoted)
            .map(|offset| SourceSpan::from((offset + 1, pattern.len())))
    })
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("remove --config to run without a configuration file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse geng.toml")]
    #[diagnostic(code(geng::config_parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid exclude pattern '{pattern}'")]
    #[diagnostic(
        code(geng::invalid_pattern),
        help("patterns are globs relative to the walked directory, e.g. 'vendor/**'")
    )]
    InvalidPattern {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid glob")]
        span: Option<SourceSpan>,
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl Error {
    /// Create an invalid pattern error for a pattern given outside a file
    pub fn invalid_pattern(pattern: &str, source: globset::Error) -> Box<Self> {
        Box::new(Error::InvalidPattern {
            src: NamedSource::new("--exclude", pattern.to_string()),
            span: Some((0, pattern.len()).into()),
            pattern: pattern.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_pattern_span() {
        let src = "[interface]\nexclude = [\"vendor/**\", 'a[']\n";
        let span = find_pattern_span(src, "vendor/**").unwrap();
        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), 9);

        let span = find_pattern_span(src, "a[").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "a[");

        assert!(find_pattern_span(src, "missing").is_none());
    }
}
