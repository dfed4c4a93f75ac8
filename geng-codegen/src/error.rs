use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Coarse classification of a generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The directory tree could not be traversed.
    Walk,
    /// A source file has a syntax error.
    Parse,
    /// A receiver, parameter or result type has an unsupported shape.
    Shape,
    /// A file could not be read or an output file could not be written.
    Io,
    /// An artifact could not be rendered.
    Template,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Walk => write!(f, "walk"),
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Shape => write!(f, "shape"),
            ErrorKind::Io => write!(f, "io"),
            ErrorKind::Template => write!(f, "template"),
        }
    }
}

/// Every failure stops the whole run; nothing is retried or skipped.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to walk '{}'", .path.display())]
    #[diagnostic(code(geng::walk_error))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Extract(#[from] geng_go::Error),

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(code(geng::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render the interfaces of package '{package}'")]
    #[diagnostic(code(geng::template_error))]
    Template {
        package: String,
        #[source]
        source: fmt::Error,
    },
}

impl Error {
    /// Create a walk error, keeping the path of the failing entry when known
    pub fn walk(root: impl Into<PathBuf>, source: walkdir::Error) -> Box<Self> {
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.into());
        Box::new(Error::Walk { path, source })
    }

    /// Create an output I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a template error
    pub fn template(package: impl Into<String>, source: fmt::Error) -> Box<Self> {
        Box::new(Error::Template {
            package: package.into(),
            source,
        })
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Walk { .. } => ErrorKind::Walk,
            Error::Extract(geng_go::Error::Read { .. }) => ErrorKind::Io,
            Error::Extract(geng_go::Error::Shape { .. }) => ErrorKind::Shape,
            Error::Extract(geng_go::Error::Parse { .. } | geng_go::Error::Grammar { .. }) => {
                ErrorKind::Parse
            }
            Error::Io { .. } => ErrorKind::Io,
            Error::Template { .. } => ErrorKind::Template,
        }
    }
}

impl From<Box<geng_go::Error>> for Box<Error> {
    fn from(error: Box<geng_go::Error>) -> Self {
        Box::new(Error::Extract(*error))
    }
}
