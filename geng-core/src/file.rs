use std::{
    io,
    path::{Path, PathBuf},
};

/// A generated file waiting to be written.
///
/// Generated artifacts are always overwritten: writing creates the file if
/// it is missing and truncates it otherwise.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or truncate the file and write the content
    pub fn write(&self) -> io::Result<()> {
        write_file(&self.path, &self.content)
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
