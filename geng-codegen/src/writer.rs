//! Persisting rendered artifacts.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use geng_core::File;

use crate::{Error, PackageArtifact, Renderer, Result};

/// Format of the completion timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An artifact that was written to disk.
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub package: String,
    /// Number of interfaces in the file.
    pub interfaces: usize,
    pub written_at: DateTime<Local>,
}

impl WrittenFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Completion time formatted with [`TIMESTAMP_FORMAT`].
    pub fn timestamp(&self) -> String {
        self.written_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for WrittenFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[gen file] {} {}", self.timestamp(), self.path.display())
    }
}

/// Render an artifact and write it to `<dir>/<package>_interface.go`.
///
/// The text is rendered before the file is touched, so a template failure
/// leaves any existing file unchanged.
pub fn write_artifact(renderer: &Renderer, artifact: &PackageArtifact) -> Result<WrittenFile> {
    let content = renderer.render(artifact)?;
    let file = File::new(artifact.output_path(), content);
    file.write().map_err(|e| Error::io(file.path(), e))?;

    let written = WrittenFile {
        path: file.path().to_path_buf(),
        package: artifact.package.clone(),
        interfaces: artifact.interface_count(),
        written_at: Local::now(),
    };
    tracing::info!(
        path = %written.path.display(),
        interfaces = written.interfaces,
        "gen file"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_write_artifact() {
        let temp = TempDir::new().unwrap();
        let artifact = PackageArtifact::merge(temp.path(), "demo", Vec::new());

        let written = write_artifact(&Renderer::new(), &artifact).unwrap();

        assert_eq!(written.path, temp.path().join("demo_interface.go"));
        assert_eq!(written.package, "demo");
        assert_eq!(written.interfaces, 0);
        assert_eq!(fs::read_to_string(&written.path).unwrap(), "package demo\n");
    }

    #[test]
    fn test_display_line() {
        let temp = TempDir::new().unwrap();
        let artifact = PackageArtifact::merge(temp.path(), "demo", Vec::new());
        let written = write_artifact(&Renderer::new(), &artifact).unwrap();

        let line = written.to_string();
        assert!(line.starts_with("[gen file] "));
        assert!(line.ends_with("demo_interface.go"));
        assert_eq!(written.timestamp().len(), "2024-01-02 03:04:05".len());
    }

    #[test]
    fn test_unwritable_target() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("demo_interface.go")).unwrap();
        let artifact = PackageArtifact::merge(temp.path(), "demo", Vec::new());

        let err = write_artifact(&Renderer::new(), &artifact).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
