//! Interface command report data structures.

use std::path::PathBuf;

use geng_codegen::{PreviewFile, WrittenFile};

use super::output::{Output, Report};

/// Report data from interface generation.
#[derive(Debug)]
pub struct InterfaceReport {
    /// Walked directory.
    pub dir: PathBuf,
    /// Files written or previewed.
    pub result: GenerationResult,
}

/// Result of interface generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for InterfaceReport {
    fn render(&self, out: &mut dyn Output) {
        let count = match &self.result {
            GenerationResult::Written(files) => {
                for file in files {
                    out.preformatted(&file.to_string());
                }
                files.len()
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
                if !files.is_empty() {
                    out.newline();
                    out.key_value("Would generate", &format!("{} file(s)", files.len()));
                }
                files.len()
            }
        };

        if count == 0 {
            out.warning(&format!("no Go packages found in {}", self.dir.display()));
        }
    }
}
