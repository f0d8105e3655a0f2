//! Per-file entries shared by the bake and check reports.

use std::path::Path;

use gsl_core::WriteResult;
use miette::GraphicalReportHandler;

/// One output file and what regeneration did (or would do) to it.
#[derive(Debug)]
pub struct FileEntry {
    /// Path relative to the output root.
    pub path: String,
    pub result: WriteResult,
    /// Number of bodies kept from the file on disk.
    pub preserved: usize,
}

impl FileEntry {
    pub fn new(root: &Path, path: &Path, result: WriteResult, preserved: usize) -> Self {
        Self {
            path: relative(root, path),
            result,
            preserved,
        }
    }

    /// Label for the entry, e.g. `src/sdk/misc.js (2 regions kept)`.
    pub fn label(&self) -> String {
        match self.preserved {
            0 => self.path.clone(),
            1 => format!("{} (1 region kept)", self.path),
            n => format!("{} ({} regions kept)", self.path, n),
        }
    }
}

/// An output file that could not be regenerated.
#[derive(Debug)]
pub struct Failure {
    /// Path relative to the output root.
    pub path: String,
    pub error: Box<gsl_regen::Error>,
}

impl Failure {
    pub fn new(root: &Path, path: &Path, error: Box<gsl_regen::Error>) -> Self {
        Self {
            path: relative(root, path),
            error,
        }
    }

    /// The error rendered with its source snippet.
    pub fn render(&self) -> String {
        let mut out = String::new();
        match GraphicalReportHandler::new().render_report(&mut out, self.error.as_ref()) {
            Ok(()) => out,
            Err(_) => self.error.to_string(),
        }
    }
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_paths_are_relative_to_root() {
        let entry = FileEntry::new(
            Path::new("/ide"),
            Path::new("/ide/src/sdk/misc.js"),
            WriteResult::Updated,
            2,
        );
        assert_eq!(entry.path, "src/sdk/misc.js");
        assert_eq!(entry.label(), "src/sdk/misc.js (2 regions kept)");
    }

    #[test]
    fn test_failure_renders_message() {
        let failure = Failure::new(
            Path::new("/ide"),
            Path::new("/ide/a.js"),
            Box::new(gsl_regen::Error::DuplicateOutput {
                path: PathBuf::from("/ide/a.js"),
            }),
        );
        assert_eq!(failure.path, "a.js");
        assert!(failure.render().contains("more than one generated file"));
    }
}
