//! Per-file read, merge and write.

use std::path::{Path, PathBuf};

use gsl_core::{File, WriteResult, join_lines, read_existing, split_lines};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    merge::merge,
    parser::{ParseMode, RegionParser},
    region::Document,
    warning::OrphanedCustomization,
};

/// Merges freshly rendered files with the customized regions already on disk.
///
/// The engine holds no state between files. Callers must not run it twice
/// against the same path concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegenerationEngine;

impl RegenerationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the merged content for `path` without writing anything.
    pub fn plan<S: AsRef<str>>(&self, path: &Path, rendered: &[S]) -> Result<Plan> {
        let name = path.display().to_string();

        let document = RegionParser::new(&name, ParseMode::Rendered)
            .parse(rendered)
            .map_err(|source| {
                Box::new(Error::InvalidRender {
                    path: path.to_path_buf(),
                    source,
                })
            })?;

        let current = read_existing(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;

        let Some(existing) = current.as_deref() else {
            debug!(path = %path.display(), "no existing output, using rendered defaults");
            return Ok(Plan {
                file: File::new(path, join_lines(rendered)),
                current: None,
                document,
                preserved: Vec::new(),
                inherited: Vec::new(),
                warnings: Vec::new(),
            });
        };

        let existing_doc = RegionParser::new(&name, ParseMode::Existing)
            .parse(split_lines(existing).as_slice())
            .map_err(|source| {
                Box::new(Error::CorruptedOutput {
                    path: path.to_path_buf(),
                    source,
                })
            })?;

        let outcome = merge(document, &existing_doc);
        let lines = outcome.document.to_lines();

        // The next run must be able to parse what this one writes.
        RegionParser::new(&name, ParseMode::Existing)
            .parse(lines.as_slice())
            .map_err(|source| {
                Box::new(Error::ConflictingMerge {
                    path: path.to_path_buf(),
                    source,
                })
            })?;

        let warnings = outcome
            .orphans
            .into_iter()
            .map(|orphan| OrphanedCustomization {
                path: path.to_path_buf(),
                region_id: orphan.id,
                line: orphan.line,
                lines_dropped: orphan.lines,
            })
            .collect();

        debug!(
            path = %path.display(),
            preserved = outcome.preserved.len(),
            "merged with existing output"
        );

        Ok(Plan {
            file: File::new(path, join_lines(lines.as_slice())),
            current,
            document: outcome.document,
            preserved: outcome.preserved,
            inherited: outcome.inherited,
            warnings,
        })
    }

    /// Plan and write `path` in one step.
    pub fn regenerate<S: AsRef<str>>(&self, path: &Path, rendered: &[S]) -> Result<Regeneration> {
        self.plan(path, rendered)?.apply()
    }
}

/// The merged result for one file, not yet written.
#[derive(Debug, Clone)]
pub struct Plan {
    file: File,
    /// On-disk content read at planning time.
    current: Option<String>,
    document: Document,
    preserved: Vec<String>,
    inherited: Vec<String>,
    warnings: Vec<OrphanedCustomization>,
}

impl Plan {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Final file content.
    pub fn content(&self) -> &str {
        self.file.content()
    }

    /// The merged segments.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// What applying this plan would do to the file.
    pub fn outcome(&self) -> WriteResult {
        self.file.outcome(self.current.as_deref())
    }

    /// Bounded regions whose body was kept from the existing file.
    pub fn preserved(&self) -> &[String] {
        &self.preserved
    }

    /// Insertion points that kept appended content.
    pub fn inherited(&self) -> &[String] {
        &self.inherited
    }

    pub fn warnings(&self) -> &[OrphanedCustomization] {
        &self.warnings
    }

    /// Write the planned content if it differs from what was on disk.
    pub fn apply(self) -> Result<Regeneration> {
        let result = self
            .file
            .write(self.current.as_deref())
            .map_err(|source| {
                Box::new(Error::Write {
                    path: self.file.path().to_path_buf(),
                    source,
                })
            })?;

        for warning in &self.warnings {
            warn!(
                path = %warning.path.display(),
                region_id = %warning.region_id,
                line = warning.line,
                lines_dropped = warning.lines_dropped,
                "dropped orphaned customization"
            );
        }
        debug!(path = %self.file.path().display(), %result, "regenerated");

        Ok(Regeneration {
            path: self.file.path().to_path_buf(),
            result,
            preserved: self.preserved,
            warnings: self.warnings,
        })
    }
}

/// Outcome of regenerating one file.
#[derive(Debug, Clone)]
pub struct Regeneration {
    pub path: PathBuf,
    pub result: WriteResult,
    /// Bounded regions whose body was kept from the previous file.
    pub preserved: Vec<String>,
    pub warnings: Vec<OrphanedCustomization>,
}
