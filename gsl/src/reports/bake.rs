//! Bake command report data structures.

use std::path::PathBuf;

use gsl_core::WriteResult;

use super::{
    files::{Failure, FileEntry},
    output::{Output, Report},
};

/// Report data from a bake run.
#[derive(Debug)]
pub struct BakeReport {
    /// Project name from gsl.toml.
    pub project: String,
    pub output_dir: PathBuf,
    /// Whether files were only planned.
    pub dry_run: bool,
    /// Lint diagnostics, one line each.
    pub lints: Vec<String>,
    pub files: Vec<FileEntry>,
    /// Customizations dropped because the model no longer renders them.
    pub orphans: Vec<String>,
    pub failures: Vec<Failure>,
}

impl BakeReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn count(&self, result: WriteResult) -> usize {
        self.files.iter().filter(|f| f.result == result).count()
    }
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for lint in &self.lints {
            out.preformatted(lint);
        }
        if !self.lints.is_empty() {
            out.newline();
        }

        out.key_value("Project", &self.project);
        out.key_value("Output", &self.output_dir.display().to_string());
        out.newline();

        let (created, updated) = if self.dry_run {
            ("Would create", "Would update")
        } else {
            ("Created", "Updated")
        };
        render_files(out, created, &self.files, WriteResult::Created, |out, text| {
            out.added_item(text)
        });
        render_files(out, updated, &self.files, WriteResult::Updated, |out, text| {
            out.changed_item(text)
        });

        if !self.orphans.is_empty() {
            out.section("Dropped customizations");
            for orphan in &self.orphans {
                out.removed_item(orphan);
            }
            out.newline();
        }

        for failure in &self.failures {
            out.error(&failure.render());
        }

        out.preformatted(&format!(
            "{} created, {} updated, {} unchanged, {} failed",
            self.count(WriteResult::Created),
            self.count(WriteResult::Updated),
            self.count(WriteResult::Unchanged),
            self.failures.len()
        ));
        if self.dry_run {
            out.preformatted("Dry run: nothing was written");
        }
    }
}

fn render_files(
    out: &mut dyn Output,
    heading: &str,
    files: &[FileEntry],
    result: WriteResult,
    item: fn(&mut dyn Output, &str),
) {
    let matching: Vec<_> = files.iter().filter(|f| f.result == result).collect();
    if matching.is_empty() {
        return;
    }
    out.section(heading);
    for file in matching {
        item(out, &file.label());
    }
    out.newline();
}
