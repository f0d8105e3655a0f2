//! Check command report data structures.

use std::path::PathBuf;

use gsl_core::WriteResult;

use super::{
    files::{Failure, FileEntry},
    output::{Output, Report},
};

/// Report data from model validation and output planning.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Planned outcome of every output file.
    pub files: Vec<FileEntry>,
    /// Customizations the next bake would drop.
    pub orphans: Vec<String>,
    /// Outputs the next bake could not regenerate.
    pub failures: Vec<Failure>,
}

impl CheckReport {
    /// Whether the model is valid and every output can be regenerated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.failures.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        let missing: Vec<_> = self
            .files
            .iter()
            .filter(|f| f.result == WriteResult::Created)
            .collect();
        if !missing.is_empty() {
            out.section("Missing");
            for file in missing {
                out.added_item(&file.path);
            }
        }

        let stale: Vec<_> = self
            .files
            .iter()
            .filter(|f| f.result == WriteResult::Updated)
            .collect();
        if !stale.is_empty() {
            out.section("Out of date");
            for file in stale {
                out.changed_item(&file.path);
            }
        }

        if !self.orphans.is_empty() {
            out.section("Would drop");
            for orphan in &self.orphans {
                out.removed_item(orphan);
            }
        }

        for failure in &self.failures {
            out.error(&failure.render());
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        }
    }
}
