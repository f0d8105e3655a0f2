//! Check operation - lint the model and plan every output.

use std::path::Path;

use gsl_codegen::{Generator, Linter, Severity};
use gsl_model::Model;
use gsl_regen::RegenerationEngine;

use crate::reports::{CheckReport, FileEntry, Failure};

/// Execute the check operation.
///
/// Nothing is written: each output is planned against what is on disk.
pub fn check(model: &Model, config_path: &Path, output_dir: &Path) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in Linter::new().check(model) {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let jobs = Generator::all().jobs(model, output_dir);
    let mut files = Vec::new();
    let mut orphans = Vec::new();
    let mut failures = Vec::new();

    for outcome in RegenerationEngine::new().plan_all(&jobs).outcomes {
        match outcome.result {
            Ok(plan) => {
                orphans.extend(plan.warnings().iter().map(|w| w.to_string()));
                files.push(FileEntry::new(
                    output_dir,
                    plan.path(),
                    plan.outcome(),
                    plan.preserved().len(),
                ));
            }
            Err(error) => failures.push(Failure::new(output_dir, &outcome.path, error)),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        files,
        orphans,
        failures,
    }
}
