//! Bake operation - render the model and regenerate its files.

use std::path::Path;

use gsl_codegen::{Generator, Linter, TargetKind};
use gsl_model::Model;
use gsl_regen::RegenerationEngine;
use tracing::info;

use crate::reports::{BakeReport, FileEntry, Failure};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Root the model's output paths are resolved against.
    pub output_dir: &'a Path,
    pub targets: &'a [TargetKind],
    /// Plan every file but write nothing.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Files are regenerated independently; a failing file does not stop the
/// others and is reported alongside them.
pub fn bake(model: &Model, opts: BakeOptions) -> BakeReport {
    let lints = Linter::new()
        .check(model)
        .iter()
        .map(|d| d.to_string())
        .collect();

    let jobs = Generator::new(opts.targets).jobs(model, opts.output_dir);
    let engine = RegenerationEngine::new();
    let root = opts.output_dir;
    info!(
        files = jobs.len(),
        root = %root.display(),
        dry_run = opts.dry_run,
        "baking"
    );

    let mut files = Vec::new();
    let mut orphans = Vec::new();
    let mut failures = Vec::new();

    if opts.dry_run {
        for outcome in engine.plan_all(&jobs).outcomes {
            match outcome.result {
                Ok(plan) => {
                    orphans.extend(plan.warnings().iter().map(|w| w.to_string()));
                    files.push(FileEntry::new(
                        root,
                        plan.path(),
                        plan.outcome(),
                        plan.preserved().len(),
                    ));
                }
                Err(error) => failures.push(Failure::new(root, &outcome.path, error)),
            }
        }
    } else {
        for outcome in engine.regenerate_all(&jobs).outcomes {
            match outcome.result {
                Ok(regeneration) => {
                    orphans.extend(regeneration.warnings.iter().map(|w| w.to_string()));
                    files.push(FileEntry::new(
                        root,
                        &regeneration.path,
                        regeneration.result,
                        regeneration.preserved.len(),
                    ));
                }
                Err(error) => failures.push(Failure::new(root, &outcome.path, error)),
            }
        }
    }

    BakeReport {
        project: model.project.name.clone(),
        output_dir: root.to_path_buf(),
        dry_run: opts.dry_run,
        lints,
        files,
        orphans,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use gsl_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    const MODEL: &str = r#"
        [project]
        name = "ide"

        [[modules]]
        name = "misc"
        functions = [{ name = "print", args = [{ name = "text", type = "string" }] }]
    "#;

    fn run(model: &Model, root: &Path, dry_run: bool) -> BakeReport {
        bake(
            model,
            BakeOptions {
                output_dir: root,
                targets: &TargetKind::ALL,
                dry_run,
            },
        )
    }

    #[test]
    fn test_bake_writes_then_reports_unchanged() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let model = Model::from_str(MODEL).unwrap();

        let first = run(&model, temp.path(), false);
        assert!(first.is_success());
        assert_eq!(first.files.len(), 2);
        assert!(first.files.iter().all(|f| f.result == WriteResult::Created));
        assert!(temp.path().join("src/sdk/misc.js").exists());

        let second = run(&model, temp.path(), false);
        assert!(second.files.iter().all(|f| f.result == WriteResult::Unchanged));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let model = Model::from_str(MODEL).unwrap();

        let report = run(&model, temp.path(), true);
        assert!(report.dry_run);
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].path, "src/executor/sdk/misc.js");
        assert!(!temp.path().join("src").exists());
    }

    #[test]
    fn test_failure_does_not_stop_other_files() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let model = Model::from_str(MODEL).unwrap();
        run(&model, temp.path(), false);

        let sdk = temp.path().join("src/sdk/misc.js");
        let broken = fs::read_to_string(&sdk)
            .unwrap()
            .replace("// </GSL customizable: misc-init>\n", "");
        fs::write(&sdk, &broken).unwrap();

        let report = run(&model, temp.path(), false);
        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, "src/sdk/misc.js");
        assert_eq!(report.files.len(), 1);
        assert_eq!(fs::read_to_string(&sdk).unwrap(), broken);
    }
}
