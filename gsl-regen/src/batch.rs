//! Regenerating many independent files in parallel.

use std::{collections::HashSet, path::PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    engine::{Plan, RegenerationEngine, Regeneration},
    error::{Error, Result},
    warning::OrphanedCustomization,
};

/// One output file and its freshly rendered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl FileJob {
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }
}

/// Result for one job of a batch.
#[derive(Debug)]
pub struct Outcome<T> {
    pub path: PathBuf,
    pub result: Result<T>,
}

/// Per-file results of a batch, in input order.
#[derive(Debug)]
pub struct BatchReport<T> {
    pub outcomes: Vec<Outcome<T>>,
}

impl<T> BatchReport<T> {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn successes(&self) -> impl Iterator<Item = (&PathBuf, &T)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|value| (&o.path, value)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (&o.path, err.as_ref())))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

impl BatchReport<Regeneration> {
    /// Orphan warnings across all regenerated files.
    pub fn warnings(&self) -> impl Iterator<Item = &OrphanedCustomization> {
        self.successes().flat_map(|(_, r)| r.warnings.iter())
    }
}

impl BatchReport<Plan> {
    pub fn warnings(&self) -> impl Iterator<Item = &OrphanedCustomization> {
        self.successes().flat_map(|(_, p)| p.warnings().iter())
    }
}

impl RegenerationEngine {
    /// Regenerate every job, continuing past per-file failures.
    pub fn regenerate_all(&self, jobs: &[FileJob]) -> BatchReport<Regeneration> {
        self.run(jobs, |job| self.regenerate(&job.path, job.lines.as_slice()))
    }

    /// Plan every job without writing.
    pub fn plan_all(&self, jobs: &[FileJob]) -> BatchReport<Plan> {
        self.run(jobs, |job| self.plan(&job.path, job.lines.as_slice()))
    }

    fn run<T, F>(&self, jobs: &[FileJob], op: F) -> BatchReport<T>
    where
        T: Send,
        F: Fn(&FileJob) -> Result<T> + Sync,
    {
        let duplicates = duplicate_paths(jobs);
        debug!(
            jobs = jobs.len(),
            duplicates = duplicates.len(),
            "regenerating batch"
        );

        // Jobs sharing a path are never run, so no two workers touch one file.
        let outcomes = jobs
            .par_iter()
            .map(|job| {
                let result = if duplicates.contains(&job.path) {
                    Err(Box::new(Error::DuplicateOutput {
                        path: job.path.clone(),
                    }))
                } else {
                    op(job)
                };
                Outcome {
                    path: job.path.clone(),
                    result,
                }
            })
            .collect();

        BatchReport { outcomes }
    }
}

fn duplicate_paths(jobs: &[FileJob]) -> HashSet<PathBuf> {
    let mut seen = HashSet::new();
    let mut duplicates = HashSet::new();
    for job in jobs {
        if !seen.insert(&job.path) {
            duplicates.insert(job.path.clone());
        }
    }
    duplicates
}
