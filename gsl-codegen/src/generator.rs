//! Runs a selection of targets over a model.

use std::path::Path;

use gsl_model::Model;
use gsl_regen::FileJob;
use tracing::debug;

use crate::target::{GeneratedFile, Target, TargetKind};

/// Renders the files of the selected targets.
pub struct Generator {
    targets: Vec<Box<dyn Target>>,
}

impl Generator {
    /// A generator for `kinds`, in the order given, ignoring repeats.
    pub fn new(kinds: &[TargetKind]) -> Self {
        let mut selected: Vec<TargetKind> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !selected.contains(kind) {
                selected.push(*kind);
            }
        }
        Self {
            targets: selected.iter().map(TargetKind::target).collect(),
        }
    }

    /// A generator for every target.
    pub fn all() -> Self {
        Self::new(&TargetKind::ALL)
    }

    pub fn kinds(&self) -> Vec<TargetKind> {
        self.targets.iter().map(|t| t.kind()).collect()
    }

    /// All files of the selected targets, sorted by path.
    pub fn render(&self, model: &Model) -> Vec<GeneratedFile> {
        let mut files = Vec::new();
        for target in &self.targets {
            let rendered = target.render(model);
            debug!(target = target.name(), files = rendered.len(), "rendered");
            files.extend(rendered);
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    /// Regeneration jobs for every rendered file under `root`.
    pub fn jobs(&self, model: &Model, root: &Path) -> Vec<FileJob> {
        self.render(model)
            .iter()
            .map(|file| file.to_job(root))
            .collect()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::all()
    }
}
