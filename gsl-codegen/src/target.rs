//! The renderer abstraction shared by all output families.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use gsl_core::join_lines;
use gsl_model::Model;
use gsl_regen::FileJob;

use crate::targets::{BlocksTarget, ClassesTarget, ExecutorTarget, SdkTarget};

/// A rendered output file: candidate lines with default region bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// File content as it would be written for a new file.
    pub fn content(&self) -> String {
        join_lines(self.lines.as_slice())
    }

    /// A regeneration job for this file under `root`.
    pub fn to_job(&self, root: &Path) -> FileJob {
        FileJob::new(root.join(&self.path), self.lines.clone())
    }
}

/// A renderer producing one family of output files from the model.
pub trait Target: Send + Sync {
    fn kind(&self) -> TargetKind;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Render every file of this family.
    fn render(&self, model: &Model) -> Vec<GeneratedFile>;
}

/// The available targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetKind {
    /// Visual editor block definitions.
    Blocks,
    /// IDE-side SDK modules.
    Sdk,
    /// Executor-side SDK modules.
    Executor,
    /// SDK classes.
    Classes,
}

impl TargetKind {
    pub const ALL: [TargetKind; 4] = [
        TargetKind::Blocks,
        TargetKind::Sdk,
        TargetKind::Executor,
        TargetKind::Classes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Blocks => "blocks",
            TargetKind::Sdk => "sdk",
            TargetKind::Executor => "executor",
            TargetKind::Classes => "classes",
        }
    }

    /// Instantiate the renderer for this kind.
    pub fn target(&self) -> Box<dyn Target> {
        match self {
            TargetKind::Blocks => Box::new(BlocksTarget),
            TargetKind::Sdk => Box::new(SdkTarget),
            TargetKind::Executor => Box::new(ExecutorTarget),
            TargetKind::Classes => Box::new(ClassesTarget),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown target '{}', expected one of: {}",
                    s,
                    TargetKind::ALL.map(|k| k.as_str()).join(", ")
                )
            })
    }
}
