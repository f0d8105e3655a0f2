use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for regeneration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A problem with the region markers of one line sequence.
///
/// Line numbers are 1-based.
#[derive(Debug, Error, Diagnostic)]
pub enum MarkupError {
    #[error("malformed region markup at line {line}: {message}")]
    #[diagnostic(code(gsl::malformed_region_markup), help("{hint}"))]
    MalformedRegionMarkup {
        #[source_code]
        src: NamedSource<String>,
        #[label("{caption}")]
        span: SourceSpan,
        message: String,
        caption: String,
        hint: String,
        line: usize,
    },

    #[error("conflicting region id '{id}' at lines {first_line} and {line}")]
    #[diagnostic(
        code(gsl::conflicting_region_id),
        help("region ids must be unique within a file; rename or remove one of the regions")
    )]
    ConflictingRegionId {
        #[source_code]
        src: NamedSource<String>,
        #[label("first used here")]
        first_span: SourceSpan,
        #[label("used again here")]
        second_span: SourceSpan,
        id: String,
        first_line: usize,
        line: usize,
    },
}

impl MarkupError {
    /// Line of the offending marker.
    pub fn line(&self) -> usize {
        match self {
            MarkupError::MalformedRegionMarkup { line, .. } => *line,
            MarkupError::ConflictingRegionId { line, .. } => *line,
        }
    }

    /// Region id involved, when the error is about a specific id.
    pub fn region_id(&self) -> Option<&str> {
        match self {
            MarkupError::MalformedRegionMarkup { .. } => None,
            MarkupError::ConflictingRegionId { id, .. } => Some(id),
        }
    }

    pub fn is_conflicting_id(&self) -> bool {
        matches!(self, MarkupError::ConflictingRegionId { .. })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(gsl::read_failed))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(gsl::write_failed))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rendered template for '{path}' has invalid region markup")]
    #[diagnostic(
        code(gsl::invalid_render),
        help("the template for this file is broken; nothing was written")
    )]
    InvalidRender {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: MarkupError,
    },

    #[error("existing output '{path}' cannot be merged safely")]
    #[diagnostic(
        code(gsl::corrupted_output),
        help("repair the region markers by hand and re-run; the file was left untouched")
    )]
    CorruptedOutput {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: MarkupError,
    },

    #[error("merged output for '{path}' would contain conflicting regions")]
    #[diagnostic(
        code(gsl::conflicting_merge),
        help("a preserved region body contains a region the model now renders elsewhere; move it out by hand and re-run")
    )]
    ConflictingMerge {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: MarkupError,
    },

    #[error("'{path}' is the target of more than one generated file")]
    #[diagnostic(
        code(gsl::duplicate_output),
        help("two model entities map to the same output path; rename one of them")
    )]
    DuplicateOutput { path: PathBuf },
}

impl Error {
    /// Path of the output file this error concerns.
    pub fn path(&self) -> &Path {
        match self {
            Error::Io { path, .. }
            | Error::Write { path, .. }
            | Error::InvalidRender { path, .. }
            | Error::CorruptedOutput { path, .. }
            | Error::ConflictingMerge { path, .. }
            | Error::DuplicateOutput { path } => path,
        }
    }

    /// The markup error behind this failure, if any.
    pub fn markup(&self) -> Option<&MarkupError> {
        match self {
            Error::InvalidRender { source, .. }
            | Error::CorruptedOutput { source, .. }
            | Error::ConflictingMerge { source, .. } => Some(source),
            _ => None,
        }
    }
}
