use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Read a file if it exists.
///
/// Returns `Ok(None)` when there is nothing at `path`; any other I/O failure
/// (permissions, invalid UTF-8) is returned as an error.
pub fn read_existing(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write `content` to `path` through a temporary file in the same directory.
///
/// Parent directories are created as needed. The temporary file is renamed
/// over the target, so readers never observe a partially written file.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// File existed and its content changed
    Updated,
    /// File existed with identical content and was not touched
    Unchanged,
}

impl WriteResult {
    /// Whether the file on disk was (or would be) modified.
    pub fn is_write(&self) -> bool {
        !matches!(self, WriteResult::Unchanged)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WriteResult::Created => "created",
            WriteResult::Updated => "updated",
            WriteResult::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for WriteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file to be written, together with its final content.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Decide what writing this file would do given the current on-disk content.
    pub fn outcome(&self, current: Option<&str>) -> WriteResult {
        match current {
            None => WriteResult::Created,
            Some(existing) if existing == self.content => WriteResult::Unchanged,
            Some(_) => WriteResult::Updated,
        }
    }

    /// Write the file unless `current` already holds the same bytes.
    ///
    /// `current` is the content read at the start of the read-merge-write
    /// sequence; the file is not re-read here.
    pub fn write(&self, current: Option<&str>) -> io::Result<WriteResult> {
        let outcome = self.outcome(current);
        if outcome.is_write() {
            write_atomic(&self.path, &self.content)?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_atomic_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_atomic(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_atomic_overwrites_and_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_read_existing_missing_is_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(read_existing(&temp.path().join("nope.js")).unwrap(), None);
    }

    #[test]
    fn test_file_write_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.txt");

        let result = File::new(&path, "new content").write(None).unwrap();

        assert_eq!(result, WriteResult::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_file_write_updates_changed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.txt");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write(Some("original")).unwrap();

        assert_eq!(result, WriteResult::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_skips_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.txt");
        fs::write(&path, "same").unwrap();
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let result = File::new(&path, "same").write(Some("same")).unwrap();

        assert_eq!(result, WriteResult::Unchanged);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_write_result_display() {
        assert_eq!(WriteResult::Created.to_string(), "created");
        assert_eq!(WriteResult::Updated.to_string(), "updated");
        assert_eq!(WriteResult::Unchanged.to_string(), "unchanged");
        assert!(!WriteResult::Unchanged.is_write());
    }
}
