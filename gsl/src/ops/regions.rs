//! Regions operation - list the regions of a file on disk.

use std::path::Path;

use gsl_core::split_lines;
use gsl_regen::{Error, ParseMode, RegionParser, Result};

use crate::reports::{RegionEntry, RegionsReport};

/// Parse `path` the way regeneration reads existing output.
pub fn regions(path: &Path) -> Result<RegionsReport> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;

    let lines = split_lines(&content);
    let document = RegionParser::new(path.display().to_string(), ParseMode::Existing)
        .parse(lines.as_slice())
        .map_err(|source| {
            Box::new(Error::CorruptedOutput {
                path: path.to_path_buf(),
                source,
            })
        })?;

    let regions = document
        .regions()
        .into_iter()
        .map(|region| RegionEntry {
            line: region.line,
            kind: region.kind_name(),
            flavor: region.flavor().as_str(),
            id: region.id.clone(),
            lines: region.content_len(),
        })
        .collect();

    Ok(RegionsReport {
        path: path.to_path_buf(),
        regions,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_lists_nested_regions() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("robot.js");
        fs::write(
            &path,
            "// <GSL customizable: outer>\nlet a;\n// <default GSL customizable: inner />\nlet b;\n// </GSL customizable: outer>\n",
        )
        .unwrap();

        let report = regions(&path).unwrap();
        assert_eq!(report.regions.len(), 2);
        assert_eq!(report.regions[0].id, "outer");
        assert_eq!(report.regions[0].flavor, "plain");
        assert_eq!(report.regions[0].kind, "bounded");
        assert_eq!(report.regions[1].id, "inner");
        assert_eq!(report.regions[1].line, 3);
        assert_eq!(report.regions[1].kind, "insertion point");
        assert_eq!(report.regions[1].lines, 1);
    }

    #[test]
    fn test_malformed_markup() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("robot.js");
        fs::write(&path, "// <GSL customizable: open>\nlet a;\n").unwrap();

        let err = regions(&path).unwrap_err();
        assert!(matches!(*err, Error::CorruptedOutput { .. }));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let err = regions(&temp.path().join("missing.js")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
