use std::{fmt, path::PathBuf};

/// A customized region dropped because the model no longer renders it.
///
/// Non-fatal: the rest of the file is still regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanedCustomization {
    pub path: PathBuf,
    pub region_id: String,
    /// Line of the region in the file before regeneration.
    pub line: usize,
    /// Body or appended lines that were dropped.
    pub lines_dropped: usize,
}

impl fmt::Display for OrphanedCustomization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "region '{}' ({}:{}) is no longer generated; dropped {} line{}",
            self.region_id,
            self.path.display(),
            self.line,
            self.lines_dropped,
            if self.lines_dropped == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let warning = OrphanedCustomization {
            path: PathBuf::from("src/sdk/misc.js"),
            region_id: "misc-body-print".to_string(),
            line: 12,
            lines_dropped: 1,
        };
        assert_eq!(
            warning.to_string(),
            "region 'misc-body-print' (src/sdk/misc.js:12) is no longer generated; dropped 1 line"
        );
    }
}
