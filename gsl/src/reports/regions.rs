//! Regions command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// One region found in a file.
#[derive(Debug)]
pub struct RegionEntry {
    /// 1-based line of the (opening) marker.
    pub line: usize,
    pub kind: &'static str,
    pub flavor: &'static str,
    pub id: String,
    /// Body or trailing lines owned by the region.
    pub lines: usize,
}

#[derive(Debug)]
pub struct RegionsReport {
    pub path: PathBuf,
    pub regions: Vec<RegionEntry>,
}

impl Report for RegionsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!(
            "{} ({} region{})",
            self.path.display(),
            self.regions.len(),
            if self.regions.len() == 1 { "" } else { "s" }
        ));
        for region in &self.regions {
            out.list_item(&format!(
                "{:>4}  {} [{}, {}] {} line{}",
                region.line,
                region.id,
                region.kind,
                region.flavor,
                region.lines,
                if region.lines == 1 { "" } else { "s" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::Recorder;

    #[test]
    fn test_render() {
        let report = RegionsReport {
            path: PathBuf::from("robot.js"),
            regions: vec![RegionEntry {
                line: 12,
                kind: "bounded",
                flavor: "default",
                id: "robot-body-drive".to_string(),
                lines: 1,
            }],
        };

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "robot.js (1 region):",
                "  -   12  robot-body-drive [bounded, default] 1 line",
            ]
        );
    }
}
