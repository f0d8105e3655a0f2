use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RegionsCommand {
    /// Generated file to inspect
    pub file: PathBuf,
}

impl RegionsCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::regions(&self.file).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
