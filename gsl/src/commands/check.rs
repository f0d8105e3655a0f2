use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gsl_model::GslToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to gsl.toml (defaults to ./gsl.toml)
    #[arg(short, long, default_value = "gsl.toml")]
    pub config: PathBuf,

    /// Output root (defaults to the directory of gsl.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let gsl_toml = GslToml::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| gsl_toml.dir().to_path_buf());

        let report = ops::check(gsl_toml.model(), gsl_toml.path(), &output_dir);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
