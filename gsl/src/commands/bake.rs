use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gsl_codegen::TargetKind;
use gsl_model::GslToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to gsl.toml (defaults to ./gsl.toml)
    #[arg(short, long, default_value = "gsl.toml")]
    pub config: PathBuf,

    /// Output root (defaults to the directory of gsl.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only generate these targets (defaults to all)
    #[arg(short, long = "target", value_name = "TARGET")]
    pub targets: Vec<TargetKind>,

    /// Compute and summarize changes without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let gsl_toml = GslToml::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| gsl_toml.dir().to_path_buf());
        let targets = if self.targets.is_empty() {
            TargetKind::ALL.to_vec()
        } else {
            self.targets.clone()
        };

        let report = ops::bake(
            gsl_toml.model(),
            ops::bake::BakeOptions {
                output_dir: &output_dir,
                targets: &targets,
                dry_run: self.dry_run,
            },
        );

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
