mod bake;
mod check;
mod completions;
mod regions;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use regions::RegionsCommand;

/// Extension trait for exiting on domain errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gsl")]
#[command(version)]
#[command(about = "Generate customizable JavaScript scaffolding from gsl.toml")]
pub(crate) struct Cli {
    /// Log debug details of every planned and written file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Regions(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate or regenerate sources from gsl.toml
    Bake(BakeCommand),

    /// Validate gsl.toml and report what the next bake would change
    Check(CheckCommand),

    /// List the customizable regions of a generated file
    Regions(RegionsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
