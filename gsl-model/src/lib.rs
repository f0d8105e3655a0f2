//! Model loading for the GSL scaffolding generator.
//!
//! A project is described by a `gsl.toml` file listing SDK modules (with
//! their editor blocks and functions) and SDK classes, plus an optional
//! translation overlay holding per-language block messages.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod messages;
mod model;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::GslToml;
pub use messages::{BlockMessages, MessageKey, Messages};
pub use model::{
    Argument, Block, Class, Function, Init, Method, Model, Module, PathsConfig, ProjectConfig,
};
pub use parse::parse_model;
pub use validate::ParseContext;
