//! JavaScript templates for the GSL scaffolding generator.
//!
//! Each [`Target`] renders one family of files from a [`gsl_model::Model`]:
//! visual editor blocks, the IDE and executor halves of every SDK module,
//! and SDK classes. Rendered files carry region markers with default bodies;
//! [`gsl_regen`] merges them with what is already on disk.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware line builder with region helpers
//! - [`targets`] - The built-in targets
//! - [`lint`] - Non-fatal checks on the model

pub mod builder;
mod generator;
mod js;
pub mod lint;
pub mod paths;
mod target;
pub mod targets;

pub use generator::Generator;
pub use lint::{Diagnostic, Lint, Linter, Severity};
pub use target::{GeneratedFile, Target, TargetKind};
