//! Core operations.
//!
//! This module contains the business logic for gsl commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod regions;

pub use bake::bake;
pub use check::check;
pub use regions::regions;
