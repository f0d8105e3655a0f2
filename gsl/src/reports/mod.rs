//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod files;
mod output;
mod regions;

pub use bake::BakeReport;
pub use check::CheckReport;
pub use files::{Failure, FileEntry};
pub use output::{Report, TerminalOutput};
pub use regions::{RegionEntry, RegionsReport};
