//! Code generation building blocks.

mod indent;
mod line_builder;

pub use indent::Indent;
pub use line_builder::LineBuilder;
