//! Non-fatal checks on a loaded model.

mod diagnostic;
mod lints;

use gsl_model::Model;

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{DuplicateBlockLint, MissingMessagesLint, UnknownMessagesLint};

/// A check over the model that reports diagnostics.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line description shown in help output.
    fn description(&self) -> &'static str;

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints over a model.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// A linter with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingMessagesLint),
                Box::new(UnknownMessagesLint),
                Box::new(DuplicateBlockLint),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lints(&self) -> impl Iterator<Item = &dyn Lint> {
        self.lints.iter().map(|l| l.as_ref())
    }

    pub fn check(&self, model: &Model) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(model, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_custom_lint() {
        struct AlwaysError;
        impl Lint for AlwaysError {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always fails"
            }
            fn check(&self, _model: &Model, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error(self.name(), "forced error"));
            }
        }

        let model = Model::from_str("[project]\nname = \"ide\"\n").unwrap();
        let diagnostics = Linter::empty().with_lint(AlwaysError).check(&model);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].lint, "always-error");
    }

    #[test]
    fn test_default_lints() {
        let names: Vec<_> = Linter::new().lints().map(|l| l.name()).collect();
        assert_eq!(
            names,
            vec!["missing-messages", "unknown-messages", "duplicate-block"]
        );
    }
}
