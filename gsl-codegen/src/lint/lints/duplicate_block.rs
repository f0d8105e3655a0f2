use std::collections::HashMap;

use gsl_model::Model;

use crate::lint::{Diagnostic, Lint};

/// Warns when two modules declare blocks with the same editor type.
pub struct DuplicateBlockLint;

impl Lint for DuplicateBlockLint {
    fn name(&self) -> &'static str {
        "duplicate-block"
    }

    fn description(&self) -> &'static str {
        "Blocks sharing a name across modules"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (module, block) in model.blocks() {
            match seen.get(block.name.as_str()) {
                Some(first) => diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "block '{}' in module '{}' has the same type as in module '{}'",
                            block.name, module.name, first
                        ),
                    )
                    .at(format!("modules.{}.blocks.{}", module.name, block.name)),
                ),
                None => {
                    seen.insert(&block.name, &module.name);
                }
            }
        }
    }
}
