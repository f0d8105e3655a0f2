use gsl_model::Model;

use crate::{
    lint::{Diagnostic, Lint},
    targets::DEFAULT_LANG,
};

/// Warns about blocks whose definition would carry placeholder messages.
pub struct MissingMessagesLint;

impl Lint for MissingMessagesLint {
    fn name(&self) -> &'static str {
        "missing-messages"
    }

    fn description(&self) -> &'static str {
        "Blocks without a message or tooltip in the default language"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        for (module, block) in model.blocks() {
            let messages = block.messages(DEFAULT_LANG);
            let mut missing = Vec::new();
            if messages.and_then(|m| m.msg.as_ref()).is_none() {
                missing.push("msg");
            }
            if messages.and_then(|m| m.tooltip.as_ref()).is_none() {
                missing.push("tooltip");
            }
            if missing.is_empty() {
                continue;
            }
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "block '{}' has no '{}' {}",
                        block.name,
                        DEFAULT_LANG,
                        missing.join(" or ")
                    ),
                )
                .at(format!("modules.{}.blocks.{}", module.name, block.name)),
            );
        }
    }
}
