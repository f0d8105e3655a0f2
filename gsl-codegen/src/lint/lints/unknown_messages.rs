use gsl_model::Model;

use crate::lint::{Diagnostic, Lint};

/// Warns about translation overlay entries that no block picks up.
pub struct UnknownMessagesLint;

impl Lint for UnknownMessagesLint {
    fn name(&self) -> &'static str {
        "unknown-messages"
    }

    fn description(&self) -> &'static str {
        "Translation entries naming an unknown module or block"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        for key in model.messages.unknown_entries(model) {
            let message = if model.module(&key.module).is_none() {
                format!("translations for unknown module '{}'", key.module)
            } else {
                format!(
                    "translations for unknown block '{}' in module '{}'",
                    key.block, key.module
                )
            };
            diagnostics.push(
                Diagnostic::warning(self.name(), message)
                    .at(format!("{}.{}.{}", key.module, key.lang, key.block)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use gsl_model::Messages;

    use super::*;

    #[test]
    fn test_unknown_entries() {
        let mut model = Model::from_str(
            r#"
            [project]
            name = "ide"

            [[modules]]
            name = "hedgehog"
            blocks = [{ name = "move_forward" }]
            "#,
        )
        .unwrap();
        model.messages = Messages::from_str_with_filename(
            r#"
            [hedgehog.en.move_forward]
            msg = "move"

            [hedgehog.en.fly]
            msg = "fly"

            [robot.de.drive]
            msg = "fahre"
            "#,
            "messages.toml",
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        UnknownMessagesLint.check(&model, &mut diagnostics);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "translations for unknown block 'fly' in module 'hedgehog'",
                "translations for unknown module 'robot'",
            ]
        );
        assert_eq!(diagnostics[1].location.as_deref(), Some("robot.de.drive"));
    }
}
