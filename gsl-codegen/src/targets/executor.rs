//! Executor-side SDK modules: functions that send commands to the IDE.

use gsl_model::{Model, Module};

use crate::{
    builder::LineBuilder,
    js::{params, payload, quote},
    paths,
    target::{GeneratedFile, Target, TargetKind},
    targets::sdk::command_name,
};

/// Renders `<executor>/<module>.js` for every module that declares functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutorTarget;

impl Target for ExecutorTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Executor
    }

    fn render(&self, model: &Model) -> Vec<GeneratedFile> {
        model
            .modules
            .iter()
            .filter(|m| !m.functions.is_empty())
            .map(|module| {
                GeneratedFile::new(
                    paths::executor_file(&model.paths, &module.name),
                    render_module(module),
                )
            })
            .collect()
    }
}

fn render_module(module: &Module) -> Vec<String> {
    let mut b = LineBuilder::javascript();
    b.line("// @flow")
        .line("/* eslint-disable */")
        .line("// DO NOT DELETE GSL TAGS")
        .blank()
        .line("import connection from '../connection';");
    b.region(&format!("{}-executor-imports", module.name), |b| {
        b.line("// Put your imports tags here").blank();
    });

    for function in &module.functions {
        let asyncness = if function.has_reply { "async " } else { "" };
        b.blank();
        b.block(
            format!(
                "export {asyncness}function {}({}) {{",
                function.name,
                params(&function.args)
            ),
            "}",
            |b| {
                b.line(format!(
                    "connection.send({}, {});",
                    quote(&command_name(module, function)),
                    payload(&function.args)
                ));
                if function.has_reply {
                    b.line("return connection.recv();");
                }
            },
        );
    }
    b.build()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_module_file() {
        let model = Model::from_str(
            r#"
            [project]
            name = "ide"

            [[modules]]
            name = "hedgehog"

            [[modules.functions]]
            name = "moveMotor"
            args = [
                { name = "port", type = "number" },
                { name = "power", type = "number" },
            ]

            [[modules.functions]]
            name = "getAnalog"
            has_reply = true
            args = [{ name = "port", type = "number" }]
            "#,
        )
        .unwrap();

        let files = ExecutorTarget.render(&model);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path.to_str(), Some("src/executor/sdk/hedgehog.js"));

        insta::assert_snapshot!(files[0].content(), @r"
        // @flow
        /* eslint-disable */
        // DO NOT DELETE GSL TAGS

        import connection from '../connection';
        // <default GSL customizable: hedgehog-executor-imports>
        // Put your imports tags here

        // </GSL customizable: hedgehog-executor-imports>

        export function moveMotor(port: number, power: number) {
          connection.send('hedgehog_moveMotor', { port, power });
        }

        export async function getAnalog(port: number) {
          connection.send('hedgehog_getAnalog', { port });
          return connection.recv();
        }
        ");
    }

    #[test]
    fn test_modules_without_functions_are_skipped() {
        let model = Model::from_str(
            r#"
            [project]
            name = "ide"

            [[modules]]
            name = "misc"
            blocks = [{ name = "wait" }]
            "#,
        )
        .unwrap();
        assert!(ExecutorTarget.render(&model).is_empty());
    }
}
