//! IDE-side SDK modules: command handlers for what the executor sends.

use gsl_model::{Function, Model, Module};

use crate::{
    builder::LineBuilder,
    js::{names, params, payload},
    paths,
    target::{GeneratedFile, Target, TargetKind},
};

/// Renders `<sdk>/<module>.js` for every module that declares functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdkTarget;

impl Target for SdkTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Sdk
    }

    fn render(&self, model: &Model) -> Vec<GeneratedFile> {
        model
            .modules
            .iter()
            .filter(|m| !m.functions.is_empty())
            .map(|module| {
                GeneratedFile::new(
                    paths::sdk_file(&model.paths, &module.name),
                    render_module(module),
                )
            })
            .collect()
    }
}

/// Command name the executor sends for `function`.
pub fn command_name(module: &Module, function: &Function) -> String {
    format!("{}_{}", module.name, function.name)
}

fn render_module(module: &Module) -> Vec<String> {
    let mut b = LineBuilder::javascript();
    b.line("// @flow")
        .line("/* eslint-disable */")
        .line("// DO NOT DELETE GSL TAGS")
        .blank()
        .line("import ExecutorTask from '../components/ide/Executor/ExecutorTask';");
    b.region(&format!("{}-imports", module.name), |b| {
        b.line("// Put your imports tags here").blank();
    });
    b.blank();

    b.block(
        format!(
            "export default async function init({}) {{",
            params(&module.init.args)
        ),
        "};",
        |b| {
            b.region(&format!("{}-init", module.name), |b| {
                b.line("// Your module initialization code").blank();
            });
            b.blank();

            if module.include_lookup {
                b.block("const moduleFunctions = {", "};", |b| {
                    for function in &module.functions {
                        b.line(format!(
                            "'{}': ({}) => {}({}),",
                            function.name,
                            payload(&function.args),
                            function.name,
                            names(&function.args)
                        ));
                    }
                });
                b.blank();
            }

            for function in &module.functions {
                b.block(
                    format!(
                        "async function {}({}) {{",
                        function.name,
                        params(&function.args)
                    ),
                    "}",
                    |b| {
                        b.region(
                            &format!("{}-body-{}", module.name, function.name),
                            |b| {
                                b.line("// Your function code goes here").blank();
                            },
                        );
                    },
                );
                b.blank();
            }

            b.block("return {", "};", |b| {
                for function in &module.functions {
                    handler(b, module, function);
                }
            });
        },
    );
    b.build()
}

fn handler(b: &mut LineBuilder, module: &Module, function: &Function) {
    let command = command_name(module, function);
    let args = names(&function.args);
    if function.has_reply {
        let bound = if args.is_empty() {
            "null".to_string()
        } else {
            format!("null, {args}")
        };
        b.block(
            format!(
                "'{command}': async ({}, executorTask: ExecutorTask) => {{",
                payload(&function.args)
            ),
            "},",
            |b| {
                b.line(format!(
                    "return executorTask.withReply({}.bind({bound}));",
                    function.name
                ));
            },
        );
    } else {
        b.line(format!(
            "'{command}': ({}) => {}({args}),",
            payload(&function.args),
            function.name
        ));
    }
}
