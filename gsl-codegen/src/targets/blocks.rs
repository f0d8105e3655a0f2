//! Visual editor block definitions, one file per block.

use gsl_core::to_screaming_snake_case;
use gsl_model::{Argument, Block, Model};

use crate::{
    builder::LineBuilder,
    js::{block_arg_json, quote},
    paths,
    target::{GeneratedFile, Target, TargetKind},
};

/// Language whose messages are written into block definitions.
pub const DEFAULT_LANG: &str = "en";

/// Placeholder for messages the model does not provide.
const MISSING: &str = "TODO";

/// Renders `<blocks>/<module>/<block>.js` for every block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlocksTarget;

impl Target for BlocksTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Blocks
    }

    fn render(&self, model: &Model) -> Vec<GeneratedFile> {
        model
            .blocks()
            .map(|(module, block)| {
                GeneratedFile::new(
                    paths::block_file(&model.paths, &module.name, &block.name),
                    render_block(block),
                )
            })
            .collect()
    }
}

fn render_block(block: &Block) -> Vec<String> {
    let constant = to_screaming_snake_case(&block.name);
    let messages = block.messages(DEFAULT_LANG);
    let msg = messages.and_then(|m| m.msg.as_deref()).unwrap_or(MISSING);
    let tooltip = messages
        .and_then(|m| m.tooltip.as_deref())
        .unwrap_or(MISSING);

    let mut b = LineBuilder::javascript();
    b.line("// @flow")
        .line("/* eslint-disable */")
        .blank()
        .line("import * as React from 'react';")
        .line("import Blockly from 'blockly';")
        .blank()
        .line("import { type Block } from '..';")
        .blank();

    b.block(format!("const {constant}: Block = {{"), "};", |b| {
        b.block("blockJson: {", "},", |b| {
            b.line(format!("type: {},", quote(&block.name)));
            b.line(format!("message0: {},", quote(msg)));
            args0(b, block);
            match &block.output {
                Some(output) => {
                    b.line(format!("output: {},", quote(output)));
                }
                None => {
                    if !block.scope {
                        b.line("inputsInline: true,");
                    }
                    b.line("previousStatement: null,");
                    b.line("nextStatement: null,");
                }
            }
            b.line(format!("colour: {},", block.colour));
            b.line(format!("tooltip: {},", quote(tooltip)));
            b.line("helpUrl: 'TODO',");
        });
        b.block("generators: {", "},", |b| {
            b.block("JavaScript: block => {", "},", |b| generator_body(b, block));
        });
        b.block("toolboxBlocks: {", "},", |b| {
            b.block("default: () => (", "),", |b| {
                b.block(
                    format!("<block type=\"{}\">{{", block.name),
                    "}</block>",
                    |b| {
                        b.insertion_point(&format!("{}-default-toolbox", block.name));
                    },
                );
            });
            b.insertion_point(&format!("{}-extra-toolbox", block.name));
        });
    });

    b.blank().line(format!("export default {constant};"));
    b.build()
}

/// `args0: [...]` as pretty-printed JSON, omitted for blocks without arguments.
fn args0(b: &mut LineBuilder, block: &Block) {
    if block.args.is_empty() {
        return;
    }
    let args = serde_json::Value::Array(block.args.iter().map(block_arg_json).collect());
    // Alternate `Display` of a `Value` is pretty-printed and cannot fail.
    let json = format!("{args:#}");
    let mut lines = json.lines();
    if let Some(first) = lines.next() {
        b.line(format!("args0: {first}"));
    }
    b.lines(lines);
    b.append(",");
}

/// Local variable holding an argument's value in generator code.
fn var_name(arg: &Argument) -> String {
    arg.name.to_lowercase()
}

fn generator_body(b: &mut LineBuilder, block: &Block) {
    for arg in &block.args {
        let var = var_name(arg);
        match arg.ty.as_str() {
            "input_dummy" => {}
            "input_statement" => {
                b.line(format!(
                    "const {var} = Blockly.JavaScript.statementToCode(block, {});",
                    quote(&arg.name)
                ));
            }
            "field_checkbox" => {
                b.line(format!(
                    "const {var} = block.getFieldValue({}) === 'TRUE';",
                    quote(&arg.name)
                ));
            }
            _ if arg.is_field() => {
                b.line(format!(
                    "const {var} = block.getFieldValue({});",
                    quote(&arg.name)
                ));
            }
            _ => {}
        }
    }

    b.region(&format!("{}-body", block.name), |b| {
        for arg in &block.args {
            if arg.is_input() && arg.ty != "input_dummy" && arg.ty != "input_statement" {
                b.line(format!(
                    "const {} = Blockly.JavaScript.valueToCode(block, {}, Blockly.JavaScript.ORDER_ATOMIC);",
                    var_name(arg),
                    quote(&arg.name)
                ));
            }
        }
        b.line("// TODO generate code");
        b.line("const code = '';");
        if block.is_statement() {
            b.line("return code;");
        } else {
            b.line("return [code, Blockly.JavaScript.ORDER_NONE];");
        }
    });
}
