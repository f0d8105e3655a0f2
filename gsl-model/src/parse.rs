//! Model parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Error, Model, Result,
    error::SourceContext,
    model::{Argument, Block},
    validate::ParseContext,
};

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_model(s, "gsl.toml")
    }
}

impl Model {
    /// Parse a gsl.toml file without loading its translation overlay.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_model(&content, &path.display().to_string())
    }

    /// Parse gsl.toml content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_model(content, filename)
    }
}

/// Parse and validate a model.
pub fn parse_model(content: &str, filename: &str) -> Result<Model> {
    let source = SourceContext::new(content, filename);
    let model: Model = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_model(&model, &source)?;
    Ok(model)
}

fn validate_model(model: &Model, source: &SourceContext) -> Result<()> {
    if model.project.name.trim().is_empty() {
        return Err(source.validation_error("project name cannot be empty", None));
    }

    let ctx = ParseContext::new(source);

    ctx.validate_names(model.modules.iter().map(|m| m.name.as_str()), "module")?;
    for module in &model.modules {
        let module_ctx = ctx.push(&module.name);

        module_ctx.validate_names(
            module.init.args.iter().map(|a| a.name.as_str()),
            "init argument",
        )?;
        module_ctx.validate_names(module.blocks.iter().map(|b| b.name.as_str()), "block")?;
        module_ctx.validate_names(
            module.functions.iter().map(|f| f.name.as_str()),
            "function",
        )?;

        for block in &module.blocks {
            validate_block(&module_ctx.push(&block.name), block, source)?;
        }
        for function in &module.functions {
            module_ctx
                .push(&function.name)
                .validate_names(function.args.iter().map(|a| a.name.as_str()), "argument")?;
        }
    }

    ctx.validate_names(model.classes.iter().map(|c| c.name.as_str()), "class")?;
    for class in &model.classes {
        let class_ctx = ctx.push(&class.name);
        class_ctx.validate_names(class.methods.iter().map(|m| m.name.as_str()), "method")?;
        for method in &class.methods {
            class_ctx
                .push(&method.name)
                .validate_names(method.args.iter().map(|a| a.name.as_str()), "argument")?;
        }
    }

    Ok(())
}

/// Blockly hues run from 0 to 360.
const MAX_COLOUR: u32 = 360;

fn validate_block(ctx: &ParseContext<'_>, block: &Block, source: &SourceContext) -> Result<()> {
    if block.colour > MAX_COLOUR {
        return Err(source.validation_error(
            format!(
                "block '{}' has colour {}, expected a hue between 0 and {MAX_COLOUR}",
                block.name, block.colour
            ),
            None,
        ));
    }

    if let Some(arg) = block.args.iter().find(|a| a.name.is_empty() && !is_dummy(a)) {
        return Err(source.validation_error(
            format!(
                "argument of type '{}' in block '{}' needs a name",
                arg.ty, block.name
            ),
            None,
        ));
    }

    ctx.validate_names(
        block
            .args
            .iter()
            .filter(|a| !is_dummy(a))
            .map(|a| a.name.as_str()),
        "argument",
    )
}

fn is_dummy(arg: &Argument) -> bool {
    arg.ty == "input_dummy"
}
