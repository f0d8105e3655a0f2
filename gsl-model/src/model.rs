//! Typed entity tree loaded from gsl.toml.

use std::{collections::BTreeMap, path::PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::messages::{BlockMessages, Messages};

/// Root of a gsl.toml file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Model {
    pub project: ProjectConfig,

    /// Output directories, relative to the output root.
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub modules: Vec<Module>,

    #[serde(default)]
    pub classes: Vec<Class>,

    /// Translation overlay loaded from `project.messages`.
    #[serde(skip)]
    pub messages: Messages,
}

impl Model {
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// All blocks with their owning module, in declaration order.
    pub fn blocks(&self) -> impl Iterator<Item = (&Module, &Block)> {
        self.modules
            .iter()
            .flat_map(|m| m.blocks.iter().map(move |b| (m, b)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: String,

    /// Translation overlay file, relative to gsl.toml.
    #[serde(default)]
    pub messages: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub blocks: PathBuf,
    pub sdk: PathBuf,
    pub executor: PathBuf,
    pub classes: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            blocks: PathBuf::from("src/components/ide/VisualEditor/blocks"),
            sdk: PathBuf::from("src/sdk"),
            executor: PathBuf::from("src/executor/sdk"),
            classes: PathBuf::from("src/sdk/classes"),
        }
    }
}

/// An SDK module: its editor blocks and the functions it exposes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Module {
    pub name: String,

    /// Emit a `moduleFunctions` lookup table in the IDE file.
    #[serde(default)]
    pub include_lookup: bool,

    #[serde(default)]
    pub init: Init,

    #[serde(default)]
    pub blocks: Vec<Block>,

    #[serde(default)]
    pub functions: Vec<Function>,
}

/// Arguments of a module's `init` function.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Init {
    #[serde(default)]
    pub args: Vec<Argument>,
}

/// A block of the visual editor.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    pub name: String,

    /// Output type; blocks without one are statements.
    #[serde(default)]
    pub output: Option<String>,

    /// Statement blocks wrapping other statements are laid out non-inline.
    #[serde(default)]
    pub scope: bool,

    #[serde(default = "default_colour")]
    pub colour: u32,

    #[serde(default)]
    pub args: Vec<Argument>,

    /// Messages per language; the overlay file is merged in at load time.
    #[serde(default)]
    pub langs: BTreeMap<String, BlockMessages>,
}

impl Block {
    pub fn is_statement(&self) -> bool {
        self.output.is_none()
    }

    pub fn messages(&self, lang: &str) -> Option<&BlockMessages> {
        self.langs.get(lang)
    }
}

fn default_colour() -> u32 {
    120
}

/// A function exposed by an SDK module.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Function {
    pub name: String,

    /// The executor waits for a reply to this command.
    #[serde(default)]
    pub has_reply: bool,

    #[serde(default)]
    pub args: Vec<Argument>,
}

/// An SDK class.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Class {
    pub name: String,

    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default)]
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Method {
    pub name: String,

    #[serde(default = "default_true", rename = "async")]
    pub is_async: bool,

    #[serde(default)]
    pub args: Vec<Argument>,
}

fn default_true() -> bool {
    true
}

/// A block input/field or a typed SDK parameter.
///
/// For block arguments `ty` is the editor kind (`field_number`,
/// `input_value`, ...) and `extra` holds the remaining editor attributes.
/// For SDK arguments `ty` is a type annotation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Argument {
    /// Empty for `input_dummy` block arguments.
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(flatten)]
    pub extra: IndexMap<String, toml::Value>,
}

impl Argument {
    pub fn is_field(&self) -> bool {
        self.ty.starts_with("field_")
    }

    pub fn is_input(&self) -> bool {
        self.ty.starts_with("input_")
    }
}
